//! 폴링 사이클 단위 에러 타입
//!
//! 설정 에러를 제외한 모든 에러는 루프 드라이버에서 잡혀
//! 장애 알림 메시지로 변환됩니다. 따라서 `Display` 문자열에는
//! 원인을 판단할 수 있는 핵심 정보(상태 코드, 누락 키 등)가 들어가야 합니다.

use thiserror::Error;

/// 한 사이클 안에서 발생할 수 있는 에러
#[derive(Debug, Error)]
pub enum BotError {
    /// 엔드포인트가 200 이외의 상태 코드를 반환
    #[error("endpoint returned HTTP {status}, expected 200")]
    ResponseStatus { status: u16 },

    /// 타임아웃, 연결 실패, DNS 실패 등 전송 계층 에러
    #[error("request to endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// 응답 본문이 올바른 JSON이 아님
    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// 응답 구조가 기대와 다름
    #[error("unexpected type for {field}: expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// 필수 키 누락
    #[error("required key \"{0}\" is missing")]
    MissingKey(&'static str),

    /// 카탈로그에 없는 숙제 상태
    #[error("unknown homework status \"{0}\"")]
    UnknownStatus(String),

    /// 채팅 메시지 전송 실패
    #[error("failed to deliver chat message: {0}")]
    Delivery(String),
}

impl BotError {
    pub fn type_mismatch(field: &'static str, expected: &'static str) -> Self {
        BotError::TypeMismatch { field, expected }
    }

    /// 로그 필드용 에러 종류
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::ResponseStatus { .. } => "response_status",
            BotError::Transport(_) => "transport",
            BotError::Decode(_) => "decode",
            BotError::TypeMismatch { .. } => "type_mismatch",
            BotError::MissingKey(_) => "missing_key",
            BotError::UnknownStatus(_) => "unknown_status",
            BotError::Delivery(_) => "delivery",
        }
    }
}
