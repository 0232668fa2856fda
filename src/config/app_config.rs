use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
/// 사이클 간 대기 시간 기본값 (초)
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;
/// HTTP 요청 타임아웃 기본값 (초)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 애플리케이션 설정
#[derive(Clone)]
pub struct AppConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_time: Duration,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 임의의 조회 함수에서 설정 로드
    ///
    /// 필수 변수가 비어 있거나 없으면 누락된 이름을 모두 로그로 남긴 뒤 에러를 반환합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |name: &'static str| {
            let value = lookup(name).filter(|value| !value.trim().is_empty());
            if value.is_none() {
                tracing::error!(variable = name, "Missing required environment variable");
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let endpoint = lookup("HOMEWORK_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let telegram_api_url = lookup("TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let retry_time = parse_secs(&lookup, "RETRY_TIME", DEFAULT_RETRY_TIME_SECS)?;
        let request_timeout =
            parse_secs(&lookup, "REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api_url,
            retry_time,
            request_timeout,
        })
    }
}

/// 양의 정수 초 단위 값을 읽습니다. 없으면 기본값을 사용합니다.
fn parse_secs<F>(lookup: &F, name: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(Duration::from_secs(default));
    };

    // 0은 허용하지 않음
    let parsed = value.trim().parse::<u64>();
    match parsed {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidNumber { name, value }),
    }
}

// 토큰 값이 로그에 남지 않도록 직접 구현
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_time", &self.retry_time)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("Invalid number for {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}
