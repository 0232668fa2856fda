/// 폴링 루프 상태
///
/// 루프 드라이버가 단독으로 소유하며, 사이클마다 넘겨받고 다시 돌려줍니다.
/// 프로세스 종료 시 버려집니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// 다음 요청의 `from_date` (unix 초)
    pub last_seen_timestamp: i64,
    /// 마지막으로 전달에 성공한 메시지
    pub last_sent_message: Option<String>,
}

impl PollState {
    pub fn new(started_at: i64) -> Self {
        Self {
            last_seen_timestamp: started_at,
            last_sent_message: None,
        }
    }

    /// 현재 시각 기준으로 시작
    pub fn starting_now() -> Self {
        Self::new(chrono::Utc::now().timestamp())
    }

    /// 직전에 전달한 메시지와 같은지 확인
    pub fn is_duplicate(&self, message: &str) -> bool {
        self.last_sent_message.as_deref() == Some(message)
    }

    pub fn record_sent(&mut self, message: String) {
        self.last_sent_message = Some(message);
    }

    pub fn advance_to(&mut self, timestamp: i64) {
        self.last_seen_timestamp = timestamp;
    }
}
