use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::utils::BotError;

/// 숙제 상태 API 인터페이스
///
/// 실제 HTTP 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HomeworkApi: Send + Sync {
    /// `from_date` 이후 변경된 숙제 상태 조회
    ///
    /// `None`이면 현재 시각을 사용합니다. 재시도는 하지 않습니다.
    async fn fetch_statuses(&self, from_date: Option<i64>) -> Result<Value, BotError>;
}

/// Arc로 래핑된 HomeworkApi (Clone 지원)
pub type HomeworkApiClient = Arc<dyn HomeworkApi>;

/// Practicum 숙제 상태 API 클라이언트 구현체
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    auth_header: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BotError::Transport)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_header: format!("OAuth {}", token),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        Self::new(
            config.endpoint.clone(),
            &config.practicum_token,
            config.request_timeout,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch_statuses(&self, from_date: Option<i64>) -> Result<Value, BotError> {
        let timestamp = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());
        debug!(from_date = timestamp, endpoint = %self.endpoint, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Homework status request failed");
                BotError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = %status, "Homework status endpoint returned unexpected status");
            return Err(BotError::ResponseStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read homework status response body");
            BotError::Transport(e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Homework status response is not valid JSON");
            BotError::Decode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_practicum_client() {
        // Arrange & Act
        let client = PracticumClient::new(
            "https://practicum.yandex.ru/api/user_api/homework_statuses/",
            "test-token",
            Duration::from_secs(5),
        )
        .expect("client should build");

        // Assert
        assert_eq!(
            client.endpoint(),
            "https://practicum.yandex.ru/api/user_api/homework_statuses/"
        );
        assert_eq!(client.auth_header, "OAuth test-token");
    }

    #[tokio::test]
    async fn should_return_transport_error_when_endpoint_unreachable() {
        // Arrange: 포트 1번은 열려 있지 않음
        let client = PracticumClient::new(
            "http://127.0.0.1:1/homework_statuses/",
            "test-token",
            Duration::from_secs(2),
        )
        .expect("client should build");

        // Act
        let result = client.fetch_statuses(Some(0)).await;

        // Assert
        assert!(matches!(result, Err(BotError::Transport(_))));
    }
}
