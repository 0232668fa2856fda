use std::process::ExitCode;
use std::sync::Arc;

use homework_bot::config::AppConfig;
use homework_bot::domain::homework::PracticumClient;
use homework_bot::monitoring::{StatusPoller, TelegramAlert};
use homework_bot::shutdown::shutdown_signal;
use homework_bot::state::PollState;
use homework_bot::utils::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. 환경변수 로드 (.env 파일이 없어도 무방)
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 종료 시까지 유지)
    let _guard = init_logging();

    // 3. 설정 로드: 필수 값이 없으면 루프에 들어가지 않고 종료
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Critical: configuration is incomplete, exiting");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(config = ?config, "Configuration loaded");

    // 4. 클라이언트 구성
    let api = match PracticumClient::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Critical: failed to build homework API client");
            return ExitCode::FAILURE;
        }
    };
    let chat = match TelegramAlert::from_config(&config) {
        Ok(chat) => chat,
        Err(e) => {
            tracing::error!(error = %e, "Critical: failed to build Telegram client");
            return ExitCode::FAILURE;
        }
    };

    // 5. 폴링 루프 실행
    let poller = StatusPoller::new(Arc::new(api), Arc::new(chat), config.retry_time);
    poller
        .run_loop(PollState::starting_now(), shutdown_signal())
        .await;

    tracing::info!("Homework bot stopped");
    ExitCode::SUCCESS
}
