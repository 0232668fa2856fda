//! 로깅 초기화 모듈
//!
//! stdout에는 사람이 읽기 쉬운 형식으로, `LOG_DIR`의 롤링 파일에는
//! JSON 형식으로 동시에 출력합니다.

use time::format_description::well_known::Rfc3339;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 보관할 로그 파일 개수
const MAX_LOG_FILES: usize = 5;

const DEFAULT_FILTER: &str = "info,homework_bot=debug";

/// 로깅 시스템을 초기화합니다.
///
/// 로그 레벨은 `RUST_LOG`로 설정하며 기본값은 `info,homework_bot=debug`입니다.
/// 파일은 일별로 교체되며 최근 5개만 남깁니다. 파일명 형식: `homework_bot.YYYY-MM-DD.log`
///
/// 반환되는 `WorkerGuard`를 main에서 유지해야 버퍼링된 로그가 손실되지 않습니다.
/// 파일 싱크를 만들 수 없으면 stdout만 사용하고 `None`을 반환합니다.
pub fn init_logging() -> Option<WorkerGuard> {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::UtcTime::new(Rfc3339))
        .with_target(false);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("homework_bot")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&log_dir);

    let (file_layer, guard) = match file_appender {
        Ok(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_timer(fmt::time::UtcTime::new(Rfc3339))
                .with_current_span(true)
                .flatten_event(false)
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        Err(err) => {
            eprintln!("Failed to create log file in {}: {}", log_dir, err);
            (None, None)
        }
    };

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        // 이미 초기화된 경우(테스트 등)는 무시
        eprintln!("Failed to initialize tracing: {}", err);
    }

    guard
}
