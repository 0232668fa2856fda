pub mod config;
pub mod domain;
pub mod monitoring;
pub mod shutdown;
pub mod state;
pub mod utils;

pub use config::{AppConfig, ConfigError};
pub use monitoring::StatusPoller;
pub use state::PollState;
