//! Monitoring module for homework status changes
//!
//! - Telegram notifications
//! - Polling loop driver

pub mod poller;
pub mod telegram_alert;

pub use poller::{fault_message, CycleOutcome, StatusPoller};
pub use telegram_alert::{ChatClient, ChatSender, TelegramAlert};
