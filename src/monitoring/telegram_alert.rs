//! Telegram alert service for homework status notifications
//!
//! Sends plain text messages to a single chat via the Bot API `sendMessage` method.

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::utils::BotError;

/// Chat delivery interface
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatSender: Send + Sync {
    /// Deliver one text message to the configured chat
    async fn send_message(&self, text: &str) -> Result<(), BotError>;
}

/// Arc-wrapped ChatSender
pub type ChatClient = Arc<dyn ChatSender>;

/// `sendMessage` request payload
#[derive(Debug, Serialize)]
pub struct TelegramMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Bot API response envelope
#[derive(Debug, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Telegram alert service
#[derive(Debug, Clone)]
pub struct TelegramAlert {
    /// Full `sendMessage` URL (contains the bot token)
    send_url: String,
    /// Destination chat
    chat_id: String,
    /// HTTP client
    client: Client,
}

impl TelegramAlert {
    /// Create a new Telegram alert service
    pub fn new(api_url: &str, bot_token: &str, chat_id: impl Into<String>, client: Client) -> Self {
        Self {
            send_url: format!(
                "{}/bot{}/sendMessage",
                api_url.trim_end_matches('/'),
                bot_token
            ),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Create from loaded configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BotError::Delivery(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::new(
            &config.telegram_api_url,
            &config.telegram_token,
            config.telegram_chat_id.clone(),
            client,
        ))
    }

    /// Get the destination chat (for testing)
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Get the `sendMessage` URL (for testing)
    pub fn send_url(&self) -> &str {
        &self.send_url
    }
}

#[async_trait::async_trait]
impl ChatSender for TelegramAlert {
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id))]
    async fn send_message(&self, text: &str) -> Result<(), BotError> {
        let payload = TelegramMessage {
            chat_id: &self.chat_id,
            text,
        };

        // The bot token is part of the URL, so reqwest errors are logged without it
        let response = self
            .client
            .post(&self.send_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, "Failed to send Telegram message");
                BotError::Delivery(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            error!(status = %status, body = %body, "Telegram API returned error");
            return Err(BotError::Delivery(format!(
                "Telegram API error: {} - {}",
                status, body
            )));
        }

        match serde_json::from_str::<TelegramResponse>(&body) {
            Ok(reply) if reply.ok => {
                info!("Telegram message sent successfully");
                Ok(())
            }
            Ok(reply) => {
                let description = reply.description.unwrap_or_default();
                error!(description = %description, "Telegram API rejected message");
                Err(BotError::Delivery(format!(
                    "Telegram API rejected message: {}",
                    description
                )))
            }
            Err(e) => {
                error!(error = %e, body = %body, "Unreadable Telegram API response");
                Err(BotError::Delivery(format!(
                    "unreadable Telegram API response: {}",
                    e
                )))
            }
        }
    }
}
