//! Thin client over the Telegram Bot HTTP API.
//!
//! Every public call reports success as a plain `bool`. Transport failures,
//! undecodable bodies and `ok: false` replies are logged and folded into
//! `false`; nothing is retried.

use crate::errors::NotifyError;
use crate::models::{ConnectionReport, TelegramSettings};
use chrono::Local;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: String,
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl TelegramClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_base)
    }

    pub fn with_client(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn method_url(&self, settings: &TelegramSettings, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, settings.bot_token, method)
    }

    pub async fn send_file(
        &self,
        file: Vec<u8>,
        filename: &str,
        settings: &TelegramSettings,
    ) -> bool {
        let part = match Part::bytes(file)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
        {
            Ok(part) => part,
            Err(err) => {
                warn!("failed to build telegram upload for {filename}: {err}");
                return false;
            }
        };
        let form = Form::new()
            .text("chat_id", settings.chat_id.clone())
            .part("document", part);

        let request = self
            .http
            .post(self.method_url(settings, "sendDocument"))
            .multipart(form);
        match call(request).await {
            Ok(_) => {
                info!(filename, "sent file to telegram");
                true
            }
            Err(err) => {
                warn!("failed to send file {filename} to telegram: {err}");
                false
            }
        }
    }

    pub async fn send_message(&self, text: &str, settings: &TelegramSettings) -> bool {
        let request = self
            .http
            .post(self.method_url(settings, "sendMessage"))
            .json(&json!({ "chat_id": settings.chat_id, "text": text }));
        match call(request).await {
            Ok(_) => true,
            Err(err) => {
                warn!("failed to send telegram message: {err}");
                false
            }
        }
    }

    /// Checks the bot token with `getMe`.
    pub async fn verify_credentials(&self, settings: &TelegramSettings) -> bool {
        let request = self.http.get(self.method_url(settings, "getMe"));
        match call(request).await {
            Ok(result) => {
                let username = result
                    .as_ref()
                    .and_then(|me| me.get("username"))
                    .and_then(Value::as_str)
                    .unwrap_or("unknown");
                info!("telegram credentials valid for @{username}");
                true
            }
            Err(err) => {
                warn!("telegram credential check failed: {err}");
                false
            }
        }
    }

    /// Runs the credential check and, if it passes, sends a confirmation message.
    pub async fn check_connection(&self, settings: &TelegramSettings) -> ConnectionReport {
        let credentials_valid = self.verify_credentials(settings).await;
        if !credentials_valid {
            return ConnectionReport::default();
        }

        let text = format!(
            "✅ Connection test successful ({})",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        ConnectionReport {
            credentials_valid,
            message_delivered: self.send_message(&text, settings).await,
        }
    }

    pub async fn test_connection(&self, settings: &TelegramSettings) -> bool {
        self.check_connection(settings).await.ok()
    }
}

/// Request URLs carry the bot token, so they are stripped from transport errors.
async fn call(request: RequestBuilder) -> Result<Option<Value>, NotifyError> {
    let response = request.send().await.map_err(reqwest::Error::without_url)?;
    let body: ApiResponse = response
        .json()
        .await
        .map_err(reqwest::Error::without_url)?;
    if body.ok {
        Ok(body.result)
    } else {
        Err(NotifyError::Remote {
            description: body
                .description
                .unwrap_or_else(|| "no description".to_string()),
        })
    }
}
