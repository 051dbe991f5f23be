//! Outbound WhatsApp delivery
//!
//! Messages leave through a WPPConnect-style HTTP gateway: one REST call per
//! message, addressed by the recipient's chat id. The gateway owns the actual
//! WhatsApp session; this module only talks to its API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Delivery seam for everything the assistant says
///
/// The conversation layer never talks HTTP directly. It hands finished
/// message text (or an image reference) to this trait and moves on.
#[async_trait]
pub trait OutboundDispatcher: Send + Sync {
    async fn send_text(&self, to: &str, text: &str) -> Result<(), SendError>;

    async fn send_image(
        &self,
        to: &str,
        image_url: &str,
        filename: &str,
        caption: &str,
    ) -> Result<(), SendError>;
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct WppConfig {
    pub base_url: String,
    pub session: String,
    pub token: Option<String>,
}

impl WppConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GUIA_WPP_URL")
                .unwrap_or_else(|_| "http://localhost:21465".to_string()),
            session: std::env::var("GUIA_WPP_SESSION")
                .unwrap_or_else(|_| "guia-ilheus".to_string()),
            token: std::env::var("GUIA_WPP_TOKEN").ok(),
        }
    }
}

/// Production dispatcher backed by the gateway's REST API
pub struct WppGateway {
    client: Client,
    config: WppConfig,
}

impl WppGateway {
    pub fn new(config: WppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    async fn post(&self, endpoint: &str, payload: serde_json::Value) -> Result<(), SendError> {
        let url = format!(
            "{}/api/{}/{}",
            self.config.base_url, self.config.session, endpoint
        );

        let mut request = self.client.post(&url).json(&payload);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Status { status, body });
        }

        Ok(())
    }
}

#[async_trait]
impl OutboundDispatcher for WppGateway {
    async fn send_text(&self, to: &str, text: &str) -> Result<(), SendError> {
        self.post(
            "send-message",
            json!({
                "phone": to,
                "message": text,
            }),
        )
        .await
    }

    async fn send_image(
        &self,
        to: &str,
        image_url: &str,
        filename: &str,
        caption: &str,
    ) -> Result<(), SendError> {
        self.post(
            "send-image",
            json!({
                "phone": to,
                "path": image_url,
                "filename": filename,
                "caption": caption,
            }),
        )
        .await
    }
}
