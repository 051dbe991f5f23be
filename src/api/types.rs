//! Webhook payload and response types

use serde::{Deserialize, Serialize};

/// Events the gateway posts to the webhook
///
/// Unknown event names decode to `Unknown`, so a newer gateway never breaks
/// inbound handling.
#[derive(Debug, Deserialize)]
#[serde(tag = "event")]
pub enum WebhookEvent {
    #[serde(rename = "onmessage")]
    Message(InboundMessage),

    #[serde(rename = "qrcode")]
    QrCode(QrCodePayload),

    #[serde(rename = "status-find")]
    Status(StatusPayload),

    #[serde(other)]
    Unknown,
}

/// One inbound chat message
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    /// Sender chat id, also the reply address
    pub from: String,
    /// Absent for non-text messages (stickers, audio, media)
    pub body: Option<String>,
}

/// Pairing QR code, re-sent whenever the session needs pairing
#[derive(Debug, Deserialize)]
pub struct QrCodePayload {
    /// Data URI ready for an img tag
    pub qrcode: String,
}

/// Session status change notification
#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: String,
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
