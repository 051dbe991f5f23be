//! HTTP request handlers

use super::types::{SuccessResponse, WebhookEvent};
use super::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe
        .route("/", get(health))
        // Pairing QR code for the operator's browser
        .route("/qr", get(qr_page))
        // Inbound provider events
        .route("/webhook", post(webhook))
        .with_state(state)
}

async fn health() -> &'static str {
    "🤖 Guia Ilhéus está no ar"
}

/// Serve the last pairing QR code, 404 until the gateway has sent one
async fn qr_page(State(state): State<AppState>) -> Response {
    match state.qr.read().await.as_ref() {
        Some(qr) => Html(format!(
            "<html>\n  <body style=\"display:flex;justify-content:center;align-items:center;height:100vh\">\n    <img src=\"{qr}\" style=\"max-width:90%;height:auto\" />\n  </body>\n</html>"
        ))
        .into_response(),
        None => (StatusCode::NOT_FOUND, "QR ainda não gerado").into_response(),
    }
}

/// Receive one gateway event; always acknowledged so the gateway never retries
async fn webhook(
    State(state): State<AppState>,
    Json(event): Json<WebhookEvent>,
) -> Json<SuccessResponse> {
    match event {
        WebhookEvent::Message(message) => {
            if let Some(body) = message.body {
                state.mailboxes.dispatch(&message.from, body).await;
            } else {
                tracing::debug!(from = %message.from, "Ignoring inbound event without text body");
            }
        }
        WebhookEvent::QrCode(payload) => {
            tracing::info!("Received pairing QR code");
            *state.qr.write().await = Some(payload.qrcode);
        }
        WebhookEvent::Status(payload) => {
            tracing::info!(status = %payload.status, "Gateway session status changed");
        }
        WebhookEvent::Unknown => {
            tracing::debug!("Ignoring unrecognized webhook event");
        }
    }
    Json(SuccessResponse { success: true })
}
