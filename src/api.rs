//! HTTP surface: health check, QR pairing page, inbound webhook

mod handlers;
mod types;

pub use handlers::create_router;

use crate::runtime::{Engine, UserMailboxes};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mailboxes: Arc<UserMailboxes>,
    /// Last pairing QR code from the gateway, as an embeddable data URI
    pub qr: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(engine: Engine) -> Self {
        Self {
            mailboxes: Arc::new(UserMailboxes::new(engine)),
            qr: Arc::new(RwLock::new(None)),
        }
    }
}
