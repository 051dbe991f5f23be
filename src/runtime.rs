//! Runtime for executing conversations
//!
//! Owns the per-user mailboxes that serialize message handling: each user
//! gets one bounded channel drained by one worker task, so a second message
//! from the same user can never race the first one's session update.
//! Workers for different users interleave freely.

mod engine;

#[cfg(test)]
pub mod testing;

pub use engine::Engine;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// Inbound messages a user can have queued behind the one being handled
const MAILBOX_CAPACITY: usize = 32;

/// One mailbox per user, created on first contact
pub struct UserMailboxes {
    engine: Arc<Engine>,
    mailboxes: RwLock<HashMap<String, mpsc::Sender<String>>>,
}

impl UserMailboxes {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
            mailboxes: RwLock::new(HashMap::new()),
        }
    }

    /// Queue one inbound message for its user
    ///
    /// Get-or-spawn happens under the write lock so two near-simultaneous
    /// first messages cannot spawn two workers for one user. The send happens
    /// after the lock is released so one full mailbox never blocks dispatch
    /// for everyone else.
    pub async fn dispatch(&self, from: &str, body: String) {
        let tx = {
            let mut mailboxes = self.mailboxes.write().await;
            if let Some(tx) = mailboxes.get(from) {
                tx.clone()
            } else {
                let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
                tokio::spawn(run_worker(Arc::clone(&self.engine), from.to_string(), rx));
                mailboxes.insert(from.to_string(), tx.clone());
                tx
            }
        };

        if tx.send(body).await.is_err() {
            tracing::error!(user = %from, "User worker is gone, dropping message");
        }
    }
}

async fn run_worker(engine: Arc<Engine>, user: String, mut rx: mpsc::Receiver<String>) {
    tracing::debug!(user = %user, "Starting user worker");
    while let Some(body) = rx.recv().await {
        engine.handle_message(&user, &body).await;
    }
    tracing::debug!(user = %user, "User worker finished");
}
