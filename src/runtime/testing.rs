//! Mock collaborators for runtime tests
//!
//! These mocks enable conversation testing without real I/O.

use super::Engine;
use crate::directory::{Business, DirectoryClient, DirectoryError};
use crate::store::SessionStore;
use crate::wpp::{OutboundDispatcher, SendError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// What a directory mock was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    SearchByName(String),
    SearchByCategory(String),
    ListCategories,
}

/// Directory client that returns queued results
///
/// Both search methods pull from the same queue, so a test scripts results
/// in the order the engine will ask for them.
#[derive(Default)]
pub struct MockDirectory {
    searches: Mutex<VecDeque<Result<Vec<Business>, DirectoryError>>>,
    categories: Mutex<VecDeque<Result<Vec<String>, DirectoryError>>>,
    calls: Mutex<Vec<DirectoryCall>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_businesses(&self, businesses: Vec<Business>) {
        self.searches.lock().unwrap().push_back(Ok(businesses));
    }

    pub fn queue_search_error(&self) {
        self.searches.lock().unwrap().push_back(Err(scripted_error()));
    }

    pub fn queue_categories(&self, categories: Vec<String>) {
        self.categories.lock().unwrap().push_back(Ok(categories));
    }

    pub fn queue_categories_error(&self) {
        self.categories
            .lock()
            .unwrap()
            .push_back(Err(scripted_error()));
    }

    pub fn recorded_calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_search(&self) -> Result<Vec<Business>, DirectoryError> {
        self.searches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unqueued_error()))
    }
}

#[async_trait]
impl DirectoryClient for MockDirectory {
    async fn search_by_name(&self, query: &str) -> Result<Vec<Business>, DirectoryError> {
        self.calls
            .lock()
            .unwrap()
            .push(DirectoryCall::SearchByName(query.to_string()));
        self.next_search()
    }

    async fn search_by_category(&self, category: &str) -> Result<Vec<Business>, DirectoryError> {
        self.calls
            .lock()
            .unwrap()
            .push(DirectoryCall::SearchByCategory(category.to_string()));
        self.next_search()
    }

    async fn list_categories(&self) -> Result<Vec<String>, DirectoryError> {
        self.calls.lock().unwrap().push(DirectoryCall::ListCategories);
        self.categories
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unqueued_error()))
    }
}

/// Directory whose name searches block until released, for ordering tests
#[derive(Default)]
pub struct GatedDirectory {
    pub inner: MockDirectory,
    pub search_started: Notify,
    pub release_search: Notify,
}

impl GatedDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DirectoryClient for GatedDirectory {
    async fn search_by_name(&self, query: &str) -> Result<Vec<Business>, DirectoryError> {
        self.inner
            .calls
            .lock()
            .unwrap()
            .push(DirectoryCall::SearchByName(query.to_string()));
        self.search_started.notify_one();
        self.release_search.notified().await;
        self.inner.next_search()
    }

    async fn search_by_category(&self, category: &str) -> Result<Vec<Business>, DirectoryError> {
        self.inner.search_by_category(category).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, DirectoryError> {
        self.inner.list_categories().await
    }
}

/// One delivery recorded by the mock dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Text(String),
    Image {
        image: String,
        filename: String,
        caption: String,
    },
}

/// Dispatcher that records everything it is asked to send
#[derive(Default)]
pub struct MockDispatcher {
    sent: Mutex<Vec<(String, SentMessage)>>,
    fail_images: AtomicBool,
    fail_texts: AtomicBool,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every image send fail; the attempt is still recorded
    pub fn fail_images(&self) {
        self.fail_images.store(true, Ordering::Relaxed);
    }

    /// Make every text send fail; the attempt is still recorded
    pub fn fail_texts(&self) {
        self.fail_texts.store(true, Ordering::Relaxed);
    }

    pub fn sent(&self) -> Vec<(String, SentMessage)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, user: &str) -> Vec<SentMessage> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| to == user)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Just the text bodies, in send order
    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(_, message)| match message {
                SentMessage::Text(text) => Some(text.clone()),
                SentMessage::Image { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl OutboundDispatcher for MockDispatcher {
    async fn send_text(&self, to: &str, text: &str) -> Result<(), SendError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), SentMessage::Text(text.to_string())));
        if self.fail_texts.load(Ordering::Relaxed) {
            return Err(scripted_send_error());
        }
        Ok(())
    }

    async fn send_image(
        &self,
        to: &str,
        image_url: &str,
        filename: &str,
        caption: &str,
    ) -> Result<(), SendError> {
        self.sent.lock().unwrap().push((
            to.to_string(),
            SentMessage::Image {
                image: image_url.to_string(),
                filename: filename.to_string(),
                caption: caption.to_string(),
            },
        ));
        if self.fail_images.load(Ordering::Relaxed) {
            return Err(scripted_send_error());
        }
        Ok(())
    }
}

/// Engine wired to fresh mocks, plus handles to all of them
pub fn test_engine() -> (
    Engine,
    Arc<SessionStore>,
    Arc<MockDirectory>,
    Arc<MockDispatcher>,
) {
    let store = Arc::new(SessionStore::new());
    let directory = Arc::new(MockDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new());
    let engine = Engine::new(
        Arc::clone(&store),
        directory.clone(),
        dispatcher.clone(),
    );
    (engine, store, directory, dispatcher)
}

/// Poll until `check` passes, failing the test after a 5s budget
pub async fn wait_for(check: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !check() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

fn scripted_error() -> DirectoryError {
    DirectoryError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "scripted failure".to_string(),
    }
}

fn unqueued_error() -> DirectoryError {
    DirectoryError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "no mock result queued".to_string(),
    }
}

fn scripted_send_error() -> SendError {
    SendError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "scripted failure".to_string(),
    }
}
