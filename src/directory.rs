//! Business directory lookup
//!
//! Thin client for the city directory API: a single endpoint dispatched on
//! an `action` query parameter. Each call is one request, no retries; the
//! conversation layer reports a failure once and lets the user resend.

mod http;

pub use http::HttpDirectoryClient;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// One business record as returned by the directory.
///
/// Only the name is guaranteed; everything else renders as a placeholder
/// when absent. Records live only as long as the session that fetched them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Business {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    #[serde(rename = "site")]
    pub website: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "imagem")]
    pub image: Option<String>,
}

/// Lookup interface consumed by the conversation engine
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Search businesses whose name matches the query
    async fn search_by_name(&self, query: &str) -> Result<Vec<Business>, DirectoryError>;

    /// Search businesses registered under an exact category
    async fn search_by_category(&self, category: &str) -> Result<Vec<Business>, DirectoryError>;

    /// List all known category names, in directory order
    async fn list_categories(&self) -> Result<Vec<String>, DirectoryError>;
}

/// Directory call failure. Logged in full server-side; the user only ever
/// sees a canned apology.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("directory returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode directory response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Directory endpoint configuration
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub base_url: String,
}

impl DirectoryConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GUIA_DIRECTORY_URL")
                .unwrap_or_else(|_| "https://vilela24horas.com.br/api.php".to_string()),
        }
    }
}
