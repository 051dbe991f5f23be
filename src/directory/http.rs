//! HTTP adapter for the directory API

use super::{Business, DirectoryClient, DirectoryConfig, DirectoryError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Row shape of the `categorias` action
#[derive(Debug, Deserialize)]
struct CategoryRow {
    categoria: String,
}

/// Production client for the directory endpoint
pub struct HttpDirectoryClient {
    client: Client,
    base_url: String,
}

impl HttpDirectoryClient {
    pub fn new(config: DirectoryConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// One GET against the endpoint, returning the raw body on 2xx
    async fn fetch(&self, action: &str, query: Option<&str>) -> Result<String, DirectoryError> {
        let mut params = vec![("action", action)];
        if let Some(q) = query {
            params.push(("q", q));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DirectoryError::Status {
                status,
                body: snippet(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn search_by_name(&self, query: &str) -> Result<Vec<Business>, DirectoryError> {
        let body = self.fetch("buscarPorNome", Some(query)).await?;
        serde_json::from_str(&body).map_err(DirectoryError::Decode)
    }

    async fn search_by_category(&self, category: &str) -> Result<Vec<Business>, DirectoryError> {
        let body = self.fetch("buscarPorCategoria", Some(category)).await?;
        serde_json::from_str(&body).map_err(DirectoryError::Decode)
    }

    async fn list_categories(&self) -> Result<Vec<String>, DirectoryError> {
        let body = self.fetch("categorias", None).await?;
        let rows: Vec<CategoryRow> = serde_json::from_str(&body).map_err(DirectoryError::Decode)?;
        Ok(rows.into_iter().map(|r| r.categoria).collect())
    }
}

/// Cap error bodies so a stray HTML error page does not flood the logs
fn snippet(body: &str) -> String {
    const MAX: usize = 300;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        let mut out: String = body.chars().take(MAX).collect();
        out.push('…');
        out
    }
}
