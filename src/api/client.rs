//! # HTTP Catalog Client
//!
//! [`CatalogProvider`] implementation backed by the remote podcast API.
//!
//! Two endpoints, both GET, both plain JSON:
//! - `{base}/` for the full show listing
//! - `{base}/id/{id}` for one show with its season/episode tree
//!
//! The base URL is injectable so integration tests can point the client at
//! a mock server. Requests carry no retry, timeout, or caching policy.

use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;

use super::provider::{CatalogError, CatalogProvider};
use super::types::{ShowDetail, ShowSummary};

pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.url(path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_shows(&self) -> Result<Vec<ShowSummary>, CatalogError> {
        let shows: Vec<ShowSummary> = self.get_json("").await?;
        info!("Fetched {} shows from {}", shows.len(), self.base_url);
        Ok(shows)
    }

    async fn fetch_show(&self, id: &str) -> Result<ShowDetail, CatalogError> {
        self.get_json(&format!("id/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let catalog = HttpCatalog::new("https://example.com/".to_string());
        assert_eq!(catalog.url(""), "https://example.com/");
        assert_eq!(catalog.url("id/42"), "https://example.com/id/42");
    }

    #[test]
    fn test_url_joins_bare_base() {
        let catalog = HttpCatalog::new("https://example.com".to_string());
        assert_eq!(catalog.url(""), "https://example.com/");
        assert_eq!(catalog.url("id/42"), "https://example.com/id/42");
    }
}
