use std::fmt;

use async_trait::async_trait;

use super::types::{ShowDetail, ShowSummary};

/// Errors that can occur while talking to the catalog API.
/// There is no retry policy; every variant surfaces once and stops loading.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body did not decode into the expected shape.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A source of podcast catalog data.
///
/// The trait is the seam between the app and the remote API: the real
/// implementation is [`crate::api::HttpCatalog`], tests substitute an
/// in-memory catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the full show listing.
    async fn fetch_shows(&self) -> Result<Vec<ShowSummary>, CatalogError>;

    /// Fetches the detail record for a single show by id.
    async fn fetch_show(&self, id: &str) -> Result<ShowDetail, CatalogError>;
}
