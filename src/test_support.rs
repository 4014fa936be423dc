//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{CatalogError, CatalogProvider, ShowDetail, ShowSummary};

/// An in-memory catalog for tests that don't need real HTTP.
pub struct StaticCatalog {
    pub shows: Vec<ShowSummary>,
    pub details: Vec<ShowDetail>,
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_shows(&self) -> Result<Vec<ShowSummary>, CatalogError> {
        Ok(self.shows.clone())
    }

    async fn fetch_show(&self, id: &str) -> Result<ShowDetail, CatalogError> {
        self.details
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(CatalogError::Api {
                status: 404,
                message: format!("no show {id}"),
            })
    }
}

/// A quick summary fixture.
pub fn show_summary(id: &str, title: &str, updated: &str, genres: &[u32]) -> ShowSummary {
    ShowSummary {
        id: id.to_string(),
        title: title.to_string(),
        updated: updated.to_string(),
        genres: genres.to_vec(),
        image: String::new(),
        seasons: 1,
    }
}
