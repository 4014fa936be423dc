pub mod client;
pub mod probe;
pub mod provider;
pub mod types;

pub use client::HttpCatalog;
pub use probe::{FfprobeProbe, MediaProbe, NoopProbe};
pub use provider::{CatalogError, CatalogProvider};
pub use types::{Episode, Season, ShowDetail, ShowSummary};
