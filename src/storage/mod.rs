//! Storage abstractions for harvest output.
//!
//! ## Directory Structure
//!
//! ```text
//! {root}/
//! ├── request_data.json          # Raw search response (optional cache)
//! └── reports/
//!     ├── allNewItems_20260901.csv
//!     └── allNewItems_20261001.csv
//! ```

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for report storage backends.
#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// Store the raw search response body under `key`.
    async fn write_raw_response(&self, key: &str, body: &[u8]) -> Result<PathBuf>;

    /// Store a finished CSV report under `key`, replacing any previous
    /// report with the same name.
    async fn write_report(&self, key: &str, csv: &[u8]) -> Result<PathBuf>;
}
