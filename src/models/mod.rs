// src/models/mod.rs

//! Domain models for the harvester.
//!
//! Search response records, report rows, run inputs and configuration.

mod config;
mod inputs;
mod output;
mod source;

// Re-export all public types
pub use config::{ApiConfig, Config, ConstantColumns, LinkTemplates, OutputConfig};
pub use inputs::{ResultCount, RunInputs, YearMonth};
pub use output::{HEADER, OutputRecord};
pub use source::{ParentId, SourceRecord, parse_search_response};
