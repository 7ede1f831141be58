// src/services/mod.rs

//! Service layer for remote catalog access.

pub mod catalog;

pub use catalog::{CatalogClient, FetchedItems, ORGANIZATION_FACET, parse_records};
