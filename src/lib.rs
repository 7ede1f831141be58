// src/lib.rs

//! Map Harvest Library
//!
//! Fetches the newest map items from the UMedia catalog search API and
//! turns them into a fixed-schema CSV report for archival cataloging.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
