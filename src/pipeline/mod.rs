//! Pipeline entry points for harvest operations.
//!
//! - `run_harvest`: Fetch the newest items, map them and write the report
//! - `map`: Per-column derivation rules
//! - `export`: CSV serialization

pub mod export;
pub mod harvest;
pub mod map;

pub use export::{to_csv_bytes, to_csv_string, write_csv};
pub use harvest::{HarvestSummary, run_harvest};
pub use map::RecordMapper;
