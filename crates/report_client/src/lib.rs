//! Client for the maintenance report service.
//!
//! Locates a JSON file of records, wraps it with an output folder and file name, and posts it to
//! the server's `/generate` endpoint in a single blocking call.

pub mod data;
pub mod dispatch;
pub mod error;

pub use data::{load_records, locate_data_file, DEFAULT_DATA_FILE};
pub use dispatch::{Outcome, ReportClient, DEFAULT_ENDPOINT, DEFAULT_REPORT_NAME};
pub use error::ClientError;
