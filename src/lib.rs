//! Core entry point for the maintenance_report crate.

pub mod builder;
pub mod fonts;
pub mod layout;
pub mod model;

pub use builder::{generate_report, RenderedReport, ReportBuilder, ReportError};
pub use layout::{LayoutError, ReportLayout};
pub use model::{MaintenanceRecord, ReportRequest, ReportResponse};
