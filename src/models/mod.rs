//! Core data models for the HR Dashboard engine.
//!
//! This module contains the employee record, the prepared dataset, and the
//! summary table shape shared by every aggregation.

mod dataset;
mod record;
mod summary;

pub use dataset::Dataset;
pub use record::Record;
pub use summary::{SummaryRow, SummaryTable};
