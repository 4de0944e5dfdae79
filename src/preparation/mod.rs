//! Dataset preparation for the HR Dashboard engine.
//!
//! This module reads the HR export, parses date fields, derives age and
//! tenure, and filters out rows with unusable dates of birth or implausible
//! ages. Preparation never fails because of a bad row; it fails only when
//! the source is missing, unreadable, or lacks a required column.
//!
//! # Example
//!
//! ```no_run
//! use hr_dashboard::preparation::{AgeBounds, DatasetLoader};
//! use chrono::Local;
//!
//! let today = Local::now().date_naive();
//! let preparation = DatasetLoader::load("./data/HRDataset_v14.csv", today, AgeBounds::default())?;
//! for dropped in &preparation.dropped {
//!     println!("line {}: {}", dropped.line, dropped.reason);
//! }
//! # Ok::<(), hr_dashboard::error::DashboardError>(())
//! ```

mod dates;
mod derive;
mod loader;
mod report;
mod schema;

pub use dates::parse_date;
pub use derive::{
    AgeBounds, DAYS_PER_YEAR, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, age_in_years, tenure_in_years,
};
pub use loader::{DatasetLoader, prepare};
pub use report::{DropReason, DroppedRow, Preparation, PreparationReport};
pub use schema::REQUIRED_COLUMNS;
