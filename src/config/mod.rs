//! Configuration loading for the HR Dashboard.
//!
//! This module loads the dashboard configuration from a YAML file: the page
//! title, dataset location, bind address, reference date, age bounds and
//! histogram resolution.
//!
//! # Example
//!
//! ```no_run
//! use hr_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dashboard.yaml").unwrap();
//! println!("Serving: {}", config.config().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::DashboardConfig;
