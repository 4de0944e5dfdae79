//! HR Dashboard Data Engine
//!
//! This crate prepares an HR employee dataset (parsing dates and deriving age
//! and tenure), runs the aggregations behind the HRDataset dashboard, and
//! hands the resulting chart data to a renderer as JSON.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod charts;
pub mod config;
pub mod error;
pub mod models;
pub mod preparation;
