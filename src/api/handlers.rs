//! HTTP request handlers for the dashboard API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler reads the shared dataset and builds its response afresh.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::charts::{ChartId, build_chart, build_dashboard};
use crate::preparation::PreparationReport;

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/charts/:id", get(chart_handler))
        .route("/dataset", get(dataset_handler))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /dashboard.
///
/// Returns every chart arranged in the dashboard layout.
async fn dashboard_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Building dashboard");

    let start_time = Instant::now();
    let dashboard = build_dashboard(
        state.title(),
        state.dataset(),
        state.dropped(),
        state.options(),
    );

    info!(
        correlation_id = %correlation_id,
        records = dashboard.record_count,
        duration_us = start_time.elapsed().as_micros(),
        "Dashboard served"
    );
    json_ok(dashboard)
}

/// Handler for GET /charts/{id}.
///
/// Accepts a chart slug (e.g. `salary-distribution`) or number (`1`-`10`).
async fn chart_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, chart = %id, "Building chart");

    let chart_id = match id.parse::<ChartId>() {
        Ok(chart_id) => chart_id,
        Err(err) => {
            warn!(correlation_id = %correlation_id, chart = %id, "Chart not found");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let chart = build_chart(chart_id, state.dataset(), state.options());

    info!(
        correlation_id = %correlation_id,
        chart = %chart_id,
        duration_us = start_time.elapsed().as_micros(),
        "Chart served"
    );
    json_ok(chart)
}

/// Handler for GET /dataset.
///
/// Returns the preparation report: reference date, kept count and the
/// dropped rows with their reasons.
async fn dataset_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let report = PreparationReport::new(state.dataset(), state.dropped());

    info!(
        correlation_id = %correlation_id,
        kept = report.kept,
        dropped = report.dropped_count,
        "Preparation report served"
    );
    json_ok(report)
}
