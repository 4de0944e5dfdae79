//! Integration tests for the HR Dashboard engine.
//!
//! This test suite loads the bundled sample export and covers:
//! - Row filtering and drop reasons
//! - Two-digit birth years and records with missing numeric values
//! - Mean satisfaction by recruitment source
//! - Termination counts by department
//! - Tenure handling for missing hire dates
//! - The dashboard, chart and dataset endpoints

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use hr_dashboard::aggregation::{mean_satisfaction_by_source, terminations_by_department};
use hr_dashboard::api::{AppState, create_router};
use hr_dashboard::config::ConfigLoader;
use hr_dashboard::preparation::{DatasetLoader, DropReason, Preparation};

// =============================================================================
// Test Helpers
// =============================================================================

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn load_sample() -> Preparation {
    let config = ConfigLoader::load("./config/dashboard.yaml")
        .expect("Failed to load config")
        .into_config();
    DatasetLoader::load(&config.dataset_path, as_of(), config.age_bounds)
        .expect("Failed to load sample dataset")
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/dashboard.yaml")
        .expect("Failed to load config")
        .into_config();
    create_router(AppState::new(&config, load_sample()))
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Preparation
// =============================================================================

#[test]
fn test_sample_keeps_valid_rows() {
    let preparation = load_sample();
    assert_eq!(preparation.dataset.len(), 20);
    assert_eq!(preparation.dropped.len(), 5);
    assert!(preparation.dataset.iter().all(|r| (18..=99).contains(&r.age)));
}

#[test]
fn test_sample_drop_reasons() {
    let preparation = load_sample();
    let lines: Vec<u64> = preparation.dropped.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![3, 22, 23, 24, 25]);

    let reasons: Vec<&DropReason> = preparation.dropped.iter().map(|d| &d.reason).collect();
    assert_eq!(
        reasons[0],
        &DropReason::DateOfBirthNotInPast {
            date: NaiveDate::from_ymd_opt(2075, 5, 5).unwrap()
        }
    );
    assert_eq!(reasons[1], &DropReason::MissingDateOfBirth);
    assert!(matches!(reasons[2], DropReason::AgeOutOfRange { age } if *age < 18));
    assert!(matches!(reasons[3], DropReason::AgeOutOfRange { age } if *age > 99));
    assert_eq!(
        reasons[4],
        &DropReason::UnparseableDateOfBirth {
            value: "unknown".to_string()
        }
    );
}

#[test]
fn test_sample_two_digit_years_follow_century_window() {
    let preparation = load_sample();
    let beak = preparation
        .dataset
        .iter()
        .find(|r| r.name == "Beak, Kimberly")
        .unwrap();
    assert_eq!(beak.date_of_birth, NaiveDate::from_ymd_opt(1976, 4, 17).unwrap());
    assert_eq!(beak.age, 50);

    assert!(
        preparation
            .dataset
            .iter()
            .all(|r| !r.name.starts_with("Ait Sidi"))
    );
}

#[test]
fn test_sample_unparseable_numbers_keep_record() {
    let preparation = load_sample();
    let bondwell = preparation
        .dataset
        .iter()
        .find(|r| r.name == "Bondwell, Betsy")
        .unwrap();
    assert_eq!(bondwell.salary, None);
    assert_eq!(bondwell.satisfaction, None);
    assert_eq!(bondwell.absences, Some(14));
    assert!(bondwell.terminated);
}

#[test]
fn test_sample_missing_hire_date_keeps_record() {
    let preparation = load_sample();
    let barone = preparation
        .dataset
        .iter()
        .find(|r| r.name == "Barone, Francesco  A")
        .unwrap();
    assert!(barone.date_of_hire.is_none());
    assert!(barone.tenure_years.is_none());
}

// =============================================================================
// Aggregations
// =============================================================================

#[test]
fn test_sample_mean_satisfaction_by_source() {
    let preparation = load_sample();
    let table = mean_satisfaction_by_source(&preparation.dataset);

    let keys: Vec<&str> = table.keys().collect();
    assert_eq!(
        keys,
        vec![
            "Diversity Job Fair",
            "Employee Referral",
            "Google Search",
            "Indeed",
            "LinkedIn"
        ]
    );
    assert_close(*table.get("Diversity Job Fair").unwrap(), 3.5);
    assert_close(*table.get("Employee Referral").unwrap(), 4.0);
    assert_close(*table.get("Google Search").unwrap(), 3.6);
    assert_close(*table.get("Indeed").unwrap(), 13.0 / 3.0);
    assert_close(*table.get("LinkedIn").unwrap(), 4.2);
}

#[test]
fn test_sample_terminations_by_department() {
    let preparation = load_sample();
    let table = terminations_by_department(&preparation.dataset);

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].key, "Production");
    assert_eq!(table.rows[0].value, 8);
    assert_eq!(table.rows[1].key, "IT/IS");
    assert_eq!(table.rows[1].value, 1);
    assert_eq!(table.get("Software Engineering"), None);
}

// =============================================================================
// API
// =============================================================================

#[tokio::test]
async fn test_dashboard_endpoint() {
    let (status, json) = get_json(create_router_for_test(), "/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "HRDataset Dashboard");
    assert_eq!(json["as_of"], "2026-10-19");
    assert_eq!(json["record_count"], 20);
    assert_eq!(json["dropped_count"], 5);

    let first_section = &json["rows"][0]["sections"][0]["charts"];
    assert_eq!(first_section[0]["id"], "age-vs-salary");
    assert_eq!(first_section[1]["id"], "salary-by-department");
    assert!(!first_section[0]["description"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_tenure_chart_excludes_missing_hire_date_and_salary() {
    let (status, json) = get_json(create_router_for_test(), "/charts/tenure-vs-salary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["kind"], "scatter");
    assert_eq!(
        json["data"]["series"][0]["points"].as_array().unwrap().len(),
        18
    );
    assert_eq!(json["data"]["trendline"]["count"], 18);
}

#[tokio::test]
async fn test_performance_pie_counts() {
    let (status, json) = get_json(create_router_for_test(), "/charts/7").await;

    assert_eq!(status, StatusCode::OK);
    let slices = json["data"]["slices"].as_array().unwrap();
    let count_of = |name: &str| {
        slices
            .iter()
            .find(|s| s["category"] == name)
            .map(|s| s["count"].as_u64().unwrap())
    };
    assert_eq!(count_of("Exceeds"), Some(3));
    assert_eq!(count_of("Fully Meets"), Some(15));
    assert_eq!(count_of("Needs Improvement"), Some(1));
    assert_eq!(count_of("PIP"), Some(1));
}

#[tokio::test]
async fn test_salary_histogram_counts_every_known_salary() {
    let (status, json) = get_json(create_router_for_test(), "/charts/salary-distribution").await;

    assert_eq!(status, StatusCode::OK);
    let bins = json["data"]["series"][0]["bins"].as_array().unwrap();
    assert_eq!(bins.len(), 30);
    let total: u64 = bins.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 19);
}

#[tokio::test]
async fn test_dataset_endpoint() {
    let (status, json) = get_json(create_router_for_test(), "/dataset").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kept"], 20);
    assert_eq!(json["dropped"][0]["reason"], "date_of_birth_not_in_past");
    assert_eq!(json["dropped"][0]["date"], "2075-05-05");
}

#[tokio::test]
async fn test_unknown_chart_returns_404() {
    let (status, json) = get_json(create_router_for_test(), "/charts/headcount").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "CHART_NOT_FOUND");
}
