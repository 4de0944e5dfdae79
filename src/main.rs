use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hr_dashboard::api::{AppState, create_router};
use hr_dashboard::config::ConfigLoader;
use hr_dashboard::preparation::DatasetLoader;

/// Serve HRDataset dashboard chart data as JSON.
#[derive(Debug, Parser)]
#[command(name = "hr-dashboard", version, about)]
struct Cli {
    /// Path to the dashboard configuration file
    #[arg(long, default_value = "config/dashboard.yaml")]
    config: PathBuf,

    /// Override the dataset path from the configuration
    #[arg(long)]
    data: Option<PathBuf>,

    /// Override the bind address from the configuration
    #[arg(long)]
    bind: Option<String>,

    /// Reference date for age and tenure (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?
        .into_config();
    if let Some(data) = cli.data {
        config.dataset_path = data;
    }
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }

    let as_of = cli
        .as_of
        .or(config.as_of)
        .unwrap_or_else(|| Local::now().date_naive());

    let preparation = DatasetLoader::load(&config.dataset_path, as_of, config.age_bounds)
        .context("Failed to prepare dataset")?;

    for dropped in &preparation.dropped {
        warn!(line = dropped.line, reason = %dropped.reason, "Row excluded from dashboard");
    }
    info!(
        employees = preparation.dataset.len(),
        dropped = preparation.dropped.len(),
        as_of = %as_of,
        "Dataset ready"
    );

    let router = create_router(AppState::new(&config, preparation));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!(address = %config.bind_address, "Serving dashboard data");

    axum::serve(listener, router).await.context("Server error")?;
    Ok(())
}
