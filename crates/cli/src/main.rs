//! # capplan
//!
//! Command-line client for the capacity-planning analytics backend. Each
//! subcommand fetches one dashboard page, shapes it and prints the view as
//! JSON.

use std::fs::File;
use std::path::{Path, PathBuf};

use analytics_facade::prelude::*;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "capplan")]
#[command(about = "Capacity-planning analytics client", long_about = None)]
struct Cli {
    /// Config file (TOML); defaults apply when it does not exist
    #[arg(short, long, global = true, default_value = "capplan.toml")]
    config: PathBuf,

    /// Backend base URL, overrides the config file and CAPPLAN_API_BASE
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output file (optional)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List regions, resource types and the available date range
    Options,

    /// Usage charts for one page of feature rows
    Usage {
        #[arg(long)]
        region: Option<String>,

        /// VM, Storage or Container
        #[arg(long)]
        resource_type: Option<String>,

        /// First day, YYYY-MM-DD
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end_date: Option<NaiveDate>,

        #[arg(long, default_value = "1")]
        page: u32,

        /// Rows per page (default: from config)
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Forecast with confidence band
    Forecast(ForecastArgs),

    /// Demand forecast plus capacity recommendation
    Capacity(ForecastArgs),

    /// Correlations, seasonality and the insight panels
    Insights,

    /// Model health and drift status
    Monitoring,

    /// Model comparison table
    Models,

    /// Retrain all models, then print the refreshed comparison
    Train,
}

#[derive(Args)]
struct ForecastArgs {
    #[arg(long, default_value = "East US")]
    region: String,

    /// VM, Storage or Container
    #[arg(long, default_value = "VM")]
    service: String,

    /// xgboost, arima or lstm
    #[arg(long, default_value = "xgboost")]
    model: String,

    /// Days ahead
    #[arg(long, default_value = "30")]
    horizon: u32,
}

impl From<ForecastArgs> for ForecastQuery {
    fn from(args: ForecastArgs) -> Self {
        ForecastQuery::new(args.region, args.service, args.model, args.horizon)
    }
}

/// Turn a non-applied resolution into an error.
fn applied(resolution: Resolution) -> anyhow::Result<()> {
    match resolution {
        Resolution::Applied => Ok(()),
        Resolution::Stale => bail!("request was superseded by a newer selection"),
        Resolution::Failed { error, .. } => Err(error.into()),
    }
}

fn loaded<T: Clone>(state: ViewState<T>) -> anyhow::Result<T> {
    state
        .as_loaded()
        .cloned()
        .context("view has no data loaded")
}

fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(&mut file, value)
                .context("Failed to write output")?;
            println!("Results written to {:?}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

async fn run(
    session: &DashboardSession<HttpAnalyticsClient>,
    config: &AnalyticsConfig,
    command: Commands,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    match command {
        Commands::Options => emit(&session.load_filter_options().await?, output),

        Commands::Usage {
            region,
            resource_type,
            start_date,
            end_date,
            page,
            page_size,
        } => {
            let mut query = config
                .feature_query()
                .with_dates(start_date, end_date);
            let size = page_size.unwrap_or(query.page_size);
            query = query.with_page(page, size);
            if let Some(region) = region {
                query = query.with_region(region);
            }
            if let Some(resource_type) = resource_type {
                query = query.with_resource_type(resource_type);
            }
            applied(session.refresh_usage(query).await)?;
            emit(&loaded(session.usage().await)?, output)
        }

        Commands::Forecast(args) => {
            applied(session.refresh_forecast(args.into()).await)?;
            emit(&loaded(session.forecast().await)?, output)
        }

        Commands::Capacity(args) => {
            applied(session.refresh_capacity(args.into()).await)?;
            emit(&loaded(session.capacity().await)?, output)
        }

        Commands::Insights => {
            applied(session.refresh_insights().await)?;
            emit(&loaded(session.insights().await)?, output)
        }

        Commands::Monitoring => {
            applied(session.refresh_monitoring().await)?;
            emit(&loaded(session.monitoring().await)?, output)
        }

        Commands::Models => {
            applied(session.refresh_models().await)?;
            emit(&loaded(session.models().await)?, output)
        }

        Commands::Train => {
            applied(session.train_all_models().await?)?;
            emit(&loaded(session.models().await)?, output)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "capplan=info,analytics_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AnalyticsConfig::load(Some(&cli.config))?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
        config.validate()?;
    }
    info!(base_url = %config.base_url, "connecting to analytics backend");

    let session = config.session()?;
    run(&session, &config, cli.command, cli.output.as_deref()).await
}
