//! CLI entry point for the Student Payout Engine.
//!
//! `calculate` reads a workplace directory and an attendance log and prints
//! the payout table to stdout. `serve` exposes the same calculation over HTTP.
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use student_payout::api::{AppState, create_router};
use student_payout::calculation::PayoutAggregator;
use student_payout::config::{ConfigLoader, RoundingPolicy};
use student_payout::input::{read_attendances, read_workplaces};
use student_payout::models::CalculationResult;
use student_payout::output::render_csv;

#[derive(Parser)]
#[command(name = "student-payout")]
#[command(about = "Calculate daily student payouts from attendance records", long_about = None)]
struct Cli {
    /// YAML file with the rate table and rounding policy
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate payouts from a workplace file and an attendance file
    Calculate {
        /// Workplace directory (columns: id, location)
        workplaces: PathBuf,

        /// Attendance log (columns: id, dob, status, location, workplace_id)
        attendance: PathBuf,

        /// Compute ages as of this date instead of today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        as_of: Option<NaiveDate>,

        /// Override the configured rounding policy
        #[arg(long, value_enum)]
        rounding: Option<Rounding>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Serve the calculation over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Rounding {
    /// Round every record and the running total to cents
    PerRecord,
    /// Round each student's total once
    Final,
}

impl From<Rounding> for RoundingPolicy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::PerRecord => RoundingPolicy::PerRecord,
            Rounding::Final => RoundingPolicy::Final,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `id,payout` table
    Csv,
    /// Full calculation result with per-record breakdown
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    match cli.command {
        Commands::Calculate {
            workplaces,
            attendance,
            as_of,
            rounding,
            format,
        } => {
            let config = match rounding {
                Some(rounding) => config.with_rounding(rounding.into()),
                None => config,
            };

            let workplace_rows = read_workplaces(&workplaces)
                .with_context(|| format!("reading workplaces from {}", workplaces.display()))?;
            let attendance_rows = read_attendances(&attendance)
                .with_context(|| format!("reading attendance from {}", attendance.display()))?;

            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
            let report = PayoutAggregator::from_config(&config).calculate_as_of(
                &workplace_rows,
                &attendance_rows,
                as_of,
            );

            match format {
                Format::Csv => print!("{}", render_csv(&report.totals)),
                Format::Json => {
                    let result = CalculationResult::from_report(report, as_of);
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
            }
        }
        Commands::Serve { addr } => {
            let router = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            info!(%addr, "Listening");
            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}
