//! # Payments Report
//!
//! Binary that wires together all the components:
//! - Load configuration from environment and flags
//! - Initialize the repository and clock adapters
//! - Create the query service
//! - Run one query and print the result as JSON

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payments_hex::PaymentQueryService;
use payments_repo::{FixedClock, JsonFilePaymentRepository, SystemClock};
use payments_types::{ClockSource, Payment, YearMonth};

use config::{Config, Overrides};

#[derive(Parser)]
#[command(name = "payments-report")]
#[command(author, version, about = "Reports over a payment snapshot", long_about = None)]
struct Cli {
    /// JSON file holding the payments
    #[arg(long, env = "PAYMENTS_DATA_FILE")]
    data: Option<PathBuf>,

    /// UTC offset of the system clock, e.g. +02:00
    #[arg(long, env = "PAYMENTS_UTC_OFFSET")]
    offset: Option<String>,

    /// Pin "now" to an RFC 3339 timestamp
    #[arg(long, env = "PAYMENTS_NOW")]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All payments, newest first
    Sorted,
    /// Payments in the current month
    CurrentMonth,
    /// Payments in the given month
    Month {
        /// Month as YYYY-MM
        month: YearMonth,
    },
    /// Payments in the last N days
    LastDays {
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Payments with exactly one item
    SingleItem,
    /// Product names sold in the current month
    ProductsThisMonth,
    /// Sum of final prices for a month
    Total {
        /// Month as YYYY-MM
        month: YearMonth,
    },
    /// Sum of discounts for a month
    Discounts {
        /// Month as YYYY-MM
        month: YearMonth,
    },
    /// Items bought by a user
    UserItems {
        /// Exact, case-sensitive email
        email: String,
    },
    /// Payments whose total is above a threshold
    Over {
        #[arg(allow_negative_numbers = true)]
        threshold: i64,
    },
    /// Count, totals and products for a month
    Summary {
        /// Month as YYYY-MM
        month: YearMonth,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Sets have no order; print them newest first so output is stable.
fn newest_first(payments: impl IntoIterator<Item = Payment>) -> Vec<Payment> {
    let mut payments: Vec<Payment> = payments.into_iter().collect();
    payments.sort_by(|a, b| {
        b.payment_date
            .cmp(&a.payment_date)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });
    payments
}

fn build_clock(config: &Config) -> Box<dyn ClockSource> {
    match config.now {
        Some(now) => {
            tracing::info!("Using fixed clock at {}", now);
            Box::new(FixedClock::new(now))
        }
        None => Box::new(SystemClock::new(config.utc_offset)),
    }
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payments_app=debug,payments_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env(Overrides {
        data_file: cli.data,
        utc_offset: cli.offset,
        now: cli.now,
    })?;

    let repo = JsonFilePaymentRepository::new(&config.data_file);
    tracing::info!("Reading payments from {}", repo.path().display());

    let clock = build_clock(&config);
    let service = PaymentQueryService::new(repo, clock);

    match cli.command {
        Commands::Sorted => print_json(&service.list_payments_by_date_descending()?),
        Commands::CurrentMonth => print_json(&service.list_payments_for_current_month()?),
        Commands::Month { month } => print_json(&service.list_payments_for_month(month)?),
        Commands::LastDays { days } => print_json(&service.list_payments_for_last_days(days)?),
        Commands::SingleItem => {
            print_json(&newest_first(service.set_of_payments_with_single_item()?))
        }
        Commands::ProductsThisMonth => {
            print_json(&service.set_of_product_names_sold_in_current_month()?)
        }
        Commands::Total { month } => print_json(&service.sum_of_final_prices_for_month(month)?),
        Commands::Discounts { month } => print_json(&service.sum_of_discounts_for_month(month)?),
        Commands::UserItems { email } => print_json(&service.items_for_user_email(&email)?),
        Commands::Over { threshold } => {
            print_json(&newest_first(service.set_of_payments_with_total_over(threshold)?))
        }
        Commands::Summary { month } => print_json(&service.monthly_summary(month)?),
    }
}
