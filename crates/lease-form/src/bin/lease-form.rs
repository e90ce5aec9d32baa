//! Submit a lease from the command line
//!
//! Fills the registration form from flags, posts it to the lease API and
//! prints the resulting banner. Exits non-zero when the lease is rejected.

use std::time::Duration;

use clap::Parser;
use lease_core::RequiredField;
use lease_form::{FormState, FormStatus, LeaseClient};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lease-form")]
#[command(about = "Create a lease record through the lease API")]
struct Args {
    /// Base URL of the lease API
    #[arg(long, env = "LEASE_API_URL", default_value = "http://localhost:3001")]
    url: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Tenant name
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    building_name: String,

    #[arg(long, default_value = "")]
    flat_number: String,

    #[arg(long, default_value = "")]
    tower_no: String,

    /// Lease start date, e.g. 2024-01-01
    #[arg(long, default_value = "")]
    lease_start_date: String,

    /// Lease end date, e.g. 2025-01-01
    #[arg(long, default_value = "")]
    lease_end_date: String,

    /// Monthly lease amount, e.g. 2500.00
    #[arg(long, default_value = "")]
    monthly_lease_amount: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut state = FormState::new();
    for (field, value) in [
        (RequiredField::Name, args.name),
        (RequiredField::BuildingName, args.building_name),
        (RequiredField::FlatNumber, args.flat_number),
        (RequiredField::TowerNo, args.tower_no),
        (RequiredField::LeaseStartDate, args.lease_start_date),
        (RequiredField::LeaseEndDate, args.lease_end_date),
        (RequiredField::MonthlyLeaseAmount, args.monthly_lease_amount),
    ] {
        state.set_field(field, value);
    }

    let client = LeaseClient::new(args.url, Duration::from_millis(args.timeout_ms))?;
    tracing::debug!("Submitting lease to {}", client.endpoint());

    match client.submit(&mut state).await? {
        FormStatus::Success { message } => {
            println!("✓ {}", message);
            Ok(())
        }
        FormStatus::Error { message } => {
            eprintln!("✗ {}", message);
            std::process::exit(1);
        }
        other => anyhow::bail!("Submission ended in unexpected state {:?}", other),
    }
}
