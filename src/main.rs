//! Time Deposit Engine CLI
//!
//! Credits one period of interest to every deposit in a file and writes the
//! updated deposits to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- deposits.csv > accrued.csv
//! cargo run -- --strategy sync deposits.csv > accrued.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 deposits.csv > accrued.csv
//! cargo run -- --format json deposits.csv > accrued.json
//! cargo run -- --emit-seed --format json > seed.json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change verbosity.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output not writable, etc.)

use std::process;
use time_deposit_engine::seed::seed_deposits;
use time_deposit_engine::types::DepositError;
use time_deposit_engine::{cli, io, strategy};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "time_deposit_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        error!(error = %e, "accrual run failed");
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), DepositError> {
    let mut output = std::io::stdout().lock();

    let Some(input_file) = args.input_file.as_deref() else {
        // clap only lets this through with --emit-seed
        let deposits = seed_deposits(chrono::Utc::now());
        return io::write_deposits(&deposits, args.format.unwrap_or_default(), &mut output);
    };

    let config = matches!(args.strategy, cli::StrategyType::Async).then(|| args.to_batch_config());
    let strategy = strategy::create_strategy(args.strategy, config, args.format);

    let report = strategy.process(input_file, &mut output)?;

    info!(
        strategy = ?args.strategy,
        total = report.total(),
        credited = report.credited,
        unchanged = report.unchanged,
        no_plan = report.no_plan,
        failed = report.failures.len(),
        "processed deposits"
    );

    Ok(())
}
