use crate::io::DataFormat;
use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Credit one period of interest to a file of time deposits
#[derive(Parser, Debug)]
#[command(name = "time-deposit-engine")]
#[command(about = "Credit monthly interest to time deposits", long_about = None)]
pub struct CliArgs {
    /// Input file path containing deposit records (CSV, or JSON by extension)
    #[arg(
        value_name = "INPUT",
        required_unless_present = "emit_seed",
        help = "Path to the input deposits file (.csv or .json)"
    )]
    pub input_file: Option<PathBuf>,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for single-threaded or 'async' for sharded batches"
    )]
    pub strategy: StrategyType,

    /// Number of deposits per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of deposits per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Worker threads and shards per batch (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Worker threads and shards per batch (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        help = "Output format: 'csv' or 'json' (default: same as input)"
    )]
    pub format: Option<DataFormat>,

    /// Print the built-in seed deposits instead of processing a file
    #[arg(long = "emit-seed", conflicts_with = "input_file")]
    pub emit_seed: bool,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values take the defaults; zero values are replaced by the
    /// defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "input.csv"], StrategyType::Async)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
        assert_eq!(parsed.input_file, Some(PathBuf::from("input.csv")));
    }

    #[rstest]
    #[case::default_follows_input(&["program", "input.csv"], None)]
    #[case::csv(&["program", "--format", "csv", "input.json"], Some(DataFormat::Csv))]
    #[case::json(&["program", "--format", "json", "input.csv"], Some(DataFormat::Json))]
    fn test_format_parsing(#[case] args: &[&str], #[case] expected: Option<DataFormat>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.format, expected);
    }

    #[test]
    fn test_emit_seed_needs_no_input() {
        let parsed = CliArgs::try_parse_from(["program", "--emit-seed", "--format", "json"]).unwrap();
        assert!(parsed.emit_seed);
        assert!(parsed.input_file.is_none());
        assert_eq!(parsed.format, Some(DataFormat::Json));
    }

    #[rstest]
    #[case::batch_size(&["program", "--batch-size", "2000", "input.csv"], Some(2000), None)]
    #[case::max_concurrent(&["program", "--max-concurrent", "8", "input.csv"], None, Some(8))]
    #[case::no_options(&["program", "input.csv"], None, None)]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] batch_size: Option<usize>,
        #[case] max_concurrent: Option<usize>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.batch_size, batch_size);
        assert_eq!(parsed.max_concurrent_batches, max_concurrent);
    }

    #[rstest]
    #[case::all_defaults(&["program", "input.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "input.csv"], 2000, num_cpus::get())]
    #[case::all_custom(
        &["program", "--batch-size", "2000", "--max-concurrent", "8", "input.csv"],
        2000,
        8
    )]
    #[case::zero_batch_size(&["program", "--batch-size", "0", "input.csv"], 1000, num_cpus::get())]
    #[case::zero_max_concurrent(&["program", "--max-concurrent", "0", "input.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_max_concurrent);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "input.csv"])]
    #[case::invalid_format(&["program", "--format", "xml", "input.csv"])]
    #[case::seed_with_input(&["program", "--emit-seed", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
