//! Application configuration from CLI flags and environment.

use clap::Parser;

use picalc_orchestration::ComputationRequest;

/// PiCalc-rs: parallel Chudnovsky π calculator.
#[derive(Parser, Debug)]
#[command(name = "picalc", version, about)]
pub struct AppConfig {
    /// Number of decimal digits of π to compute.
    #[arg(short = 'n', long, default_value = "1000", env = "PICALC_DIGITS")]
    pub digits: usize,

    /// Worker count (0 = available hardware parallelism).
    #[arg(short, long, default_value = "0", env = "PICALC_PROCESSES")]
    pub processes: usize,

    /// Skip the native backend and use decimal arithmetic.
    #[arg(long)]
    pub no_fast: bool,

    /// Print the result as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode (only output the digits).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (full digit string, debug logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show per-worker timings.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path for the digit string.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The computation request these flags describe.
    #[must_use]
    pub fn request(&self) -> ComputationRequest {
        ComputationRequest {
            digits: self.digits,
            processes: (self.processes > 0).then_some(self.processes),
            use_fast_backend: !self.no_fast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["picalc"]).unwrap();
        let req = config.request();
        assert_eq!(req.digits, 1000);
        assert_eq!(req.processes, None);
        assert!(req.use_fast_backend);
    }

    #[test]
    fn flags_map_to_request() {
        let config =
            AppConfig::try_parse_from(["picalc", "-n", "50", "-p", "3", "--no-fast"]).unwrap();
        let req = config.request();
        assert_eq!(req.digits, 50);
        assert_eq!(req.processes, Some(3));
        assert!(!req.use_fast_backend);
    }

    #[test]
    fn json_conflicts_with_quiet() {
        assert!(AppConfig::try_parse_from(["picalc", "--json", "-q"]).is_err());
    }

    #[test]
    fn negative_digits_rejected_by_parser() {
        assert!(AppConfig::try_parse_from(["picalc", "-n", "-5"]).is_err());
    }
}
