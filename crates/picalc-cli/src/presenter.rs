//! CLI result presenter.

use picalc_orchestration::{ComputationResult, ResultPresenter};

use crate::output::{format_number, format_pi, format_seconds, to_json};
use crate::ui::{error_line, header};

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable summary.
    Text,
    /// Only the digit string.
    Quiet,
    /// The JSON result object.
    Json,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    mode: OutputMode,
    verbose: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(mode: OutputMode, verbose: bool) -> Self {
        Self { mode, verbose }
    }

    /// Render a result as the lines that `present_result` prints.
    #[must_use]
    pub fn render(&self, result: &ComputationResult, details: bool) -> String {
        match self.mode {
            OutputMode::Quiet => result.pi_digits.clone(),
            OutputMode::Json => to_json(result, self.verbose)
                .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}")),
            OutputMode::Text => self.render_text(result, details),
        }
    }

    fn render_text(&self, result: &ComputationResult, details: bool) -> String {
        let mut lines = vec![
            header("PiCalc"),
            format!("Digits: {}", format_number(result.digits)),
            format!("Workers: {}", result.worker_count),
            format!("Backend: {}", result.backend_used),
            format!("Duration: {}", format_seconds(result.elapsed_seconds)),
        ];

        if details {
            lines.push(String::new());
            lines.push("Worker timings:".to_string());
            lines.push(format!("{:-<40}", ""));
            for timing in &result.per_worker_timings {
                lines.push(format!(
                    "  worker {:<6} {:>12}",
                    timing.owner_id,
                    format_seconds(timing.seconds)
                ));
            }
            lines.push(String::new());
        }

        lines.push(format!("π = {}", format_pi(&result.pi_digits, self.verbose)));
        lines.join("\n")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &ComputationResult, details: bool) {
        println!("{}", self.render(result, details));
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", error_line(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picalc_core::BackendKind;
    use picalc_orchestration::WorkerTiming;

    fn sample() -> ComputationResult {
        ComputationResult {
            pi_digits: "3.1415926535".into(),
            digits: 10,
            elapsed_seconds: 0.0042,
            worker_count: 2,
            backend_used: BackendKind::Fallback,
            fast_backend: false,
            per_worker_timings: vec![
                WorkerTiming {
                    owner_id: 0,
                    seconds: 0.001,
                },
                WorkerTiming {
                    owner_id: 1,
                    seconds: 0.002,
                },
            ],
        }
    }

    #[test]
    fn quiet_renders_digits_only() {
        let presenter = CLIResultPresenter::new(OutputMode::Quiet, false);
        assert_eq!(presenter.render(&sample(), true), "3.1415926535");
    }

    #[test]
    fn json_renders_result_object() {
        let presenter = CLIResultPresenter::new(OutputMode::Json, false);
        let out = presenter.render(&sample(), false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["pi"], "3.1415926535");
        assert_eq!(value["processes"], 2);
    }

    #[test]
    fn text_includes_summary() {
        let presenter = CLIResultPresenter::new(OutputMode::Text, false);
        let out = presenter.render(&sample(), false);
        assert!(out.contains("Digits: 10"));
        assert!(out.contains("Backend: fallback"));
        assert!(out.contains("π = 3.1415926535"));
        assert!(!out.contains("Worker timings"));
    }

    #[test]
    fn text_details_lists_every_worker() {
        let presenter = CLIResultPresenter::new(OutputMode::Text, false);
        let out = presenter.render(&sample(), true);
        assert!(out.contains("Worker timings"));
        assert!(out.contains("worker 0"));
        assert!(out.contains("worker 1"));
    }

    #[test]
    fn present_error_does_not_panic() {
        let presenter = CLIResultPresenter::new(OutputMode::Text, false);
        presenter.present_error("worker 3 failed: panicked");
    }
}
