//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use picalc_orchestration::ComputationResult;

/// Format a digit string for display, eliding the middle of long ones.
#[must_use]
pub fn format_pi(pi: &str, verbose: bool) -> String {
    if !verbose && pi.len() > 100 {
        format!(
            "{}...{} ({} digits)",
            &pi[..52],
            &pi[pi.len() - 50..],
            pi.len().saturating_sub(2)
        )
    } else {
        pi.to_string()
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format reported seconds (already rounded) for display.
#[must_use]
pub fn format_seconds(secs: f64) -> String {
    format_duration(Duration::from_secs_f64(secs.max(0.0)))
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Serialize a result as JSON.
pub fn to_json(result: &ComputationResult, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

/// Write the digit string to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, pi: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{pi}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picalc_core::BackendKind;
    use picalc_orchestration::WorkerTiming;

    fn sample() -> ComputationResult {
        ComputationResult {
            pi_digits: "3.14159".into(),
            digits: 5,
            elapsed_seconds: 0.0021,
            worker_count: 1,
            backend_used: BackendKind::Fallback,
            fast_backend: false,
            per_worker_timings: vec![WorkerTiming {
                owner_id: 0,
                seconds: 0.0019,
            }],
        }
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_seconds_clamps_negative() {
        assert!(format_seconds(-1.0).contains("µs"));
        assert_eq!(format_seconds(2.5), "2.500s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn format_pi_short_is_unchanged() {
        assert_eq!(format_pi("3.14159", false), "3.14159");
    }

    #[test]
    fn format_pi_long_is_elided() {
        let pi = format!("3.{}", "1".repeat(200));
        let shown = format_pi(&pi, false);
        assert!(shown.starts_with("3.1111"));
        assert!(shown.contains("..."));
        assert!(shown.ends_with("(200 digits)"));
        assert_eq!(format_pi(&pi, true), pi);
    }

    #[test]
    fn json_round_trip_fields() {
        let json = to_json(&sample(), false).unwrap();
        assert!(json.contains(r#""pi":"3.14159""#));
        assert!(json.contains(r#""backend":"fallback""#));
        assert!(json.contains(r#""timings":[{"process":0,"seconds":0.0019}]"#));
    }

    #[test]
    fn write_to_file_writes_digits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pi.txt");
        write_to_file(path.to_str().unwrap(), "3.14159").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "3.14159\n");
    }
}
