//! Golden file integration tests.
//!
//! Runs the CLI against known expansions from tests/testdata/pi_golden.json.

use assert_cmd::Command;
use serde_json::Value;

fn load_golden() -> Vec<(usize, String)> {
    // Try workspace root path first, then crate-local path
    let data = std::fs::read_to_string("../../tests/testdata/pi_golden.json")
        .or_else(|_| std::fs::read_to_string("tests/testdata/pi_golden.json"))
        .expect("Failed to read golden file");
    let parsed: Value = serde_json::from_str(&data).expect("Failed to parse golden file");
    parsed["values"]
        .as_array()
        .expect("values array")
        .iter()
        .map(|v| {
            let digits = usize::try_from(v["digits"].as_u64().unwrap()).unwrap();
            (digits, v["pi"].as_str().unwrap().to_string())
        })
        .collect()
}

#[test]
fn golden_quiet_output() {
    for (digits, expected) in load_golden() {
        if digits > 500 {
            continue;
        }
        let output = Command::cargo_bin("picalc")
            .unwrap()
            .args(["-n", &digits.to_string(), "-p", "4", "-q"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{digits} digits failed");
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.trim_end(), expected, "{digits} digits");
    }
}
