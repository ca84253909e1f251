//! Workspace-level golden tests for PiCalc-rs live under `tests/`.
