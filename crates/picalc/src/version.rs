//! Version and platform information.

use picalc_core::registry::capabilities;

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Startup banner: version, available backends and host platform.
#[must_use]
pub fn banner() -> String {
    let backend = if capabilities().native_fast {
        "mpfr"
    } else {
        "decimal"
    };
    format!(
        "picalc {} | backend: {backend} | {}-{}",
        version(),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
