//! Chudnovsky series constants and engine configuration defaults.

/// Extra decimal digits carried above the requested output precision.
pub const GUARD_DIGITS: usize = 10;

/// Approximate number of correct decimal digits contributed by each series term.
pub const DIGITS_PER_TERM: usize = 14;

/// Default number of digits when a request does not specify one.
pub const DEFAULT_DIGITS: usize = 1000;

/// Largest digit count accepted by the engine.
///
/// Every term index then stays far below `u32::MAX`, which keeps the
/// exact integer powers and factorials addressable.
pub const MAX_DIGITS: usize = 100_000_000;

/// Constant part of the linear factor `545140134·k + 13591409`.
pub const LINEAR_BASE: u64 = 13_591_409;

/// Slope of the linear factor `545140134·k + 13591409`.
pub const LINEAR_SLOPE: u64 = 545_140_134;

/// Base of the signed power in the term denominator, `-640320^3`.
pub const POWER_BASE: i64 = -262_537_412_640_768_000;

/// Integer multiplier of the Chudnovsky constant `C = 426880·sqrt(10005)`.
pub const C_MULTIPLIER: u32 = 426_880;

/// Radicand of the Chudnovsky constant `C = 426880·sqrt(10005)`.
pub const C_RADICAND: u32 = 10_005;

/// Minimum number of factors in a product range before the two halves of
/// the factorial product tree are multiplied on separate rayon tasks.
pub const PARALLEL_PRODUCT_THRESHOLD: usize = 2048;

/// Below this many factors the product tree multiplies sequentially.
pub const PRODUCT_LEAF_SIZE: usize = 16;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A worker failed to report its partial sum.
    pub const ERROR_WORKER: i32 = 3;
    /// Invalid request or configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// No arithmetic backend could be constructed.
    pub const ERROR_BACKEND: i32 = 5;
}
