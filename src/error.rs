use num_bigint::BigInt;
use thiserror::Error;

/// Validation failures surfaced by the numeric core. All of them are
/// synchronous, typed results; nothing in the core panics on bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("precision must be at least 2, got {precision}")]
    InvalidPrecision { precision: u32 },
    #[error("seed must satisfy 0 <= seed < 2^{precision}, got {seed}")]
    SeedOutOfRange { seed: BigInt, precision: u32 },
    #[error("step count must be at least 1, got {count}")]
    InvalidStepCount { count: u32 },
}
