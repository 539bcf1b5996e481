//! Engine error type.
//!
//! Only two conditions are fatal to an evaluation: an empty station set
//! ([`AqError::InvalidInput`]) and defective configuration data
//! ([`AqError::InvalidConfig`]).  Degenerate-but-valid inputs such as an
//! unknown road id or an empty alternative set produce defined outputs and
//! never surface here.

use thiserror::Error;

/// The top-level error type for `aq-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AqError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `aq-*` crates.
pub type AqResult<T> = Result<T, AqError>;
