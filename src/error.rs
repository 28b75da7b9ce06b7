//! Error types for the preprocessing pipeline

use std::fmt;

/// Errors that can occur during audio preprocessing
#[derive(Debug, Clone)]
pub enum PreprocessError {
    /// Invalid input parameters (empty buffer, out-of-range configuration)
    InvalidInput(String),

    /// Numerical error (non-finite parameter, unstable filter coefficient)
    NumericalError(String),
}

impl fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PreprocessError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for PreprocessError {}
