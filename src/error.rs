use thiserror::Error;

/// Errors surfaced by the GF(2) reduction routines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("malformed basis: {0}")]
    MalformedBasis(String),
}

/// Result type alias for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
