//! Error types for the pendulum lab core.
//!
//! The core absorbs almost everything locally: bad numeric input becomes an
//! absent reading, illegal stopwatch transitions are silent no-ops. The
//! variants below cover the few places a caller genuinely needs feedback.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Pendulum lab error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be mapped onto the experiment schema
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Simulation parameters that make the period zero or undefined
    #[error("pendulum length must be positive and finite, got {0} cm: simulation cannot run")]
    ZeroLength(f64),

    /// Measurement log reached its capacity
    #[error("measurement log is full ({capacity} entries)")]
    LogFull {
        /// Maximum number of log entries
        capacity: usize,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
