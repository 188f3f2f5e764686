//! Error types for countdown construction

use thiserror::Error;

/// Errors raised while building a countdown engine.
///
/// Once an engine exists, computing and ticking cannot fail.
#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("invalid target instant '{input}' (expected YYYY-MM-DDTHH:mm:ss±HH:mm)")]
    InvalidTarget {
        input: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("tick cadence must be greater than zero")]
    ZeroCadence,
}
