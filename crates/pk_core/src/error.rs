use std::fmt;

/// Errors surfaced while resolving a single penalty round.
///
/// All of these are recoverable at round granularity: the state machine
/// parks in `Failed` and the player starts over with a reset.
#[derive(Debug, Clone)]
pub enum RoundError {
    /// Gateway response violated the prediction invariants
    /// (cardinality, duplicate directions, probability mass).
    InvalidPrediction(String),
    /// Target zone outside the 1..=9 board.
    InvalidZone(u8),
    /// Shot request fields outside their allowed ranges.
    InvalidRequest(String),
    /// Transport-level failure talking to the prediction service.
    GatewayUnavailable(String),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RoundError::InvalidPrediction(msg) => {
                write!(f, "Invalid prediction: {}", msg)
            }
            RoundError::InvalidZone(zone) => {
                write!(f, "Invalid target zone: {} (must be 1-9)", zone)
            }
            RoundError::InvalidRequest(msg) => {
                write!(f, "Invalid shot request: {}", msg)
            }
            RoundError::GatewayUnavailable(msg) => {
                write!(f, "Prediction gateway unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for RoundError {}

impl From<serde_json::Error> for RoundError {
    fn from(err: serde_json::Error) -> Self {
        RoundError::InvalidPrediction(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RoundError>;
