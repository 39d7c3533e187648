//! Seam between the engine and the remote keeper-dive model.

use crate::error::Result;
use crate::models::ShotRequest;
use crate::prediction::Prediction;

/// Anything that can turn a shot description into a top-2 dive belief.
///
/// The engine never talks to the network itself; drivers hand it an
/// implementation (the HTTP client in `pk_gateway`, or a fixture in
/// tests). Implementations must map transport failures to
/// `RoundError::GatewayUnavailable` and non-conforming payloads to
/// `RoundError::InvalidPrediction`.
pub trait PredictionGateway {
    fn predict(&self, request: &ShotRequest) -> Result<Prediction>;
}
