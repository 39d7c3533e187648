//! JSON entry point for embedding front ends.
//!
//! Seed-deterministic: the same request JSON always produces the same
//! outcome, which keeps replays and front-end retries honest.

use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json;

use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::models::{Direction, ShotOutcome};
use crate::prediction::Prediction;
use crate::resolver::resolve_with_rng;

#[derive(Debug, Deserialize)]
pub struct ShotResolveRequest {
    pub seed: u64,
    pub target_zone: u8,
    pub prediction: Prediction,
}

#[derive(Debug, Serialize)]
pub struct ShotResolveResponse {
    pub keeper_direction: Direction,
    pub outcome: ShotOutcome,
}

/// Resolve one shot from a JSON request, returning a JSON response.
///
/// Request shape:
/// `{ "seed": u64, "target_zone": 1-9, "prediction":
///    { "dive_zones": [dir, dir], "probabilities": { dir: p } } }`
pub fn resolve_shot_json(request_json: &str) -> Result<String> {
    let request: ShotResolveRequest = serde_json::from_str(request_json)?;
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let (keeper_direction, outcome) =
        resolve_with_rng(&request.prediction, request.target_zone, &mut rng)?;
    let response = ShotResolveResponse { keeper_direction, outcome };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoundError;

    const REQUEST: &str = r#"{
        "seed": 11,
        "target_zone": 5,
        "prediction": {
            "dive_zones": ["Left", "Right"],
            "probabilities": { "Left": 0.5, "Right": 0.3 }
        }
    }"#;

    #[test]
    fn test_resolve_shot_json_is_deterministic() {
        let first = resolve_shot_json(REQUEST).unwrap();
        let second = resolve_shot_json(REQUEST).unwrap();
        assert_eq!(first, second);

        let response: serde_json::Value = serde_json::from_str(&first).unwrap();
        let dir = response["keeper_direction"].as_str().unwrap();
        assert!(["Left", "Center", "Right"].contains(&dir));
        let outcome = response["outcome"].as_str().unwrap();
        assert!(["goal", "blocked"].contains(&outcome));
    }

    #[test]
    fn test_malformed_request_rejected() {
        assert!(matches!(
            resolve_shot_json("{ not json"),
            Err(RoundError::InvalidPrediction(_))
        ));
        // Structurally valid JSON, invalid prediction payload.
        let bad = r#"{
            "seed": 1,
            "target_zone": 5,
            "prediction": { "dive_zones": ["Left"], "probabilities": { "Left": 0.5 } }
        }"#;
        assert!(matches!(
            resolve_shot_json(bad),
            Err(RoundError::InvalidPrediction(_))
        ));
    }

    #[test]
    fn test_zone_out_of_range_rejected() {
        let bad = r#"{
            "seed": 1,
            "target_zone": 12,
            "prediction": {
                "dive_zones": ["Left", "Right"],
                "probabilities": { "Left": 0.5, "Right": 0.3 }
            }
        }"#;
        assert!(matches!(
            resolve_shot_json(bad),
            Err(RoundError::InvalidZone(12))
        ));
    }
}
