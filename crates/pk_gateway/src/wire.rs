//! Wire format of the keeper-dive prediction service.
//!
//! Field names follow the service's schema exactly (`Team`, `Foot`,
//! `Zone`, `Penalty_Number`, `Elimination` on the way out; `dive_zones`
//! and `probabilities` on the way back). Decoding is strict: anything
//! that fails to parse into a valid [`Prediction`] is reported as
//! `InvalidPrediction`, never patched up locally.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use pk_core::{Direction, Foot, Prediction, Result, ShotRequest};

/// POST /predict request body.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    #[serde(rename = "Team")]
    pub team: &'a str,
    #[serde(rename = "Foot")]
    pub foot: Foot,
    #[serde(rename = "Zone")]
    pub zone: u8,
    #[serde(rename = "Penalty_Number")]
    pub penalty_number: u8,
    #[serde(rename = "Elimination")]
    pub elimination: u8,
}

impl<'a> From<&'a ShotRequest> for PredictRequest<'a> {
    fn from(request: &'a ShotRequest) -> Self {
        Self {
            team: &request.team,
            foot: request.foot,
            zone: request.target_zone,
            penalty_number: request.penalty_number,
            elimination: request.elimination as u8,
        }
    }
}

/// POST /predict response body.
///
/// Direction labels arrive as free strings and are only promoted to
/// [`Direction`] during conversion, so an unknown label is a clean
/// `InvalidPrediction` instead of a serde type error.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub dive_zones: Vec<String>,
    pub probabilities: HashMap<String, f64>,
}

impl PredictResponse {
    /// Promote the raw payload to a validated [`Prediction`].
    pub fn into_prediction(self) -> Result<Prediction> {
        let dive_zones = self
            .dive_zones
            .iter()
            .map(|label| label.parse::<Direction>())
            .collect::<Result<Vec<Direction>>>()?;
        let mut probabilities = HashMap::new();
        for (label, p) in &self.probabilities {
            probabilities.insert(label.parse::<Direction>()?, *p);
        }
        let prediction = Prediction::new(dive_zones, probabilities);
        prediction.validate()?;
        Ok(prediction)
    }
}
