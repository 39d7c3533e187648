//! Prediction payload from the keeper-dive model.
//!
//! The model reports only its top-2 dive directions with their
//! probabilities; the third direction implicitly carries the remaining
//! mass. The invariants here make that implicit remainder safe to use:
//! a payload whose listed mass exceeds 1 is an upstream model error and
//! is rejected rather than clamped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, RoundError};
use crate::models::Direction;

/// Tolerance for float round-off when two wire probabilities sum to ~1.
const MASS_EPSILON: f64 = 1e-9;

/// Top-2 keeper-dive belief as delivered by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Ranked dive directions, most likely first. Must hold exactly two
    /// distinct entries.
    pub dive_zones: Vec<Direction>,
    /// Probability for each ranked direction, in [0,1].
    pub probabilities: HashMap<Direction, f64>,
}

impl Prediction {
    pub fn new(dive_zones: Vec<Direction>, probabilities: HashMap<Direction, f64>) -> Self {
        Self { dive_zones, probabilities }
    }

    /// Check every invariant the resolver relies on.
    pub fn validate(&self) -> Result<()> {
        if self.dive_zones.len() != 2 {
            return Err(RoundError::InvalidPrediction(format!(
                "expected exactly 2 ranked dive zones, got {}",
                self.dive_zones.len()
            )));
        }
        if self.dive_zones[0] == self.dive_zones[1] {
            return Err(RoundError::InvalidPrediction(format!(
                "duplicate ranked dive zone: {}",
                self.dive_zones[0]
            )));
        }
        let mut mass = 0.0;
        for dir in &self.dive_zones {
            let p = self.probability_of(*dir)?;
            if !(0.0..=1.0).contains(&p) {
                return Err(RoundError::InvalidPrediction(format!(
                    "probability for {} out of [0,1]: {}",
                    dir, p
                )));
            }
            mass += p;
        }
        if mass > 1.0 + MASS_EPSILON {
            return Err(RoundError::InvalidPrediction(format!(
                "ranked probability mass exceeds 1: {}",
                mass
            )));
        }
        Ok(())
    }

    /// Probability reported for a ranked direction.
    pub fn probability_of(&self, dir: Direction) -> Result<f64> {
        self.probabilities.get(&dir).copied().ok_or_else(|| {
            RoundError::InvalidPrediction(format!("missing probability for {}", dir))
        })
    }

    /// The single direction absent from the ranking. Carries the
    /// leftover probability mass. Only meaningful after `validate`.
    pub fn unranked_direction(&self) -> Direction {
        for dir in Direction::ALL {
            if !self.dive_zones.contains(&dir) {
                return dir;
            }
        }
        // validate() guarantees two distinct entries, so one is free.
        Direction::Center
    }
}
