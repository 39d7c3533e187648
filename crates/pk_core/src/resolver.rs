//! Shot resolver: prediction + target zone + one uniform draw → outcome.
//!
//! The unit interval is split into three consecutive half-open slices of
//! width p0, p1 and 1-p0-p1, assigned in order to the two ranked dive
//! directions and the unranked remainder. This mirrors a categorical
//! distribution over three keeper dives while the model only ships its
//! top-2 beliefs.
//!
//! `resolve` is a pure function of its inputs; fixing `random_unit`
//! reproduces any outcome exactly. Callers with a real randomness source
//! go through `resolve_with_rng`.

use rand::Rng;

use crate::error::{Result, RoundError};
use crate::models::{Direction, ShotOutcome};
use crate::prediction::Prediction;

/// Resolve one shot.
///
/// `random_unit` must be a uniform draw from [0,1). Interval bounds are
/// lower-inclusive: `random_unit == p0` lands in the second slice.
pub fn resolve(
    prediction: &Prediction,
    target_zone: u8,
    random_unit: f64,
) -> Result<(Direction, ShotOutcome)> {
    if !(1..=9).contains(&target_zone) {
        return Err(RoundError::InvalidZone(target_zone));
    }
    prediction.validate()?;

    let d0 = prediction.dive_zones[0];
    let d1 = prediction.dive_zones[1];
    let p0 = prediction.probability_of(d0)?;
    let p1 = prediction.probability_of(d1)?;

    let keeper_direction = if random_unit < p0 {
        d0
    } else if random_unit < p0 + p1 {
        d1
    } else {
        prediction.unranked_direction()
    };

    let outcome = if keeper_direction.covers(target_zone) {
        ShotOutcome::Blocked
    } else {
        ShotOutcome::Goal
    };

    tracing::debug!(
        %keeper_direction,
        target_zone,
        ?outcome,
        random_unit,
        "shot resolved"
    );
    Ok((keeper_direction, outcome))
}

/// Resolve one shot drawing the uniform sample from `rng`.
pub fn resolve_with_rng<R: Rng + ?Sized>(
    prediction: &Prediction,
    target_zone: u8,
    rng: &mut R,
) -> Result<(Direction, ShotOutcome)> {
    resolve(prediction, target_zone, rng.gen::<f64>())
}
