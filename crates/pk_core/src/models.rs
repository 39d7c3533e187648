//! Domain types for one penalty round.
//!
//! The goal mouth is a 3x3 board of zones 1..=9, read left to right,
//! top to bottom from the kicker's point of view. The keeper commits to
//! one of three columns; a column intercepts the three zones above each
//! other on its side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RoundError};

/// National team codes accepted by the prediction model.
pub const TEAMS: [&str; 31] = [
    "ARG", "BEL", "BRA", "BUL", "CHI", "COL", "CRA", "CRO", "DEN", "ENG", "FRA", "GER", "GHA",
    "GRE", "HOL", "IRE", "ITA", "JAP", "KOR", "MEX", "PAR", "POR", "ROM", "RUM", "RUS", "SPA",
    "SWE", "SWZ", "UKR", "URU", "YUG",
];

/// Keeper dive direction, one per board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Center,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Center, Direction::Right];

    /// Zones intercepted by a keeper diving this way.
    /// Left={1,4,7}, Center={2,5,8}, Right={3,6,9}.
    pub fn column(&self) -> [u8; 3] {
        match self {
            Direction::Left => [1, 4, 7],
            Direction::Center => [2, 5, 8],
            Direction::Right => [3, 6, 9],
        }
    }

    /// Inverse of `column`: the unique column containing `zone`.
    ///
    /// Exhaustive and disjoint over the board: every zone in 1..=9 maps
    /// to exactly one direction.
    pub fn for_zone(zone: u8) -> Result<Direction> {
        if !(1..=9).contains(&zone) {
            return Err(RoundError::InvalidZone(zone));
        }
        Ok(match (zone - 1) % 3 {
            0 => Direction::Left,
            1 => Direction::Center,
            _ => Direction::Right,
        })
    }

    pub fn covers(&self, zone: u8) -> bool {
        self.column().contains(&zone)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "Left"),
            Direction::Center => write!(f, "Center"),
            Direction::Right => write!(f, "Right"),
        }
    }
}

impl FromStr for Direction {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Direction> {
        match s {
            "Left" => Ok(Direction::Left),
            "Center" => Ok(Direction::Center),
            "Right" => Ok(Direction::Right),
            other => Err(RoundError::InvalidPrediction(format!(
                "unknown direction label: {other:?}"
            ))),
        }
    }
}

/// Kicking foot. Wire form is the single letter the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foot {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Foot {
    pub fn as_letter(&self) -> &'static str {
        match self {
            Foot::Left => "L",
            Foot::Right => "R",
        }
    }
}

/// Outcome of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Goal,
    Blocked,
}

/// Everything the player configures before the run-up.
///
/// Immutable once a round is submitted; a new round gets a new request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRequest {
    pub team: String,
    pub foot: Foot,
    pub target_zone: u8,
    pub penalty_number: u8,
    pub elimination: bool,
}

impl ShotRequest {
    /// Boundary validation. Input forms constrain all of these already,
    /// but the engine defends them again before anything goes on the wire.
    pub fn validate(&self) -> Result<()> {
        if !TEAMS.contains(&self.team.as_str()) {
            return Err(RoundError::InvalidRequest(format!(
                "unknown team code: {:?}",
                self.team
            )));
        }
        if !(1..=9).contains(&self.target_zone) {
            return Err(RoundError::InvalidZone(self.target_zone));
        }
        if !(1..=12).contains(&self.penalty_number) {
            return Err(RoundError::InvalidRequest(format!(
                "penalty number must be 1-12, got {}",
                self.penalty_number
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_partition_board() {
        let mut seen = Vec::new();
        for dir in Direction::ALL {
            seen.extend_from_slice(&dir.column());
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_for_zone_matches_column() {
        for zone in 1..=9u8 {
            let dir = Direction::for_zone(zone).unwrap();
            assert!(dir.covers(zone));
            for other in Direction::ALL {
                if other != dir {
                    assert!(!other.covers(zone));
                }
            }
        }
    }

    #[test]
    fn test_for_zone_rejects_out_of_range() {
        assert!(matches!(
            Direction::for_zone(0),
            Err(RoundError::InvalidZone(0))
        ));
        assert!(matches!(
            Direction::for_zone(10),
            Err(RoundError::InvalidZone(10))
        ));
    }

    #[test]
    fn test_direction_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
        assert!("Up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_foot_wire_form() {
        assert_eq!(serde_json::to_string(&Foot::Left).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Foot::Right).unwrap(), "\"R\"");
    }

    #[test]
    fn test_request_validation() {
        let mut request = ShotRequest {
            team: "FRA".to_string(),
            foot: Foot::Right,
            target_zone: 5,
            penalty_number: 1,
            elimination: false,
        };
        assert!(request.validate().is_ok());

        request.team = "XXX".to_string();
        assert!(matches!(
            request.validate(),
            Err(RoundError::InvalidRequest(_))
        ));

        request.team = "FRA".to_string();
        request.target_zone = 0;
        assert!(matches!(request.validate(), Err(RoundError::InvalidZone(0))));

        request.target_zone = 5;
        request.penalty_number = 13;
        assert!(matches!(
            request.validate(),
            Err(RoundError::InvalidRequest(_))
        ));
    }
}
