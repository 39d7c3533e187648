//! Round state machine.
//!
//! One `RoundMachine` instance drives one shot at a time:
//! Idle → AwaitingPrediction → Resolved/Failed → (reset) → Idle.
//!
//! Transitions are one-directional within a round. The machine is owned
//! exclusively by the driving layer (single-threaded, event-driven); the
//! only suspension point is the gateway call between `select_zone` and
//! `complete`/`fail`.
//!
//! Stale-response guard: every accepted zone selection mints a
//! `RoundTicket` carrying the current round id. `reset` bumps the id, so
//! a prediction that arrives after the player has already started a new
//! round carries a dead ticket and is discarded instead of mutating the
//! fresh round.

use crate::error::{Result, RoundError};
use crate::models::{Direction, ShotOutcome};
use crate::prediction::Prediction;
use crate::resolver::resolve;

/// Where the current round stands.
#[derive(Debug, Clone)]
pub enum RoundState {
    /// Waiting for the player to pick a target zone.
    Idle,
    /// Prediction request outstanding; further zone picks are ignored.
    AwaitingPrediction { target_zone: u8 },
    /// Shot resolved; requires an explicit reset to play again.
    Resolved {
        keeper_direction: Direction,
        outcome: ShotOutcome,
    },
    /// Round failed; requires an explicit reset to play again.
    Failed { error: RoundError },
}

/// Proof that a prediction request belongs to a specific round.
#[derive(Debug, Clone, Copy)]
pub struct RoundTicket {
    round_id: u64,
    pub target_zone: u8,
}

/// What happened to a gateway completion handed back to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The round advanced to `Resolved` or `Failed`.
    Applied,
    /// Late or duplicate result for a round that has moved on; dropped.
    Discarded,
}

/// State machine for a single shot attempt.
#[derive(Debug)]
pub struct RoundMachine {
    state: RoundState,
    round_id: u64,
}

impl Default for RoundMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundMachine {
    pub fn new() -> Self {
        Self { state: RoundState::Idle, round_id: 0 }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Player picked a target zone.
    ///
    /// Only accepted from `Idle`; from any other state the pick is
    /// ignored and `Ok(None)` is returned, so rapid repeated clicks
    /// cannot issue duplicate prediction requests. An out-of-range zone
    /// is rejected without leaving `Idle`.
    pub fn select_zone(&mut self, target_zone: u8) -> Result<Option<RoundTicket>> {
        if !matches!(self.state, RoundState::Idle) {
            tracing::debug!(target_zone, "zone selection ignored: round already in progress");
            return Ok(None);
        }
        if !(1..=9).contains(&target_zone) {
            return Err(RoundError::InvalidZone(target_zone));
        }
        self.state = RoundState::AwaitingPrediction { target_zone };
        Ok(Some(RoundTicket { round_id: self.round_id, target_zone }))
    }

    /// Gateway returned a prediction for the ticketed request.
    ///
    /// Discarded unless the machine is still awaiting this exact round.
    /// On acceptance the resolver runs with the supplied uniform draw;
    /// an invalid prediction moves the round to `Failed` rather than
    /// propagating out.
    pub fn complete(
        &mut self,
        ticket: &RoundTicket,
        prediction: &Prediction,
        random_unit: f64,
    ) -> Completion {
        let Some(target_zone) = self.accept(ticket) else {
            return Completion::Discarded;
        };
        self.state = match resolve(prediction, target_zone, random_unit) {
            Ok((keeper_direction, outcome)) => {
                RoundState::Resolved { keeper_direction, outcome }
            }
            Err(error) => {
                tracing::warn!(%error, "prediction rejected, round failed");
                RoundState::Failed { error }
            }
        };
        Completion::Applied
    }

    /// Gateway call failed for the ticketed request.
    pub fn fail(&mut self, ticket: &RoundTicket, error: RoundError) -> Completion {
        if self.accept(ticket).is_none() {
            return Completion::Discarded;
        }
        tracing::warn!(%error, "gateway call failed, round failed");
        self.state = RoundState::Failed { error };
        Completion::Applied
    }

    /// Explicit player reset. Clears all round-scoped state and retires
    /// any outstanding ticket. Valid from every state; from
    /// `AwaitingPrediction` it acts as an abort and the in-flight result
    /// will be discarded on arrival.
    pub fn reset(&mut self) {
        self.round_id += 1;
        self.state = RoundState::Idle;
    }

    /// Staleness and state gate shared by `complete` and `fail`.
    fn accept(&self, ticket: &RoundTicket) -> Option<u8> {
        if ticket.round_id != self.round_id {
            tracing::debug!(
                ticket_round = ticket.round_id,
                current_round = self.round_id,
                "stale prediction result discarded"
            );
            return None;
        }
        match self.state {
            RoundState::AwaitingPrediction { target_zone } => Some(target_zone),
            _ => {
                tracing::debug!("prediction result discarded: round not awaiting");
                None
            }
        }
    }
}
