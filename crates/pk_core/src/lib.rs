//! # pk_core - Deterministic Penalty Shot Resolution Engine
//!
//! Core engine for the Twelve Yard Cup penalty game: converts a remote
//! keeper-dive model's top-2 probability output plus the player's chosen
//! target zone into a concrete keeper direction and a goal/blocked
//! outcome, and drives one round of play through an explicit state
//! machine.
//!
//! ## Features
//! - Pure shot resolver with injectable randomness (same draw = same result)
//! - One-directional round state machine with a stale-response guard
//! - Gateway trait seam; the HTTP client lives in `pk_gateway`
//! - Seed-deterministic JSON API for front-end embedding

pub mod api;
pub mod error;
pub mod gateway;
pub mod models;
pub mod prediction;
pub mod resolver;
pub mod round;

// Re-export the main engine surface
pub use api::{resolve_shot_json, ShotResolveRequest, ShotResolveResponse};
pub use error::{Result, RoundError};
pub use gateway::PredictionGateway;
pub use models::{Direction, Foot, ShotOutcome, ShotRequest, TEAMS};
pub use prediction::Prediction;
pub use resolver::{resolve, resolve_with_rng};
pub use round::{Completion, RoundMachine, RoundState, RoundTicket};
