//! # pk_gateway - Prediction service client
//!
//! Wire-format types and a blocking HTTP client for the remote
//! keeper-dive model. Implements [`pk_core::PredictionGateway`] so the
//! engine stays transport-agnostic.

pub mod client;
pub mod wire;

pub use client::{GatewayError, HttpPredictionGateway};
pub use wire::{PredictRequest, PredictResponse};
