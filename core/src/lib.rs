//! Core overlap-scoring and status-classification engine for the Rust
//! attendance verification platform.
//!
//! The modules mirror the legacy web app's check-in pipeline while providing
//! validated value types, a pluggable scoring strategy, and well-defined
//! session policy arithmetic. Everything here is pure and synchronous;
//! storage, transport, and location acquisition stay with the callers.

pub mod attendance;
pub mod geo;
pub mod prelude;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use prelude::{ScoreError, ScoreResult, ScoringConfig, ScoringStrategy};
