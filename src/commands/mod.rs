//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate fixture logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod generate;

pub use generate::handle;
