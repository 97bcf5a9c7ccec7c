//! Event handlers.

pub mod transition;

pub use transition::{FanOutSummary, TransitionEventHandler, TransitionOutcome};
