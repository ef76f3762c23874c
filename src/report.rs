//! Reporting sink for round events.

use crate::result::RoundEvent;

/// Receives round events for display or persistence.
///
/// The resolver itself never talks to a sink; [`Game::run`] forwards the
/// events collected in each [`RoundReport`] here. Game correctness does not
/// depend on what a sink does with them.
///
/// [`Game::run`]: crate::Game::run
/// [`RoundReport`]: crate::RoundReport
pub trait RoundSink {
    /// Called once per event, in the order events occurred.
    fn on_event(&mut self, event: &RoundEvent);
}

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RoundSink for NullSink {
    fn on_event(&mut self, _event: &RoundEvent) {}
}
