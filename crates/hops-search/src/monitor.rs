//! Hooks for observing a search while it runs.

use crate::state::HopperState;

/// Receives every frontier event of a [`HopSearch`](crate::HopSearch) run.
///
/// All methods default to doing nothing, so a monitor only overrides the
/// events it cares about.
pub trait SearchMonitor {
    /// Called when a state is discovered and pushed onto the frontier,
    /// including the start state.
    fn on_enqueue(&mut self, _state: &HopperState) {}

    /// Called when a state is taken off the frontier, before it is compared
    /// against the finish.
    fn on_dequeue(&mut self, _state: &HopperState) {}
}

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {}

impl<M: SearchMonitor + ?Sized> SearchMonitor for &mut M {
    #[inline]
    fn on_enqueue(&mut self, state: &HopperState) {
        (**self).on_enqueue(state);
    }

    #[inline]
    fn on_dequeue(&mut self, state: &HopperState) {
        (**self).on_dequeue(state);
    }
}

/// Records the order of frontier events.
#[derive(Debug, Clone, Default)]
pub struct RecordingMonitor {
    pub enqueued: Vec<HopperState>,
    pub dequeued: Vec<HopperState>,
}

impl SearchMonitor for RecordingMonitor {
    fn on_enqueue(&mut self, state: &HopperState) {
        self.enqueued.push(*state);
    }

    fn on_dequeue(&mut self, state: &HopperState) {
        self.dequeued.push(*state);
    }
}
