//! Type definitions for the application state.
//!
//! - [`LoadPhase`] - Whether the loading screen is still up
//! - [`LoadTrigger`] - What ended the loading phase
//! - [`LoadGate`] - Single-resolution latch between the two

/// Coarse application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

/// Event that can end the loading phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// The posts fetch finished, successfully or not
    FetchSettled,
    /// The loading ceiling elapsed first
    TimedOut,
}

/// Latch that moves `Loading -> Ready` exactly once.
///
/// Whichever trigger arrives first resolves the gate; later triggers are
/// reported as no-ops and never re-run the transition.
#[derive(Debug, Clone, Default)]
pub struct LoadGate {
    phase: LoadPhase,
    resolved_by: Option<LoadTrigger>,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger. Returns `true` only for the one that flips the phase.
    pub fn resolve(&mut self, trigger: LoadTrigger) -> bool {
        if self.phase == LoadPhase::Ready {
            return false;
        }
        self.phase = LoadPhase::Ready;
        self.resolved_by = Some(trigger);
        true
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// The trigger that ended loading, if it has ended.
    pub fn resolved_by(&self) -> Option<LoadTrigger> {
        self.resolved_by
    }
}
