//! Scrub state machine.

/// Who owns the displayed position right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubState {
    /// Player time ticks drive the slider
    #[default]
    Idle,
    /// The user's drag drives the player; time ticks are ignored
    Scrubbing,
}

impl ScrubState {
    /// Check if idle
    pub fn is_idle(&self) -> bool {
        matches!(self, ScrubState::Idle)
    }

    /// Check if the user is scrubbing
    pub fn is_scrubbing(&self) -> bool {
        matches!(self, ScrubState::Scrubbing)
    }
}
