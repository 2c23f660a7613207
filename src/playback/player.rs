//! Player capability consumed by the scrub controller.
//! Decoding, rendering and output routing live behind this trait.

use crate::core::time::Seconds;
use crate::error::PlayerError;

/// Notifications delivered by a player at its own cadence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Media metadata loaded, playback can start
    ReadyToPlay,
    /// Current playback position changed (seconds)
    TimeChanged(Seconds),
}

/// Operations a media player must expose to be driven by a slider.
pub trait Player {
    fn play(&mut self) -> Result<(), PlayerError>;

    fn pause(&mut self) -> Result<(), PlayerError>;

    fn is_playing(&self) -> bool;

    fn current_position_secs(&self) -> Seconds;

    /// Total media duration; None until metadata has loaded
    fn duration_secs(&self) -> Option<Seconds>;

    /// Stop clock-driven output while the user drags. The last known
    /// duration stays available.
    fn begin_scrub(&mut self) -> Result<(), PlayerError>;

    /// Show the frame at `seconds` without resuming playback
    fn scrub_to(&mut self, seconds: Seconds) -> Result<(), PlayerError>;

    /// Resume clock reporting from the last scrub target
    fn end_scrub(&mut self) -> Result<(), PlayerError>;

    fn set_looping(&mut self, looping: bool);
}
