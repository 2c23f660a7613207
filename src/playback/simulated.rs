//! Headless player whose clock advances only when told to.
//! Stands in for a real decoding pipeline in the demo binary and in tests.

use crate::core::time::{usable_duration, Seconds};
use crate::error::PlayerError;
use crate::playback::player::Player;

#[derive(Debug, Clone, Default)]
pub struct SimulatedPlayer {
    position: Seconds,
    duration: Option<Seconds>,
    playing: bool,
    looping: bool,
    scrubbing: bool,
    /// Whether playback was running when the current scrub began
    resume_after_scrub: bool,
}

impl SimulatedPlayer {
    /// Create a player with no media metadata yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata arrived: the duration becomes known
    pub fn load(&mut self, duration: Seconds) {
        self.duration = Some(duration);
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// Advance the playback clock by `elapsed` seconds.
    ///
    /// Returns the new position as a time tick, or None when the clock is not
    /// running (paused, scrubbing or nothing loaded).
    pub fn advance(&mut self, elapsed: Seconds) -> Option<Seconds> {
        if !self.playing || self.scrubbing {
            return None;
        }
        let duration = usable_duration(self.duration)?;

        let mut position = self.position + elapsed.max(0.0);
        if position >= duration {
            if self.looping {
                position %= duration;
            } else {
                position = duration;
                self.playing = false;
            }
        }
        self.position = position;
        Some(position)
    }
}

impl Player for SimulatedPlayer {
    fn play(&mut self) -> Result<(), PlayerError> {
        if self.duration.is_none() {
            return Err(PlayerError::NotReady);
        }
        if self.scrubbing {
            // Applied when the scrub ends
            self.resume_after_scrub = true;
        } else {
            self.playing = true;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.playing = false;
        self.resume_after_scrub = false;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing || (self.scrubbing && self.resume_after_scrub)
    }

    fn current_position_secs(&self) -> Seconds {
        self.position
    }

    fn duration_secs(&self) -> Option<Seconds> {
        self.duration
    }

    fn begin_scrub(&mut self) -> Result<(), PlayerError> {
        self.resume_after_scrub = self.playing;
        self.playing = false;
        self.scrubbing = true;
        Ok(())
    }

    fn scrub_to(&mut self, seconds: Seconds) -> Result<(), PlayerError> {
        let duration = usable_duration(self.duration).ok_or(PlayerError::NotReady)?;
        if !seconds.is_finite() {
            return Err(PlayerError::SeekRejected { target_secs: seconds });
        }
        self.position = seconds.clamp(0.0, duration);
        Ok(())
    }

    fn end_scrub(&mut self) -> Result<(), PlayerError> {
        self.scrubbing = false;
        self.playing = self.resume_after_scrub;
        self.resume_after_scrub = false;
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}
