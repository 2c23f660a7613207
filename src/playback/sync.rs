//! Slider/player scrub synchronization.
//!
//! Two sources want to own the displayed position: the player's clock, which
//! ticks on its own schedule, and the user's finger on the slider. The
//! controller holds a single `ScrubState` that decides which one wins:
//! while `Idle` time ticks move the slider and slider values are ignored,
//! while `Scrubbing` slider values seek the player and time ticks are ignored.

use crate::config::ScrubConfig;
use crate::core::time::{self, NormalizedPosition, Seconds};
use crate::error::PlayerError;
use crate::playback::engine::ScrubEvent;
use crate::playback::player::{Player, PlayerEvent};
use crate::playback::state::ScrubState;
use crate::ui::slider::{Slider, SliderEvent};

/// Binds one player to one slider for the lifetime of a screen.
///
/// Every entry point runs to completion on the caller's thread. Events that
/// make no sense in the current state are ignored, and player failures are
/// returned to the caller untouched.
#[derive(Debug)]
pub struct ScrubSyncController<P, S> {
    player: P,
    slider: S,
    state: ScrubState,
    config: ScrubConfig,
}

impl<P: Player, S: Slider> ScrubSyncController<P, S> {
    /// Create a controller, applying the looping preference to the player
    pub fn new(mut player: P, slider: S, config: ScrubConfig) -> Self {
        player.set_looping(config.looping);
        Self {
            player,
            slider,
            state: ScrubState::Idle,
            config,
        }
    }

    pub fn state(&self) -> ScrubState {
        self.state
    }

    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Mutable access for the host's own player plumbing (loading media,
    /// driving a clock). Scrub commands should go through the controller.
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn slider(&self) -> &S {
        &self.slider
    }

    pub fn into_parts(self) -> (P, S) {
        (self.player, self.slider)
    }

    /// Route one host event to the matching entry point
    pub fn handle_event(&mut self, event: ScrubEvent) -> Result<(), PlayerError> {
        match event {
            ScrubEvent::Player(PlayerEvent::ReadyToPlay) => self.on_player_ready(),
            ScrubEvent::Player(PlayerEvent::TimeChanged(t)) => {
                self.on_player_time_changed(t);
                Ok(())
            }
            ScrubEvent::Slider(SliderEvent::TouchDown) => self.on_scrub_start(),
            ScrubEvent::Slider(SliderEvent::ValueChanged(v)) => self.on_scrub_value_changed(v),
            ScrubEvent::Slider(SliderEvent::TouchUpInside)
            | ScrubEvent::Slider(SliderEvent::TouchUpOutside) => self.on_scrub_end(),
            ScrubEvent::Slider(SliderEvent::TouchCancel) => self.on_scrub_cancel(),
        }
    }

    /// Media metadata has loaded
    pub fn on_player_ready(&mut self) -> Result<(), PlayerError> {
        if !self.config.autoplay_on_ready {
            tracing::debug!("Player ready, autoplay disabled");
            return Ok(());
        }
        tracing::debug!("Player ready, starting playback");
        self.player.play().inspect_err(|e| {
            tracing::warn!("Autoplay failed: {}", e);
        })
    }

    /// Player clock tick. Safe to call every rendered frame.
    pub fn on_player_time_changed(&mut self, t: Seconds) {
        if self.state.is_scrubbing() {
            tracing::trace!(t, "Time tick ignored while scrubbing");
            return;
        }
        match time::to_normalized(t, self.player.duration_secs()) {
            Some(value) => {
                tracing::trace!(t, %value, "Slider follows player");
                self.slider.set_value(value);
            }
            None => tracing::trace!(t, "Time tick suppressed, duration unknown"),
        }
    }

    /// User touched the slider
    pub fn on_scrub_start(&mut self) -> Result<(), PlayerError> {
        if self.state.is_scrubbing() {
            tracing::trace!("Repeated touch-down ignored");
            return Ok(());
        }
        // Only enter Scrubbing once the player has accepted it
        self.player.begin_scrub().inspect_err(|e| {
            tracing::warn!("Player refused to begin scrub: {}", e);
        })?;
        self.state = ScrubState::Scrubbing;
        tracing::debug!("Scrub started");
        Ok(())
    }

    /// User dragged the slider to `v`
    pub fn on_scrub_value_changed(&mut self, v: f64) -> Result<(), PlayerError> {
        if self.state.is_idle() {
            tracing::trace!(v, "Slider value ignored while idle");
            return Ok(());
        }
        let value = NormalizedPosition::clamped(v);
        self.slider.set_value(value);

        let Some(target) = time::to_seconds(value, self.player.duration_secs()) else {
            tracing::debug!(%value, "No seek, duration unknown");
            return Ok(());
        };
        tracing::debug!(%value, seek_to = %time::format_time(target), "Scrub to");
        self.player.scrub_to(target).inspect_err(|e| {
            tracing::warn!("Scrub to {}s failed: {}", target, e);
        })
    }

    /// User released the slider, inside or outside its bounds
    pub fn on_scrub_end(&mut self) -> Result<(), PlayerError> {
        if self.state.is_idle() {
            tracing::trace!("Release ignored while idle");
            return Ok(());
        }
        // Idle before end_scrub: a failed resume is reported, never re-sent
        self.state = ScrubState::Idle;
        tracing::debug!("Scrub ended");
        self.player.end_scrub().inspect_err(|e| {
            tracing::warn!("Player failed to end scrub: {}", e);
        })
    }

    /// Host cancelled the gesture; ends the scrub like a release
    pub fn on_scrub_cancel(&mut self) -> Result<(), PlayerError> {
        if self.state.is_scrubbing() {
            tracing::debug!("Scrub gesture cancelled");
        }
        self.on_scrub_end()
    }

    /// Play/pause button. Returns the button's selected flag (true = paused).
    /// Does nothing while scrubbing; the scrub end decides whether playback resumes.
    pub fn toggle_play_pause(&mut self) -> Result<bool, PlayerError> {
        if self.state.is_scrubbing() {
            return Ok(!self.player.is_playing());
        }
        if self.player.is_playing() {
            self.player.pause()?;
            tracing::debug!("Paused");
            Ok(true)
        } else {
            self.player.play()?;
            tracing::debug!("Playing");
            Ok(false)
        }
    }
}
