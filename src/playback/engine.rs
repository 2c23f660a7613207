//! Serialized event delivery into the scrub controller.
//! Uses crossbeam channels so player and input sources can enqueue from any
//! thread while the controller only ever runs on the thread that drains.

use crossbeam::channel;

use crate::error::PlayerError;
use crate::playback::player::{Player, PlayerEvent};
use crate::playback::sync::ScrubSyncController;
use crate::ui::slider::{Slider, SliderEvent};

/// Event delivered to the scrub controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubEvent {
    Player(PlayerEvent),
    Slider(SliderEvent),
}

impl From<PlayerEvent> for ScrubEvent {
    fn from(event: PlayerEvent) -> Self {
        ScrubEvent::Player(event)
    }
}

impl From<SliderEvent> for ScrubEvent {
    fn from(event: SliderEvent) -> Self {
        ScrubEvent::Slider(event)
    }
}

/// Ordered event queue feeding one controller
#[derive(Debug, Clone)]
pub struct EventPump {
    event_tx: channel::Sender<ScrubEvent>,
    event_rx: channel::Receiver<ScrubEvent>,
}

impl EventPump {
    pub fn new() -> Self {
        let (event_tx, event_rx) = channel::unbounded();
        Self { event_tx, event_rx }
    }

    /// Handle for event sources (player subscription, slider control)
    pub fn sender(&self) -> channel::Sender<ScrubEvent> {
        self.event_tx.clone()
    }

    /// Enqueue an event
    pub fn push(&self, event: impl Into<ScrubEvent>) {
        // Cannot fail: the pump owns a receiver for as long as it lives
        let _ = self.event_tx.send(event.into());
    }

    /// Number of events waiting to be dispatched
    pub fn pending(&self) -> usize {
        self.event_rx.len()
    }

    /// Deliver every queued event, in order, to the controller.
    ///
    /// Returns how many events were handled. Stops at the first player error
    /// and returns it; events queued after the failing one stay queued for the
    /// next call.
    pub fn dispatch_pending<P: Player, S: Slider>(
        &self,
        controller: &mut ScrubSyncController<P, S>,
    ) -> Result<usize, PlayerError> {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            handled += 1;
            controller.handle_event(event).inspect_err(|e| {
                tracing::warn!(?event, "Event dispatch failed: {}", e);
            })?;
        }
        Ok(handled)
    }
}

impl Default for EventPump {
    fn default() -> Self {
        Self::new()
    }
}
