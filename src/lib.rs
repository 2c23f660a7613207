//! Keeps a position slider and a video player's playback clock in step.
//!
//! The player reports time ticks on its own schedule and the user drags the
//! slider; `ScrubSyncController` decides which of the two owns the displayed
//! position at any moment so neither overwrites the other.

pub mod config;
pub mod core;
pub mod error;
pub mod playback;
pub mod ui;

pub use config::ScrubConfig;
pub use error::{ConfigError, PlayerError};
pub use playback::{EventPump, Player, PlayerEvent, ScrubEvent, ScrubState, ScrubSyncController};
pub use ui::{Slider, SliderEvent};
