pub mod engine;
pub mod player;
pub mod simulated;
pub mod state;
pub mod sync;

pub use engine::{EventPump, ScrubEvent};
pub use player::{Player, PlayerEvent};
pub use simulated::SimulatedPlayer;
pub use state::ScrubState;
pub use sync::ScrubSyncController;
