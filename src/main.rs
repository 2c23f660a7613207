//! Headless scrub demo.
//!
//! Drives a simulated player and a scripted slider gesture through the scrub
//! controller, logging where the slider ends up after every tick.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrubsync::core::time::format_time;
use scrubsync::playback::SimulatedPlayer;
use scrubsync::ui::SliderModel;
use scrubsync::{
    EventPump, Player, PlayerEvent, ScrubConfig, ScrubSyncController, Slider, SliderEvent,
};

#[derive(Parser)]
#[command(name = "scrubsync", about = "Simulated slider scrubbing against a playing video")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of player ticks to simulate
    #[arg(long, default_value_t = 24)]
    ticks: u32,
    /// Sleep between ticks instead of running as fast as possible
    #[arg(long)]
    realtime: bool,
}

/// Slider gesture replayed relative to the moment metadata loads
fn scripted_gesture(tick_after_load: u32) -> &'static [SliderEvent] {
    match tick_after_load {
        4 => &[SliderEvent::TouchDown],
        5 => &[SliderEvent::ValueChanged(0.5)],
        // Some input stacks repeat the touch-down
        6 => &[SliderEvent::TouchDown, SliderEvent::ValueChanged(0.75)],
        8 => &[SliderEvent::TouchUpOutside],
        _ => &[],
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrubsync=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ScrubConfig::load(path)?,
        None => ScrubConfig::default(),
    };
    let simulation = config.simulation.clone();
    let tick_interval = Duration::from_millis(simulation.tick_interval_ms);

    let mut controller = ScrubSyncController::new(SimulatedPlayer::new(), SliderModel::new(), config);
    let pump = EventPump::new();

    for tick in 0..cli.ticks {
        if tick == simulation.load_after_ticks {
            controller.player_mut().load(simulation.duration_secs);
            info!(duration = %format_time(simulation.duration_secs), "Media loaded");
            pump.push(PlayerEvent::ReadyToPlay);
        }
        if let Some(after_load) = tick.checked_sub(simulation.load_after_ticks) {
            for event in scripted_gesture(after_load) {
                pump.push(*event);
            }
        }

        if let Some(t) = controller.player_mut().advance(tick_interval.as_secs_f64()) {
            pump.push(PlayerEvent::TimeChanged(t));
        }

        // Failures are reported and the remaining events stay queued
        while let Err(e) = pump.dispatch_pending(&mut controller) {
            tracing::warn!("Player error: {}", e);
        }

        info!(
            tick,
            state = ?controller.state(),
            position = %format_time(controller.player().current_position_secs()),
            slider = %controller.slider().value(),
        );

        if cli.realtime {
            std::thread::sleep(tick_interval);
        }
    }

    Ok(())
}
