//! Host UI side: the position slider.

pub mod slider;

pub use slider::{Slider, SliderEvent, SliderModel};
