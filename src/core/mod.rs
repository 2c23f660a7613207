//! Core types shared by the playback and slider sides.
//!
//! Media time is expressed in seconds (f64), the slider in a normalized
//! [0, 1] position.

pub mod time;

pub use time::{NormalizedPosition, Seconds};
