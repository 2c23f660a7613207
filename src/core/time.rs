//! Media time in seconds and the normalized slider position.
//! Durations may be unknown until metadata loads; every conversion that
//! needs one goes through `usable_duration` so it never divides by zero.

use std::fmt;

/// Position or duration in media, in seconds.
pub type Seconds = f64;

/// Tolerance used when comparing positions in tests and logs
pub const EPSILON: f64 = 1e-9;

/// Slider value: fraction of total duration in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NormalizedPosition(f64);

impl NormalizedPosition {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Build a position, clamping into [0, 1].
    /// NaN maps to the start so a bad input can never poison the slider.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<NormalizedPosition> for f64 {
    fn from(position: NormalizedPosition) -> Self {
        position.0
    }
}

impl fmt::Display for NormalizedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Returns the duration only if it can be divided by: known, finite and > 0
#[inline]
pub fn usable_duration(duration: Option<Seconds>) -> Option<Seconds> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Convert a media position into a slider value.
/// Returns None when the duration is unusable or the position is not finite.
pub fn to_normalized(position: Seconds, duration: Option<Seconds>) -> Option<NormalizedPosition> {
    let duration = usable_duration(duration)?;
    if !position.is_finite() {
        return None;
    }
    Some(NormalizedPosition::clamped(position / duration))
}

/// Convert a slider value into a media position.
/// Returns None when the duration is unusable.
pub fn to_seconds(position: NormalizedPosition, duration: Option<Seconds>) -> Option<Seconds> {
    usable_duration(duration).map(|d| position.get() * d)
}

/// Format time as HH:MM:SS.mmm
pub fn format_time(seconds: Seconds) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--:--.---".to_string();
    }
    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis / 60_000) % 60;
    let secs = (total_millis / 1000) % 60;
    let millis = total_millis % 1000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(NormalizedPosition::clamped(0.4).get(), 0.4);
        assert_eq!(NormalizedPosition::clamped(-0.2), NormalizedPosition::START);
        assert_eq!(NormalizedPosition::clamped(1.7), NormalizedPosition::END);
        assert_eq!(NormalizedPosition::clamped(f64::NAN), NormalizedPosition::START);
        assert_eq!(NormalizedPosition::clamped(f64::INFINITY), NormalizedPosition::END);
    }

    #[test]
    fn test_usable_duration() {
        assert_eq!(usable_duration(Some(120.0)), Some(120.0));
        assert_eq!(usable_duration(Some(0.0)), None);
        assert_eq!(usable_duration(Some(-3.0)), None);
        assert_eq!(usable_duration(Some(f64::NAN)), None);
        assert_eq!(usable_duration(Some(f64::INFINITY)), None);
        assert_eq!(usable_duration(None), None);
    }

    #[test]
    fn test_to_normalized() {
        let value = to_normalized(30.0, Some(120.0)).unwrap();
        assert!((value.get() - 0.25).abs() < EPSILON);

        assert_eq!(to_normalized(30.0, None), None);
        assert_eq!(to_normalized(30.0, Some(0.0)), None);
        assert_eq!(to_normalized(f64::NAN, Some(120.0)), None);
    }

    #[test]
    fn test_to_normalized_clamps_out_of_range_ticks() {
        assert_eq!(to_normalized(130.0, Some(120.0)), Some(NormalizedPosition::END));
        assert_eq!(to_normalized(-1.0, Some(120.0)), Some(NormalizedPosition::START));
    }

    #[test]
    fn test_to_seconds() {
        let half = NormalizedPosition::clamped(0.5);
        assert_eq!(to_seconds(half, Some(120.0)), Some(60.0));
        assert_eq!(to_seconds(half, None), None);
        assert_eq!(to_seconds(half, Some(0.0)), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(3661.5), "01:01:01.500");
        assert_eq!(format_time(0.0), "00:00:00.000");
        assert_eq!(format_time(f64::NAN), "--:--:--.---");
    }
}
