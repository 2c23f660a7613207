//! Position slider capability and the touch events it delivers.

use crate::core::time::NormalizedPosition;

/// Discrete events from the host's slider control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    TouchDown,
    /// Raw slider value; may be outside [0, 1] on some input stacks
    ValueChanged(f64),
    TouchUpInside,
    TouchUpOutside,
    /// Host cancelled the gesture without a touch-up
    TouchCancel,
}

impl SliderEvent {
    /// Any way a touch can finish
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            SliderEvent::TouchUpInside | SliderEvent::TouchUpOutside | SliderEvent::TouchCancel
        )
    }
}

/// Slider the controller writes the displayed position to
pub trait Slider {
    fn value(&self) -> NormalizedPosition;

    fn set_value(&mut self, value: NormalizedPosition);
}

/// In-memory slider, for headless hosts and tests.
/// Counts writes so callers can tell a suppressed update from an idempotent one.
#[derive(Debug, Clone, Default)]
pub struct SliderModel {
    value: NormalizedPosition,
    writes: usize,
}

impl SliderModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_value` calls received
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Slider for SliderModel {
    fn value(&self) -> NormalizedPosition {
        self.value
    }

    fn set_value(&mut self, value: NormalizedPosition) {
        self.value = value;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_model_starts_at_zero() {
        let slider = SliderModel::new();
        assert_eq!(slider.value(), NormalizedPosition::START);
        assert_eq!(slider.writes(), 0);
    }

    #[test]
    fn test_slider_model_records_writes() {
        let mut slider = SliderModel::new();
        slider.set_value(NormalizedPosition::clamped(0.3));
        slider.set_value(NormalizedPosition::clamped(0.6));
        assert_eq!(slider.value().get(), 0.6);
        assert_eq!(slider.writes(), 2);
    }

    #[test]
    fn test_is_release() {
        assert!(SliderEvent::TouchUpInside.is_release());
        assert!(SliderEvent::TouchUpOutside.is_release());
        assert!(SliderEvent::TouchCancel.is_release());
        assert!(!SliderEvent::TouchDown.is_release());
        assert!(!SliderEvent::ValueChanged(0.5).is_release());
    }
}
