//! Screen orientation tracking from coarse orientation-sensor events

use tracing::debug;

use crate::types::{RawOrientation, ScreenOrientation};

/// Holds the current screen rotation, updated from orientation events.
///
/// Flat and undefined readings are ignored so that laying the device on a
/// table does not flip the axes.
///
/// # Example
/// ```
/// use sky_attitude::{OrientationTracker, RawOrientation, ScreenOrientation};
///
/// let mut tracker = OrientationTracker::new();
/// assert_eq!(tracker.on_orientation_event(RawOrientation::LeftUp), ScreenOrientation::Rot90);
/// assert_eq!(tracker.on_orientation_event(RawOrientation::FaceUp), ScreenOrientation::Rot90);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationTracker {
    current: ScreenOrientation,
}

impl OrientationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current screen orientation
    pub fn current(&self) -> ScreenOrientation {
        self.current
    }

    /// Consumes an orientation event and returns the resulting orientation.
    pub fn on_orientation_event(&mut self, raw: RawOrientation) -> ScreenOrientation {
        if let Some(next) = raw.screen_orientation() {
            if next != self.current {
                debug!(from = self.current.degrees(), to = next.degrees(), "Screen orientation changed");
                self.current = next;
            }
        }
        debug!(?raw, orientation = self.current.degrees(), "Orientation event");
        self.current
    }

    /// Returns to the natural orientation.
    pub fn reset(&mut self) {
        self.current = ScreenOrientation::Rot0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_natural_orientation() {
        assert_eq!(OrientationTracker::new().current(), ScreenOrientation::Rot0);
    }

    #[test]
    fn test_known_events_map_to_orientation() {
        let mut tracker = OrientationTracker::new();
        let events = [
            (RawOrientation::LeftUp, ScreenOrientation::Rot90),
            (RawOrientation::TopDown, ScreenOrientation::Rot180),
            (RawOrientation::RightUp, ScreenOrientation::Rot270),
            (RawOrientation::TopUp, ScreenOrientation::Rot0),
        ];
        for (raw, expected) in events {
            assert_eq!(tracker.on_orientation_event(raw), expected);
            assert_eq!(tracker.current(), expected);
        }
    }

    #[test]
    fn test_flat_and_undefined_are_ignored() {
        let mut tracker = OrientationTracker::new();
        tracker.on_orientation_event(RawOrientation::RightUp);

        for raw in [RawOrientation::FaceUp, RawOrientation::FaceDown, RawOrientation::Undefined] {
            assert_eq!(tracker.on_orientation_event(raw), ScreenOrientation::Rot270);
        }
    }

    #[test]
    fn test_repeated_event_is_noop() {
        let mut tracker = OrientationTracker::new();
        tracker.on_orientation_event(RawOrientation::TopDown);
        let before = tracker;
        tracker.on_orientation_event(RawOrientation::TopDown);
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_reset() {
        let mut tracker = OrientationTracker::new();
        tracker.on_orientation_event(RawOrientation::LeftUp);
        tracker.reset();
        assert_eq!(tracker.current(), ScreenOrientation::Rot0);
    }
}
