//! Core types and configuration for the sky-attitude pipeline

use crate::remap::RemapConvention;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Screen rotation relative to the device's natural orientation
///
/// Transitions are discrete; there is no interpolation between the four
/// values.
///
/// # Example
/// ```
/// use sky_attitude::ScreenOrientation;
///
/// assert_eq!(ScreenOrientation::Rot90.degrees(), 90);
/// assert_eq!(ScreenOrientation::from_degrees(-90), ScreenOrientation::Rot270);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScreenOrientation {
    /// Natural orientation
    #[default]
    Rot0,
    /// Rotated a quarter turn
    Rot90,
    /// Upside down
    Rot180,
    /// Rotated three quarter turns
    Rot270,
}

impl ScreenOrientation {
    /// All orientations in ascending rotation order
    pub const ALL: [ScreenOrientation; 4] = [
        ScreenOrientation::Rot0,
        ScreenOrientation::Rot90,
        ScreenOrientation::Rot180,
        ScreenOrientation::Rot270,
    ];

    /// Rotation in degrees (0, 90, 180 or 270)
    pub fn degrees(self) -> u16 {
        self.index() as u16 * 90
    }

    /// Position in [`ScreenOrientation::ALL`]
    pub fn index(self) -> usize {
        match self {
            ScreenOrientation::Rot0 => 0,
            ScreenOrientation::Rot90 => 1,
            ScreenOrientation::Rot180 => 2,
            ScreenOrientation::Rot270 => 3,
        }
    }

    /// Snaps an arbitrary angle in degrees to the nearest quarter turn.
    pub fn from_degrees(degrees: i32) -> Self {
        let quarter = ((degrees as f32 / 90.0).round() as i32).rem_euclid(4);
        Self::ALL[quarter as usize]
    }

    /// Orientation reached by applying `self` and then `other`.
    pub fn compose(self, other: ScreenOrientation) -> Self {
        Self::ALL[(self.index() + other.index()) % 4]
    }
}

/// Coarse reading delivered by a hardware orientation sensor
///
/// Names describe which edge of the device points up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RawOrientation {
    /// Top edge up (portrait)
    TopUp,
    /// Left edge up
    LeftUp,
    /// Top edge down (upside-down portrait)
    TopDown,
    /// Right edge up
    RightUp,
    /// Lying flat, screen facing up
    FaceUp,
    /// Lying flat, screen facing down
    FaceDown,
    /// No usable reading
    Undefined,
}

impl RawOrientation {
    /// Screen orientation this reading selects, or `None` for readings that
    /// carry no screen rotation (flat or undefined).
    pub fn screen_orientation(self) -> Option<ScreenOrientation> {
        match self {
            RawOrientation::TopUp => Some(ScreenOrientation::Rot0),
            RawOrientation::LeftUp => Some(ScreenOrientation::Rot90),
            RawOrientation::TopDown => Some(ScreenOrientation::Rot180),
            RawOrientation::RightUp => Some(ScreenOrientation::Rot270),
            RawOrientation::FaceUp | RawOrientation::FaceDown | RawOrientation::Undefined => None,
        }
    }
}

/// Observer location on Earth
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Geodetic latitude in degrees, north positive
    pub latitude: f32,
    /// Longitude in degrees, east positive
    pub longitude: f32,
    /// Height above the ellipsoid in metres
    pub altitude: f32,
}

/// Settings for [`SensorFusion`](crate::SensorFusion)
///
/// # Example
/// ```
/// use sky_attitude::{RemapConvention, SensorFusion, SensorsSettings};
///
/// let settings = SensorsSettings {
///     remap: RemapConvention::DisplayRotation,
///     ..Default::default()
/// };
/// let fusion = SensorFusion::with_settings(settings);
/// assert!(!fusion.is_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorsSettings {
    /// How raw device axes map to screen axes for each screen orientation
    ///
    /// Use [`RemapConvention::Identity`] on platforms without an orientation
    /// signal.
    pub remap: RemapConvention,
    /// Whether to query the geomagnetic model for declination on enable
    ///
    /// When false the azimuth is reported relative to magnetic north.
    pub declination_correction: bool,
    /// Magnitude of gravity in the accelerometer's units
    ///
    /// Only used to express the smoothed acceleration in g; roll and pitch
    /// are scale invariant.
    pub standard_gravity: f32,
}

impl Default for SensorsSettings {
    fn default() -> Self {
        Self {
            remap: RemapConvention::default(),
            declination_correction: true,
            standard_gravity: STANDARD_GRAVITY,
        }
    }
}
