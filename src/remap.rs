//! Device-to-screen axis remapping
//!
//! Sensors report readings in the device's natural frame. When the screen is
//! rotated the x/y axes seen by the user no longer match, so every reading is
//! remapped according to the current [`ScreenOrientation`] before attitude is
//! derived from it.
//!
//! Platforms disagree on which way a quarter turn goes, so the mapping is a
//! strategy ([`AxisRemap`]) selected per platform rather than a fixed formula.
//!
//! # Example
//! ```
//! use nalgebra::Vector3;
//! use sky_attitude::{AxisRemap, RemapConvention, ScreenOrientation};
//!
//! let reading = Vector3::new(1.0, 2.0, 3.0);
//! let screen = RemapConvention::DisplayRotation.apply(reading, ScreenOrientation::Rot90);
//!
//! assert_eq!(screen, Vector3::new(-2.0, 1.0, 3.0));
//! ```

use nalgebra::Vector3;

use crate::types::ScreenOrientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed axis alignment from device axes to screen axes.
///
/// Each variant name lists where screen X, Y and Z come from in device
/// coordinates. `P` keeps the sign, `N` negates it. For example `NyPxPz`
/// means screen X = -device Y, screen Y = +device X, screen Z = +device Z.
///
/// Only alignments that keep the z axis on z are offered: screen rotation
/// never moves the axis normal to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxesAlignment {
    /// +X+Y+Z (identity)
    #[default]
    PxPyPz,
    /// -Y+X+Z (quarter turn, counter-clockwise)
    NyPxPz,
    /// -X-Y+Z (half turn)
    NxNyPz,
    /// +Y-X+Z (quarter turn, clockwise)
    PyNxPz,
    /// +X+Y-Z
    PxPyNz,
    /// -Y+X-Z
    NyPxNz,
    /// -X-Y-Z
    NxNyNz,
    /// +Y-X-Z
    PyNxNz,
}

impl AxesAlignment {
    /// Applies the alignment to a device-frame reading.
    #[inline]
    pub fn apply(self, device: Vector3<f32>) -> Vector3<f32> {
        let (x, y, z) = (device.x, device.y, device.z);
        match self {
            AxesAlignment::PxPyPz => device,
            AxesAlignment::NyPxPz => Vector3::new(-y, x, z),
            AxesAlignment::NxNyPz => Vector3::new(-x, -y, z),
            AxesAlignment::PyNxPz => Vector3::new(y, -x, z),
            AxesAlignment::PxPyNz => Vector3::new(x, y, -z),
            AxesAlignment::NyPxNz => Vector3::new(-y, x, -z),
            AxesAlignment::NxNyNz => Vector3::new(-x, -y, -z),
            AxesAlignment::PyNxNz => Vector3::new(y, -x, -z),
        }
    }
}

/// Strategy mapping device-frame readings to screen-frame readings.
///
/// Implement this for platforms whose conventions the built-in
/// [`RemapConvention`]s do not cover.
pub trait AxisRemap {
    /// Remaps a device-frame reading for the given screen orientation.
    fn apply(&self, device: Vector3<f32>, orientation: ScreenOrientation) -> Vector3<f32>;
}

/// Explicit per-orientation alignment table, indexed by
/// [`ScreenOrientation::index`].
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use sky_attitude::{AxesAlignment, AxisRemap, RemapTable, ScreenOrientation};
///
/// // A platform that also flips z when upside down
/// let table = RemapTable::new([
///     AxesAlignment::PxPyPz,
///     AxesAlignment::NyPxPz,
///     AxesAlignment::NxNyNz,
///     AxesAlignment::PyNxPz,
/// ]);
/// let screen = table.apply(Vector3::new(1.0, 2.0, 3.0), ScreenOrientation::Rot180);
/// assert_eq!(screen, Vector3::new(-1.0, -2.0, -3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RemapTable {
    entries: [AxesAlignment; 4],
}

impl RemapTable {
    /// Creates a table from entries for Rot0, Rot90, Rot180 and Rot270.
    pub const fn new(entries: [AxesAlignment; 4]) -> Self {
        Self { entries }
    }

    /// Alignment used for `orientation`
    pub fn alignment(&self, orientation: ScreenOrientation) -> AxesAlignment {
        self.entries[orientation.index()]
    }
}

impl AxisRemap for RemapTable {
    #[inline]
    fn apply(&self, device: Vector3<f32>, orientation: ScreenOrientation) -> Vector3<f32> {
        self.alignment(orientation).apply(device)
    }
}

const IDENTITY_TABLE: RemapTable = RemapTable::new([AxesAlignment::PxPyPz; 4]);

const DISPLAY_ROTATION_TABLE: RemapTable = RemapTable::new([
    AxesAlignment::PxPyPz,
    AxesAlignment::NyPxPz,
    AxesAlignment::NxNyPz,
    AxesAlignment::PyNxPz,
]);

const SENSOR_ROTATION_TABLE: RemapTable = RemapTable::new([
    AxesAlignment::PxPyPz,
    AxesAlignment::PyNxPz,
    AxesAlignment::NxNyPz,
    AxesAlignment::NyPxPz,
]);

/// Built-in remapping conventions, chosen per platform capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemapConvention {
    /// No orientation signal; readings pass through unchanged
    #[default]
    Identity,
    /// Orientation comes from the display rotation reported by the window
    /// system (Android style): a quarter turn maps (x, y) to (-y, x)
    DisplayRotation,
    /// Orientation comes from the orientation sensor reading (Ubuntu Touch
    /// style): a quarter turn maps (x, y) to (y, -x)
    SensorRotation,
}

impl RemapConvention {
    /// Lookup table backing this convention
    pub fn table(self) -> RemapTable {
        match self {
            RemapConvention::Identity => IDENTITY_TABLE,
            RemapConvention::DisplayRotation => DISPLAY_ROTATION_TABLE,
            RemapConvention::SensorRotation => SENSOR_ROTATION_TABLE,
        }
    }
}

impl AxisRemap for RemapConvention {
    #[inline]
    fn apply(&self, device: Vector3<f32>, orientation: ScreenOrientation) -> Vector3<f32> {
        self.table().apply(device, orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ScreenOrientation::*;

    const CONVENTIONS: [RemapConvention; 3] = [
        RemapConvention::Identity,
        RemapConvention::DisplayRotation,
        RemapConvention::SensorRotation,
    ];

    #[test]
    fn test_identity_convention() {
        let sample = Vector3::new(1.0, 2.0, 3.0);
        for orientation in ScreenOrientation::ALL {
            assert_eq!(RemapConvention::Identity.apply(sample, orientation), sample);
        }
    }

    #[test]
    fn test_rot0_is_identity_for_all_conventions() {
        let sample = Vector3::new(-4.0, 0.5, 9.0);
        for convention in CONVENTIONS {
            assert_eq!(convention.apply(sample, Rot0), sample);
        }
    }

    #[test]
    fn test_display_rotation_table() {
        let sample = Vector3::new(1.0, 2.0, 3.0);
        let remap = RemapConvention::DisplayRotation;
        assert_eq!(remap.apply(sample, Rot90), Vector3::new(-2.0, 1.0, 3.0));
        assert_eq!(remap.apply(sample, Rot180), Vector3::new(-1.0, -2.0, 3.0));
        assert_eq!(remap.apply(sample, Rot270), Vector3::new(2.0, -1.0, 3.0));
    }

    #[test]
    fn test_sensor_rotation_table() {
        let sample = Vector3::new(1.0, 2.0, 3.0);
        let remap = RemapConvention::SensorRotation;
        assert_eq!(remap.apply(sample, Rot90), Vector3::new(2.0, -1.0, 3.0));
        assert_eq!(remap.apply(sample, Rot180), Vector3::new(-1.0, -2.0, 3.0));
        assert_eq!(remap.apply(sample, Rot270), Vector3::new(-2.0, 1.0, 3.0));
    }

    #[test]
    fn test_full_turn_round_trip() {
        let samples = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-5.0, 0.0, 7.0),
            Vector3::new(0.1, -0.2, 0.3),
        ];
        let pairs = [(Rot90, Rot270), (Rot270, Rot90), (Rot180, Rot180), (Rot0, Rot0)];

        for convention in CONVENTIONS {
            for (first, second) in pairs {
                assert_eq!(first.compose(second), Rot0);
                for &v in &samples {
                    let recovered = convention.apply(convention.apply(v, first), second);
                    assert!(
                        (recovered - v).norm() < 1e-6,
                        "{:?} {:?}+{:?}: {:?} -> {:?}",
                        convention,
                        first,
                        second,
                        v,
                        recovered
                    );
                }
            }
        }
    }

    #[test]
    fn test_conventions_preserve_magnitude() {
        let sample = Vector3::new(1.0, 2.0, 3.0);
        for convention in CONVENTIONS {
            for orientation in ScreenOrientation::ALL {
                let remapped = convention.apply(sample, orientation);
                assert!((remapped.norm() - sample.norm()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_custom_table_can_flip_z() {
        let table = RemapTable::new([
            AxesAlignment::PxPyNz,
            AxesAlignment::NyPxNz,
            AxesAlignment::NxNyNz,
            AxesAlignment::PyNxNz,
        ]);
        let sample = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(table.apply(sample, Rot0), Vector3::new(1.0, 2.0, -3.0));
        assert_eq!(table.apply(sample, Rot90), Vector3::new(-2.0, 1.0, -3.0));
        assert_eq!(table.alignment(Rot270), AxesAlignment::PyNxNz);
    }

    #[test]
    fn test_user_strategy() {
        struct Swap;
        impl AxisRemap for Swap {
            fn apply(&self, device: Vector3<f32>, _: ScreenOrientation) -> Vector3<f32> {
                Vector3::new(device.y, device.x, device.z)
            }
        }
        assert_eq!(Swap.apply(Vector3::new(1.0, 2.0, 3.0), Rot0), Vector3::new(2.0, 1.0, 3.0));
    }
}
