//! Roll, pitch and tilt-compensated azimuth from gravity and magnetic field
//!
//! All inputs are screen-frame vectors: x to the right of the screen, y to
//! its top edge, z out of the display. Angles are in radians.
//!
//! Roll and pitch come from `atan2` alone. Near the poles (device pointing
//! straight up or down) roll becomes ill-conditioned and is not stabilised
//! further.

use nalgebra::Vector3;

use crate::math::{RAD_TO_DEG, rot2d};

/// Device attitude derived from one update tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    /// Rotation about the look axis, radians
    pub roll: f32,
    /// Elevation of the look axis above the horizon, radians
    pub pitch: f32,
    /// Compass heading corrected for declination, radians, when a magnetic
    /// reading was available
    pub azimuth: Option<f32>,
}

impl Attitude {
    /// Roll in degrees, the angle that keeps on-screen text upright
    pub fn roll_degrees(&self) -> f32 {
        self.roll * RAD_TO_DEG
    }

    /// Pitch in degrees
    pub fn pitch_degrees(&self) -> f32 {
        self.pitch * RAD_TO_DEG
    }

    /// Azimuth in degrees
    pub fn azimuth_degrees(&self) -> Option<f32> {
        self.azimuth.map(|azimuth| azimuth * RAD_TO_DEG)
    }
}

/// Calculates `(roll, pitch)` from an acceleration vector.
///
/// `roll = atan2(-x, y)`, `pitch = atan2(-z, sqrt(x² + y²))`. The vector
/// magnitude does not matter.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use sky_attitude::tilt::roll_pitch;
///
/// // Held upright in portrait, screen facing the user
/// let (roll, pitch) = roll_pitch(Vector3::new(0.0, 9.81, 0.0));
/// assert_eq!(roll, 0.0);
/// assert_eq!(pitch, 0.0);
/// ```
pub fn roll_pitch(acceleration: Vector3<f32>) -> (f32, f32) {
    let (x, y, z) = (acceleration.x, acceleration.y, acceleration.z);
    let roll = (-x).atan2(y);
    let pitch = (-z).atan2((x * x + y * y).sqrt());
    (roll, pitch)
}

/// Projects a magnetic reading onto the horizontal plane.
///
/// Roll is removed first by rotating the x/y pair by `-roll`; pitch is then
/// removed by rotating the resulting y/z pair by `pitch`. The two planar
/// rotations are not interchangeable with a single 3D rotation built from the
/// same angles.
pub fn project_magnetic(magnetic: Vector3<f32>, roll: f32, pitch: f32) -> Vector3<f32> {
    let (x, y, z) = (magnetic.x, magnetic.y, magnetic.z);
    let (x, y) = rot2d(x, y, -roll);
    let (y, z) = rot2d(y, z, pitch);
    Vector3::new(x, y, z)
}

/// Tilt-compensated azimuth in radians, corrected by `declination` radians.
///
/// # Arguments
/// * `magnetic` - Smoothed screen-frame magnetic reading
/// * `roll`, `pitch` - Attitude from [`roll_pitch`]
/// * `declination` - Angle from magnetic north to true north, radians
pub fn azimuth(magnetic: Vector3<f32>, roll: f32, pitch: f32, declination: f32) -> f32 {
    let projected = project_magnetic(magnetic, roll, pitch);
    (-projected.x).atan2(projected.z) - declination
}

/// Full attitude estimate for one tick.
///
/// The azimuth is only computed when a magnetic reading is supplied.
pub fn estimate(acceleration: Vector3<f32>, magnetic: Option<Vector3<f32>>, declination: f32) -> Attitude {
    let (roll, pitch) = roll_pitch(acceleration);
    Attitude {
        roll,
        pitch,
        azimuth: magnetic.map(|magnetic| azimuth(magnetic, roll, pitch, declination)),
    }
}
