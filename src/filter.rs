//! Field-of-view adaptive low-pass filtering of raw sensor readings
//!
//! A zoomed-in view magnifies every twitch of the sensors, so the smoothing
//! gets heavier as the field of view narrows. At or beyond
//! [`REFERENCE_FOV`] the filter runs at its most responsive.

use nalgebra::Vector3;

use crate::math::lerp;

/// Blending coefficient used for the narrowest views
pub const MIN_COEFFICIENT: f32 = 0.01;
/// Blending coefficient used at and above [`REFERENCE_FOV`]
pub const MAX_COEFFICIENT: f32 = 0.1;
/// Field of view in degrees at which the coefficient saturates
pub const REFERENCE_FOV: f32 = 130.0;

/// Blends `current` into `previous`: `previous * (1 - c) + current * c`.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use sky_attitude::filter::blend;
///
/// let smoothed = blend(Vector3::new(0.0, 0.0, 0.0), Vector3::new(10.0, 0.0, 0.0), 0.1);
/// assert!((smoothed.x - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn blend(previous: Vector3<f32>, current: Vector3<f32>, coefficient: f32) -> Vector3<f32> {
    previous.zip_map(&current, |p, c| lerp(p, c, coefficient))
}

/// Blending coefficient for a view with the given field of view in degrees.
///
/// Linear from [`MIN_COEFFICIENT`] at 0° to [`MAX_COEFFICIENT`] at
/// [`REFERENCE_FOV`], constant above.
pub fn averaging_coefficient(fov_degrees: f32) -> f32 {
    lerp(MIN_COEFFICIENT, MAX_COEFFICIENT, (fov_degrees / REFERENCE_FOV).min(1.0))
}

/// Single smoothed 3-axis channel
///
/// The first sample after construction or [`reset`](LowPass::reset) is
/// taken as is; later samples are blended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPass {
    value: Vector3<f32>,
    first_measure: bool,
}

impl LowPass {
    pub fn new() -> Self {
        Self {
            value: Vector3::zeros(),
            first_measure: true,
        }
    }

    /// Feeds a sample and returns the smoothed value.
    pub fn update(&mut self, sample: Vector3<f32>, coefficient: f32) -> Vector3<f32> {
        let coefficient = if self.first_measure { 1.0 } else { coefficient };
        self.first_measure = false;
        self.value = blend(self.value, sample, coefficient);
        self.value
    }

    /// Smoothed value, zero until the first sample
    pub fn value(&self) -> Vector3<f32> {
        self.value
    }

    /// Whether the next sample will be taken without blending
    pub fn is_first_measure(&self) -> bool {
        self.first_measure
    }

    /// Arms the first-sample bypass. The stored value is kept until the
    /// next sample replaces it.
    pub fn reset(&mut self) {
        self.first_measure = true;
    }
}

impl Default for LowPass {
    fn default() -> Self {
        Self::new()
    }
}

/// Smoothed acceleration and magnetic field
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    /// Acceleration in the accelerometer's units, device frame
    pub acceleration: LowPass,
    /// Magnetic field in the magnetometer's units, device frame
    pub magnetic: LowPass,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arms the first-sample bypass on both channels.
    pub fn reset(&mut self) {
        self.acceleration.reset();
        self.magnetic.reset();
    }

    /// Whether both channels are waiting for their first sample
    pub fn is_first_measure(&self) -> bool {
        self.acceleration.is_first_measure() && self.magnetic.is_first_measure()
    }
}
