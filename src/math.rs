//! Angle constants and the small amount of geometry the fusion pipeline needs

use nalgebra::{Rotation3, Unit, Vector3};

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Linear interpolation between `a` and `b`.
///
/// `t = 0` yields `a`, `t = 1` yields `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Rotates the planar pair `(a, b)` counter-clockwise by `angle` radians.
#[inline]
pub fn rot2d(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (sn, cs) = angle.sin_cos();
    (a * cs - b * sn, a * sn + b * cs)
}

/// Converts a rectangular vector into `(longitude, latitude)` in radians.
///
/// Longitude is measured in the x/y plane from +x towards +y, latitude from the
/// x/y plane towards +z. The zero vector maps to `(0, 0)`.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use sky_attitude::math::rect_to_sphe;
///
/// let (lng, lat) = rect_to_sphe(Vector3::new(0.0, 0.0, 2.0));
/// assert_eq!(lng, 0.0);
/// assert!((lat - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn rect_to_sphe(v: Vector3<f32>) -> (f32, f32) {
    let r = v.norm();
    if r == 0.0 {
        return (0.0, 0.0);
    }
    let lng = v.y.atan2(v.x);
    let lat = (v.z / r).clamp(-1.0, 1.0).asin();
    (lng, lat)
}

/// Converts `(longitude, latitude)` in radians into a unit rectangular vector.
pub fn sphe_to_rect(lng: f32, lat: f32) -> Vector3<f32> {
    let (sin_lng, cos_lng) = lng.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    Vector3::new(cos_lat * cos_lng, cos_lat * sin_lng, sin_lat)
}

/// Right-handed rotation of `v` by `angle` radians about `axis`.
///
/// A degenerate axis leaves `v` untouched.
pub fn rotate_about(v: Vector3<f32>, axis: Vector3<f32>, angle: f32) -> Vector3<f32> {
    match Unit::try_new(axis, f32::EPSILON) {
        Some(axis) => Rotation3::from_axis_angle(&axis, angle) * v,
        None => v,
    }
}
