//! Applying an attitude to the renderer's view
//!
//! The renderer owns the view direction and up vector and expresses them in
//! its own reference frame (typically equatorial). Attitude is applied in the
//! local horizontal frame: x towards azimuth 0, z to the zenith. The
//! [`ViewTarget`] converts between the two.

use nalgebra::Vector3;
use tracing::trace;

use crate::math::{rect_to_sphe, rotate_about, sphe_to_rect};
use crate::tilt::Attitude;

/// Renderer-side view that the fusion core steers
pub trait ViewTarget {
    /// Current field of view in degrees
    fn field_of_view(&self) -> f32;

    /// Current look direction, external frame
    fn view_direction(&self) -> Vector3<f32>;

    /// Sets the look direction, external frame
    fn set_view_direction(&mut self, direction: Vector3<f32>);

    /// Current up vector, external frame
    fn up_vector(&self) -> Vector3<f32>;

    /// Sets the up vector, external frame
    fn set_up_vector(&mut self, up: Vector3<f32>);

    /// Sets the angle in degrees used to keep on-screen text upright
    fn set_reference_angle(&mut self, degrees: f32);

    /// Converts a local horizontal vector to the external frame.
    fn local_to_external(&self, local: Vector3<f32>) -> Vector3<f32>;

    /// Converts an external-frame vector to the local horizontal frame.
    fn external_to_local(&self, external: Vector3<f32>) -> Vector3<f32>;
}

/// Local zenith
pub const LOCAL_UP: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);

/// Vectors written to the view by [`compose_view`], local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewUpdate {
    /// New look direction
    pub direction: Vector3<f32>,
    /// New up vector
    pub up: Vector3<f32>,
}

/// Applies `attitude` to `view`.
///
/// 1. The reference angle becomes the roll in degrees.
/// 2. The up vector is the zenith rolled about the horizontal projection of
///    the current look direction.
/// 3. The look direction keeps its longitude, takes the pitch as latitude,
///    and takes the azimuth as longitude when one is available.
pub fn compose_view<V>(view: &mut V, attitude: &Attitude) -> ViewUpdate
where
    V: ViewTarget + ?Sized,
{
    view.set_reference_angle(attitude.roll_degrees());

    let current = view.external_to_local(view.view_direction());
    let (longitude, _) = rect_to_sphe(current);

    let horizontal = sphe_to_rect(longitude, 0.0);
    let up = rotate_about(LOCAL_UP, horizontal, attitude.roll);
    view.set_up_vector(view.local_to_external(up));

    let heading = attitude.azimuth.unwrap_or(longitude);
    let direction = sphe_to_rect(heading, attitude.pitch);
    view.set_view_direction(view.local_to_external(direction));

    trace!(
        roll = attitude.roll,
        pitch = attitude.pitch,
        azimuth = ?attitude.azimuth,
        "View updated"
    );

    ViewUpdate { direction, up }
}

/// Restores the canonical zenith-up view and clears the reference angle.
pub fn reset_view<V>(view: &mut V)
where
    V: ViewTarget + ?Sized,
{
    view.set_up_vector(view.local_to_external(LOCAL_UP));
    view.set_reference_angle(0.0);
}
