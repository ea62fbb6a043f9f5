//! Sky Attitude - point a sky view where the device points
//!
//! This library turns raw accelerometer and magnetometer readings from a
//! handheld device into roll, pitch and a declination-corrected compass
//! heading, and uses them to steer the look direction and up vector of a
//! planetarium-style view.
//!
//! There is no gyroscope in the loop. Stability comes from a low-pass filter
//! whose responsiveness follows the field of view: zoomed-in views are
//! smoothed heavily, wide views react quickly.
//!
//! # Features
//!
//! - Field-of-view adaptive low-pass filtering with first-sample snap
//! - Screen orientation tracking and per-platform axis remapping
//! - Tilt-compensated compass heading with magnetic declination correction
//! - View composition through renderer-agnostic traits
//! - Enable/disable lifecycle that restores an upright view
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use sky_attitude::{
//!     FixedDeclination, Location, ObserverSite, SensorFusion, SensorSource, ViewTarget,
//! };
//!
//! struct Phone;
//!
//! impl SensorSource for Phone {
//!     fn set_active(&mut self, _active: bool) {}
//!     fn acceleration(&self) -> Option<Vector3<f32>> {
//!         Some(Vector3::new(0.0, 6.93, -6.93)) // held up at 45°
//!     }
//!     fn magnetic_field(&self) -> Option<Vector3<f32>> {
//!         Some(Vector3::new(0.0, -30.0, 20.0))
//!     }
//! }
//!
//! struct Sky {
//!     direction: Vector3<f32>,
//!     up: Vector3<f32>,
//! }
//!
//! impl ViewTarget for Sky {
//!     fn field_of_view(&self) -> f32 { 60.0 }
//!     fn view_direction(&self) -> Vector3<f32> { self.direction }
//!     fn set_view_direction(&mut self, direction: Vector3<f32>) { self.direction = direction; }
//!     fn up_vector(&self) -> Vector3<f32> { self.up }
//!     fn set_up_vector(&mut self, up: Vector3<f32>) { self.up = up; }
//!     fn set_reference_angle(&mut self, _degrees: f32) {}
//!     fn local_to_external(&self, v: Vector3<f32>) -> Vector3<f32> { v }
//!     fn external_to_local(&self, v: Vector3<f32>) -> Vector3<f32> { v }
//! }
//!
//! struct Observatory;
//!
//! impl ObserverSite for Observatory {
//!     fn location(&self) -> Location { Location::default() }
//!     fn year(&self) -> i32 { 2024 }
//! }
//!
//! let mut phone = Phone;
//! let mut sky = Sky { direction: Vector3::x(), up: Vector3::z() };
//! let mut fusion = SensorFusion::new();
//!
//! fusion.set_enabled(true, &mut phone, &mut sky, &Observatory, &FixedDeclination(0.0));
//!
//! // Call once per rendered frame
//! let attitude = fusion.update(&phone, &mut sky).expect("acceleration available");
//! assert!((attitude.pitch_degrees() - 45.0).abs() < 0.1);
//! ```

pub mod declination;
pub mod filter;
mod fusion;
pub mod math;
mod orientation;
pub mod remap;
pub mod tilt;
mod types;
pub mod view;

// Re-export all public types and functions
pub use declination::{DeclinationError, FixedDeclination, GeomagneticModel, ObserverSite, lookup_declination};
pub use filter::{FilterState, LowPass, averaging_coefficient, blend};
pub use fusion::{SensorFusion, SensorSource};
pub use math::{DEG_TO_RAD, RAD_TO_DEG};
pub use orientation::OrientationTracker;
pub use remap::{AxesAlignment, AxisRemap, RemapConvention, RemapTable};
pub use tilt::Attitude;
pub use types::*;
pub use view::{ViewTarget, ViewUpdate, compose_view, reset_view};
