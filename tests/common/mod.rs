#![allow(dead_code)]

use nalgebra::{UnitQuaternion, Vector3};
use sky_attitude::{DeclinationError, Location, ObserverSite, SensorSource, ViewTarget};

/// Sensors returning whatever the test last stored
#[derive(Debug, Default)]
pub struct MockSensors {
    pub active: bool,
    pub activations: Vec<bool>,
    pub acceleration: Option<Vector3<f32>>,
    pub magnetic: Option<Vector3<f32>>,
}

impl MockSensors {
    pub fn with_readings(acceleration: Option<Vector3<f32>>, magnetic: Option<Vector3<f32>>) -> Self {
        Self {
            acceleration,
            magnetic,
            ..Default::default()
        }
    }
}

impl SensorSource for MockSensors {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.activations.push(active);
    }

    fn acceleration(&self) -> Option<Vector3<f32>> {
        self.acceleration
    }

    fn magnetic_field(&self) -> Option<Vector3<f32>> {
        self.magnetic
    }
}

/// View whose external frame is the local frame rotated by `frame`
#[derive(Debug)]
pub struct MockView {
    pub fov: f32,
    pub direction: Vector3<f32>,
    pub up: Vector3<f32>,
    pub reference_angle: f32,
    pub frame: UnitQuaternion<f32>,
    pub direction_writes: usize,
}

impl MockView {
    /// View with identical local and external frames
    pub fn local(fov: f32, direction: Vector3<f32>) -> Self {
        Self::rotated(fov, direction, UnitQuaternion::identity())
    }

    /// View whose external frame differs from the local one; `direction` is
    /// given in the local frame.
    pub fn rotated(fov: f32, direction: Vector3<f32>, frame: UnitQuaternion<f32>) -> Self {
        Self {
            fov,
            direction: frame * direction,
            up: frame * Vector3::z(),
            reference_angle: 0.0,
            frame,
            direction_writes: 0,
        }
    }

    pub fn local_direction(&self) -> Vector3<f32> {
        self.external_to_local(self.direction)
    }

    pub fn local_up(&self) -> Vector3<f32> {
        self.external_to_local(self.up)
    }
}

impl ViewTarget for MockView {
    fn field_of_view(&self) -> f32 {
        self.fov
    }

    fn view_direction(&self) -> Vector3<f32> {
        self.direction
    }

    fn set_view_direction(&mut self, direction: Vector3<f32>) {
        self.direction = direction;
        self.direction_writes += 1;
    }

    fn up_vector(&self) -> Vector3<f32> {
        self.up
    }

    fn set_up_vector(&mut self, up: Vector3<f32>) {
        self.up = up;
    }

    fn set_reference_angle(&mut self, degrees: f32) {
        self.reference_angle = degrees;
    }

    fn local_to_external(&self, local: Vector3<f32>) -> Vector3<f32> {
        self.frame * local
    }

    fn external_to_local(&self, external: Vector3<f32>) -> Vector3<f32> {
        self.frame.inverse() * external
    }
}

pub struct Site {
    pub location: Location,
    pub year: i32,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            location: Location {
                latitude: 40.0,
                longitude: -3.7,
                altitude: 650.0,
            },
            year: 2017,
        }
    }
}

impl ObserverSite for Site {
    fn location(&self) -> Location {
        self.location
    }

    fn year(&self) -> i32 {
        self.year
    }
}

pub fn failing_model(_: &Location, _: i32) -> Result<f32, DeclinationError> {
    Err(DeclinationError::ModelUnavailable("coefficient file missing".into()))
}
