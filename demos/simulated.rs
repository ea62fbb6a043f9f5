//! Simulated hand sweep across the sky
//!
//! Feeds synthetic accelerometer and magnetometer readings of a device that
//! tilts up from the horizon while turning east, and prints the attitude and
//! view direction after each second of frames.
//!
//! Run with: `RUST_LOG=debug cargo run --example simulated`

use nalgebra::Vector3;
use sky_attitude::math::rect_to_sphe;
use sky_attitude::{
    DeclinationError, Location, ObserverSite, RAD_TO_DEG, SensorFusion, SensorSource, ViewTarget,
};
use tracing_subscriber::EnvFilter;

const FRAME_RATE: usize = 60;
const GRAVITY: f32 = 9.80665;

/// Field strength and inclination roughly matching central Europe
const FIELD: f32 = 48.0;
const INCLINATION: f32 = 64.0;

struct SimulatedSensors {
    acceleration: Option<Vector3<f32>>,
    magnetic: Option<Vector3<f32>>,
}

impl SimulatedSensors {
    /// Readings for a device looking at `azimuth` (from magnetic north) and
    /// `altitude` above the horizon, held upright in portrait.
    fn look(&mut self, azimuth: f32, altitude: f32) {
        let (sin_alt, cos_alt) = altitude.sin_cos();
        self.acceleration = Some(Vector3::new(0.0, GRAVITY * cos_alt, -GRAVITY * sin_alt));

        // Horizontal and vertical field in the screen frame of an upright
        // device facing `azimuth`; the back of the device looks along -z.
        let horizontal = FIELD * INCLINATION.to_radians().cos();
        let down = FIELD * INCLINATION.to_radians().sin();
        let (sin_az, cos_az) = azimuth.sin_cos();
        let east_west = horizontal * sin_az;
        let forward = horizontal * cos_az;
        let y = -down * cos_alt - forward * sin_alt;
        let z = forward * cos_alt - down * sin_alt;
        self.magnetic = Some(Vector3::new(east_west, y, z));
    }
}

impl SensorSource for SimulatedSensors {
    fn set_active(&mut self, active: bool) {
        tracing::info!(active, "Sensors toggled");
    }

    fn acceleration(&self) -> Option<Vector3<f32>> {
        self.acceleration
    }

    fn magnetic_field(&self) -> Option<Vector3<f32>> {
        self.magnetic
    }
}

struct SkyView {
    fov: f32,
    direction: Vector3<f32>,
    up: Vector3<f32>,
    reference_angle: f32,
}

impl ViewTarget for SkyView {
    fn field_of_view(&self) -> f32 {
        self.fov
    }

    fn view_direction(&self) -> Vector3<f32> {
        self.direction
    }

    fn set_view_direction(&mut self, direction: Vector3<f32>) {
        self.direction = direction;
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
        local
    }

    fn external_to_local(&self, external: Vector3<f32>) -> Vector3<f32> {
        external
    }
}

struct Paris;

impl ObserverSite for Paris {
    fn location(&self) -> Location {
        Location {
            latitude: 48.85,
            longitude: 2.35,
            altitude: 35.0,
        }
    }

    fn year(&self) -> i32 {
        2024
    }
}

/// Stand-in for a real geomagnetic model
fn declination(location: &Location, year: i32) -> Result<f32, DeclinationError> {
    if !(2020..2030).contains(&year) {
        return Err(DeclinationError::OutOfRange { year });
    }
    Ok(0.03 * location.longitude + 1.2)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sensors = SimulatedSensors {
        acceleration: None,
        magnetic: None,
    };
    let mut view = SkyView {
        fov: 60.0,
        direction: Vector3::x(),
        up: Vector3::z(),
        reference_angle: 0.0,
    };
    let mut fusion = SensorFusion::new();

    fusion.set_enabled(true, &mut sensors, &mut view, &Paris, &declination);

    for second in 0..10 {
        let target_azimuth = (second as f32 * 9.0).to_radians();
        let target_altitude = (second as f32 * 5.0).to_radians();

        for _ in 0..FRAME_RATE {
            sensors.look(target_azimuth, target_altitude);
            fusion.update(&sensors, &mut view);
        }

        let (lng, lat) = rect_to_sphe(view.direction);
        println!(
            "t={:>2}s  target az {:>5.1}° alt {:>5.1}°  view az {:>6.1}° alt {:>5.1}°  text angle {:>5.1}°",
            second + 1,
            target_azimuth * RAD_TO_DEG,
            target_altitude * RAD_TO_DEG,
            lng * RAD_TO_DEG,
            lat * RAD_TO_DEG,
            view.reference_angle
        );
    }

    fusion.set_enabled(false, &mut sensors, &mut view, &Paris, &declination);
    println!("Disabled, up vector reset to {:?}", view.up);
}
