//! Screen rotation with different remap conventions
//!
//! Holds a device in landscape with its left edge up and shows how roll
//! changes once the orientation sensor reports the rotation, for each
//! built-in convention.
//!
//! Run with: `RUST_LOG=sky_attitude=debug cargo run --example rotating_screen`

use nalgebra::Vector3;
use sky_attitude::{RawOrientation, RemapConvention, SensorFusion, SensorsSettings};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Left edge up: gravity reads along device -x
    let acceleration = Vector3::new(-9.81, 0.0, 0.0);

    for remap in [
        RemapConvention::Identity,
        RemapConvention::DisplayRotation,
        RemapConvention::SensorRotation,
    ] {
        let settings = SensorsSettings {
            remap,
            ..Default::default()
        };
        let mut fusion = SensorFusion::with_settings(settings);

        println!("{:?}", remap);
        let attitude = fusion.estimate(acceleration, None, 60.0);
        println!("  before event:  roll {:>7.2}°", attitude.roll_degrees());

        for raw in [RawOrientation::LeftUp, RawOrientation::FaceUp, RawOrientation::TopUp] {
            let orientation = fusion.on_orientation_event(raw);
            let attitude = fusion.estimate(acceleration, None, 60.0);
            println!(
                "  {:<10} -> {:>3}°  roll {:>7.2}°",
                format!("{:?}", raw),
                orientation.degrees(),
                attitude.roll_degrees()
            );
        }
    }
}
