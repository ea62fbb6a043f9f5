//! Sensor fusion core driving the view from accelerometer and magnetometer

use nalgebra::Vector3;
use tracing::{info, trace};

use crate::declination::{GeomagneticModel, ObserverSite, lookup_declination};
use crate::filter::{FilterState, averaging_coefficient};
use crate::orientation::OrientationTracker;
use crate::remap::{AxisRemap, RemapConvention};
use crate::tilt::{self, Attitude};
use crate::types::{RawOrientation, ScreenOrientation, SensorsSettings};
use crate::view::{ViewTarget, compose_view, reset_view};

/// Platform sensors polled once per update tick
///
/// Readings are the latest values delivered by the platform, or `None`
/// before the first reading arrives.
pub trait SensorSource {
    /// Starts or stops sensor delivery.
    fn set_active(&mut self, active: bool);

    /// Latest acceleration in m/s², device frame
    fn acceleration(&self) -> Option<Vector3<f32>>;

    /// Latest magnetic field, device frame
    fn magnetic_field(&self) -> Option<Vector3<f32>>;
}

/// Sensor fusion core
///
/// Smooths accelerometer and magnetometer readings, derives roll, pitch and
/// azimuth, and steers a [`ViewTarget`] with them. Driven by the renderer's
/// frame loop through [`update`](SensorFusion::update); does nothing until
/// enabled.
///
/// The remapping strategy defaults to the [`RemapConvention`] from the
/// settings; any [`AxisRemap`] can be supplied with
/// [`with_remap`](SensorFusion::with_remap).
#[derive(Debug, Clone)]
pub struct SensorFusion<R = RemapConvention> {
    /// Settings supplied at construction
    settings: SensorsSettings,
    /// Device-to-screen remapping strategy
    remap: R,
    /// Current screen orientation
    orientation: OrientationTracker,
    /// Smoothed readings
    filter: FilterState,
    /// Declination in radians
    declination: f32,
    /// Whether sensors drive the view
    enabled: bool,
}

impl SensorFusion {
    /// Create a new, disabled fusion core with default settings
    pub fn new() -> Self {
        Self::with_settings(SensorsSettings::default())
    }

    /// Create a new, disabled fusion core with specified settings
    pub fn with_settings(settings: SensorsSettings) -> Self {
        Self::with_remap(settings, settings.remap)
    }
}

impl Default for SensorFusion {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AxisRemap> SensorFusion<R> {
    /// Create a new, disabled fusion core with a custom remapping strategy.
    ///
    /// `settings.remap` is ignored.
    pub fn with_remap(settings: SensorsSettings, remap: R) -> Self {
        Self {
            settings,
            remap,
            orientation: OrientationTracker::new(),
            filter: FilterState::new(),
            declination: 0.0,
            enabled: false,
        }
    }

    /// Get current settings
    pub fn settings(&self) -> SensorsSettings {
        self.settings
    }

    /// Whether sensors currently drive the view
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Declination applied to the azimuth, radians
    pub fn declination(&self) -> f32 {
        self.declination
    }

    /// Overrides the declination, radians.
    ///
    /// Useful when the geomagnetic lookup runs asynchronously; the azimuth is
    /// uncorrected until this is called.
    pub fn set_declination(&mut self, radians: f32) {
        self.declination = radians;
    }

    /// Current screen orientation
    pub fn orientation(&self) -> ScreenOrientation {
        self.orientation.current()
    }

    /// Smoothed readings
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Smoothed acceleration in g, device frame
    pub fn gravity(&self) -> Vector3<f32> {
        self.filter.acceleration.value() / self.settings.standard_gravity
    }

    /// Consumes an orientation-sensor event.
    pub fn on_orientation_event(&mut self, raw: RawOrientation) -> ScreenOrientation {
        self.orientation.on_orientation_event(raw)
    }

    /// Enables or disables sensor control of the view.
    ///
    /// Enabling activates the sensors, re-arms the first-sample bypass and
    /// refreshes the declination once. Disabling stops the sensors and puts
    /// the view back upright. Returns false if the state did not change.
    pub fn set_enabled<S, V, O, M>(
        &mut self,
        enabled: bool,
        sensors: &mut S,
        view: &mut V,
        site: &O,
        model: &M,
    ) -> bool
    where
        S: SensorSource + ?Sized,
        V: ViewTarget + ?Sized,
        O: ObserverSite + ?Sized,
        M: GeomagneticModel + ?Sized,
    {
        if enabled == self.enabled {
            return false;
        }
        self.enabled = enabled;
        sensors.set_active(enabled);
        self.filter.reset();

        if enabled {
            self.refresh_declination(site, model);
        } else {
            reset_view(view);
        }

        info!(enabled, "Sensor control changed");
        true
    }

    /// Queries the geomagnetic model for the observer's declination.
    ///
    /// Leaves zero declination when correction is disabled in the settings
    /// or the lookup fails.
    pub fn refresh_declination<O, M>(&mut self, site: &O, model: &M)
    where
        O: ObserverSite + ?Sized,
        M: GeomagneticModel + ?Sized,
    {
        self.declination = if self.settings.declination_correction {
            lookup_declination(model, site)
        } else {
            0.0
        };
    }

    /// Runs one fusion tick and applies the result to `view`.
    ///
    /// Returns `None` without touching the view when disabled or when no
    /// acceleration reading is available. Without a magnetic reading the
    /// attitude has no azimuth and the view keeps its heading.
    pub fn update<S, V>(&mut self, sensors: &S, view: &mut V) -> Option<Attitude>
    where
        S: SensorSource + ?Sized,
        V: ViewTarget + ?Sized,
    {
        if !self.enabled {
            return None;
        }
        let acceleration = sensors.acceleration()?;
        let magnetic = sensors.magnetic_field();

        let attitude = self.estimate(acceleration, magnetic, view.field_of_view());
        compose_view(view, &attitude);
        Some(attitude)
    }

    /// Filters, remaps and converts one pair of readings into an attitude.
    ///
    /// This is the view-independent half of [`update`](SensorFusion::update);
    /// it runs regardless of the enabled state.
    pub fn estimate(
        &mut self,
        acceleration: Vector3<f32>,
        magnetic: Option<Vector3<f32>>,
        fov_degrees: f32,
    ) -> Attitude {
        let coefficient = averaging_coefficient(fov_degrees);
        let orientation = self.orientation.current();

        let acceleration = self.filter.acceleration.update(acceleration, coefficient);
        let acceleration = self.remap.apply(acceleration, orientation);

        let magnetic = magnetic.map(|sample| {
            let smoothed = self.filter.magnetic.update(sample, coefficient);
            self.remap.apply(smoothed, orientation)
        });

        let attitude = tilt::estimate(acceleration, magnetic, self.declination);
        trace!(
            coefficient,
            orientation = orientation.degrees(),
            roll = attitude.roll,
            pitch = attitude.pitch,
            azimuth = ?attitude.azimuth,
            "Fusion tick"
        );
        attitude
    }
}
