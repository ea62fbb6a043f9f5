//! Magnetic declination lookup
//!
//! The geomagnetic model itself lives outside this crate. It is queried once
//! each time fusion is enabled; a failed lookup degrades to zero declination
//! so the compass keeps working relative to magnetic north.

use thiserror::Error;
use tracing::{info, warn};

use crate::math::DEG_TO_RAD;
use crate::types::Location;

/// Failure reported by a [`GeomagneticModel`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeclinationError {
    #[error("Geomagnetic model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("Year {year} is outside the validity range of the geomagnetic model")]
    OutOfRange { year: i32 },
    #[error("Geomagnetic model returned a non-finite declination")]
    NonFinite,
}

/// Source of magnetic declination for a place and time
pub trait GeomagneticModel {
    /// Declination in degrees, east positive.
    fn declination(&self, location: &Location, year: i32) -> Result<f32, DeclinationError>;
}

impl<F> GeomagneticModel for F
where
    F: Fn(&Location, i32) -> Result<f32, DeclinationError>,
{
    fn declination(&self, location: &Location, year: i32) -> Result<f32, DeclinationError> {
        self(location, year)
    }
}

/// Constant declination in degrees, for platforms without a model or for
/// users who know their local value.
///
/// # Example
/// ```
/// use sky_attitude::{FixedDeclination, GeomagneticModel, Location};
///
/// let model = FixedDeclination(-3.5);
/// assert_eq!(model.declination(&Location::default(), 2024), Ok(-3.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedDeclination(pub f32);

impl GeomagneticModel for FixedDeclination {
    fn declination(&self, _location: &Location, _year: i32) -> Result<f32, DeclinationError> {
        Ok(self.0)
    }
}

/// Where and when the observer is
pub trait ObserverSite {
    /// Current observer location
    fn location(&self) -> Location;
    /// Current calendar year of the simulation date
    fn year(&self) -> i32;
}

/// Queries `model` for the observer's declination, returning radians.
///
/// Errors and non-finite results are logged and replaced by zero.
pub fn lookup_declination<M, S>(model: &M, site: &S) -> f32
where
    M: GeomagneticModel + ?Sized,
    S: ObserverSite + ?Sized,
{
    let location = site.location();
    let year = site.year();

    let result = model.declination(&location, year).and_then(|degrees| {
        if degrees.is_finite() {
            Ok(degrees)
        } else {
            Err(DeclinationError::NonFinite)
        }
    });

    match result {
        Ok(degrees) => {
            info!(
                declination = degrees,
                latitude = location.latitude,
                longitude = location.longitude,
                year,
                "Magnetic declination"
            );
            degrees * DEG_TO_RAD
        }
        Err(e) => {
            warn!(error = %e, "Declination lookup failed, compass will use magnetic north");
            0.0
        }
    }
}
