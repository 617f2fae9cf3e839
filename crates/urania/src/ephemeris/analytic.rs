//! Mean-motion planetary model used when no real ephemeris is available.
//!
//! Each body advances linearly from its J2000.0 reference longitude. Outer
//! bodies get a retrograde loop wherever `sin(longitude) < -0.5`, so output
//! depends only on the Julian Day.

use crate::angles::normalize_degrees;
use crate::ephemeris::backend::{EphemerisBackend, EphemerisError};
use crate::ephemeris::types::{Body, EphemerisMode, PlanetPosition};
use crate::time::J2000_JD;

/// Peak ecliptic latitude given to bodies off the ecliptic, degrees.
const MAX_LATITUDE: f64 = 5.0;

/// `sin(longitude)` below this marks an outer body as retrograde.
const RETROGRADE_THRESHOLD: f64 = -0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Mean position of a body. Requires a finite Julian Day.
    pub fn position(&self, body: Body, julian_day: f64) -> PlanetPosition {
        let info = body.info();
        let days_since_epoch = julian_day - J2000_JD;
        let longitude =
            normalize_degrees(info.reference_longitude + days_since_epoch * info.mean_motion);
        let sin_lon = longitude.to_radians().sin();

        let retrograde_loop = info.outer && sin_lon < RETROGRADE_THRESHOLD;
        let daily_speed = if retrograde_loop {
            -info.mean_motion.abs()
        } else {
            info.mean_motion
        };

        let latitude = match body {
            Body::Sun | Body::NorthNode => 0.0,
            _ => MAX_LATITUDE * sin_lon,
        };

        PlanetPosition::new(body, longitude, latitude, info.mean_distance, daily_speed)
    }
}

impl EphemerisBackend for AnalyticEphemeris {
    fn mode(&self) -> EphemerisMode {
        EphemerisMode::Analytic
    }

    fn compute_body(&self, body: Body, julian_day: f64) -> Result<PlanetPosition, EphemerisError> {
        if !julian_day.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: "Julian Day is not finite".to_string(),
            });
        }
        Ok(self.position(body, julian_day))
    }
}
