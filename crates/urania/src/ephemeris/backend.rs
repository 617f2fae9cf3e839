use crate::ephemeris::types::{Body, EphemerisMode, PlanetPosition};
use crate::houses::{HouseCalculator, HouseSet, HouseSystem};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("Ephemeris probe failed: {message}")]
    ProbeFailed { message: String },
}

/// A source of planetary positions and house cusps.
///
/// The service picks one implementation at initialization and keeps it for
/// its lifetime.
pub trait EphemerisBackend: Send + Sync {
    /// Which model this backend represents.
    fn mode(&self) -> EphemerisMode;

    /// Position of a single body at a Julian Day (UT).
    fn compute_body(&self, body: Body, julian_day: f64) -> Result<PlanetPosition, EphemerisError>;

    /// Positions of every tracked body in canonical order.
    ///
    /// A body that fails is logged and left out; the rest are still returned.
    fn compute_planets(&self, julian_day: f64) -> Vec<PlanetPosition> {
        let mut planets = Vec::with_capacity(12);
        for body in Body::all() {
            match self.compute_body(body, julian_day) {
                Ok(position) => planets.push(position),
                Err(e) => log::warn!("Skipping {} ({} ephemeris): {}", body, self.mode(), e),
            }
        }
        planets
    }

    /// House cusps and angles. Both models share the analytic house calculator.
    fn compute_houses(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> HouseSet {
        HouseCalculator::new().compute_houses(julian_day, latitude, longitude, system)
    }
}
