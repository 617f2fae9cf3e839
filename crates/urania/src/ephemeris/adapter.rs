use crate::angles::{normalize_degrees, signed_delta};
use crate::ephemeris::analytic::AnalyticEphemeris;
use crate::ephemeris::backend::{EphemerisBackend, EphemerisError};
use crate::ephemeris::types::{Body, EphemerisMode, PlanetPosition};
use crate::time::J2000_JD;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, set_ephe_path};

/// FLG_SWIEPH: use Swiss Ephemeris data files
const FLG_SWIEPH: i32 = 2;
/// FLG_XYZ: rectangular instead of polar coordinates
const FLG_XYZ: i32 = 8192;

/// Forward step for the finite-difference speed estimate (days).
const SPEED_STEP_DAYS: f64 = 0.01;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";
const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";

/// Explicit path first, then the environment value, then the system location.
fn resolve_ephemeris_path(explicit: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    explicit
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    body_fallback: Option<AnalyticEphemeris>,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Without an explicit path, `SWISS_EPHEMERIS_PATH` is consulted, then the
    /// conventional system location.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = resolve_ephemeris_path(ephemeris_path, env::var(EPHEMERIS_PATH_ENV).ok());

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        // The library keeps one global search path; every adapter points it at its own directory.
        set_ephe_path(&path.to_string_lossy());
        log::debug!("Swiss Ephemeris search path set to {}", path.display());

        Ok(Self {
            ephemeris_path: path,
            body_fallback: None,
        })
    }

    /// Substitute the mean-motion model for bodies the ephemeris cannot resolve,
    /// instead of omitting them.
    pub fn with_body_fallback(mut self, enabled: bool) -> Self {
        self.body_fallback = enabled.then(AnalyticEphemeris::new);
        self
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Trial computation of the Sun at J2000.0.
    pub fn probe(&self) -> Result<(), EphemerisError> {
        self.ecliptic_coordinates(Body::Sun, J2000_JD)
            .map(|_| ())
            .map_err(|e| EphemerisError::ProbeFailed {
                message: e.to_string(),
            })
    }

    /// Geocentric ecliptic (longitude, latitude, distance) of a body.
    fn ecliptic_coordinates(
        &self,
        body: Body,
        julian_day: f64,
    ) -> Result<(f64, f64, f64), EphemerisError> {
        let flags = FLG_SWIEPH | FLG_XYZ;
        let result = calc_ut(julian_day, body.info().swiss_id as u32, flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        let (lon, lat, distance) = ecliptic_from_rectangular(out[0], out[1], out[2]);
        if !(lon.is_finite() && lat.is_finite() && distance.is_finite()) {
            return Err(EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("non-finite state vector {:?}", &out[..3]),
            });
        }
        Ok((lon, lat, distance))
    }

    fn swiss_position(&self, body: Body, julian_day: f64) -> Result<PlanetPosition, EphemerisError> {
        let (longitude, latitude, distance) = self.ecliptic_coordinates(body, julian_day)?;

        let daily_speed = match self.ecliptic_coordinates(body, julian_day + SPEED_STEP_DAYS) {
            Ok((later, _, _)) => signed_delta(longitude, later) / SPEED_STEP_DAYS,
            Err(e) => {
                log::debug!("No speed estimate for {}: {}", body, e);
                0.0
            }
        };

        Ok(PlanetPosition::new(body, longitude, latitude, distance, daily_speed))
    }
}

impl EphemerisBackend for SwissEphemerisAdapter {
    fn mode(&self) -> EphemerisMode {
        EphemerisMode::Real
    }

    fn compute_body(&self, body: Body, julian_day: f64) -> Result<PlanetPosition, EphemerisError> {
        position_or_substitute(self.body_fallback.as_ref(), body, julian_day, |b, jd| {
            self.swiss_position(b, jd)
        })
    }
}

/// Run `compute`, replacing a failure with the mean-motion position when a
/// fallback model is configured.
fn position_or_substitute<F>(
    fallback: Option<&AnalyticEphemeris>,
    body: Body,
    julian_day: f64,
    compute: F,
) -> Result<PlanetPosition, EphemerisError>
where
    F: FnOnce(Body, f64) -> Result<PlanetPosition, EphemerisError>,
{
    match (compute(body, julian_day), fallback) {
        (Ok(position), _) => Ok(position),
        (Err(e), Some(model)) => {
            log::warn!("{}; substituting mean-motion position", e);
            model.compute_body(body, julian_day)
        }
        (Err(e), None) => Err(e),
    }
}

/// Rectangular ecliptic coordinates to (longitude°, latitude°, distance).
pub fn ecliptic_from_rectangular(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let distance = (x * x + y * y + z * z).sqrt();
    let longitude = normalize_degrees(y.atan2(x).to_degrees());
    let latitude = z.atan2((x * x + y * y).sqrt()).to_degrees();
    (longitude, latitude, distance)
}
