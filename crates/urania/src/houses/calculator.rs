//! Approximate house cusps.
//!
//! The Ascendant and Midheaven come from a linear sidereal angle and the
//! standard ecliptic formulas. Each system then offsets the 30° equal-house
//! baseline by its own smooth, latitude-sensitive term. This is a qualitative
//! model, not spherical-trigonometry house division.

use crate::angles::normalize_degrees;
use crate::houses::types::{HouseSet, HouseSystem};
use crate::time::J2000_JD;
use std::f64::consts::TAU;
use thiserror::Error;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Sidereal angle at J2000.0 and its daily rate, degrees.
const GMST_AT_J2000_DEG: f64 = 280.460_618_37;
const GMST_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

const TROPICAL_YEAR_DAYS: f64 = 365.25;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HouseError {
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Invalid Julian Day: {0}")]
    InvalidJulianDay(f64),
    #[error("Ascendant/Midheaven undefined at JD {julian_day}, latitude {latitude}")]
    DegenerateAngles { julian_day: f64, latitude: f64 },
}

/// Local sidereal angle (RAMC) in degrees for a Julian Day and east longitude.
pub fn local_sidereal_degrees(julian_day: f64, longitude: f64) -> f64 {
    let days = julian_day - J2000_JD;
    normalize_degrees(GMST_AT_J2000_DEG + GMST_RATE_DEG_PER_DAY * days + longitude)
}

/// House calculator
#[derive(Debug, Clone, Copy)]
pub struct HouseCalculator {
    obliquity_deg: f64,
}

impl HouseCalculator {
    pub fn new() -> Self {
        Self {
            obliquity_deg: OBLIQUITY_J2000_DEG,
        }
    }

    /// Compute the twelve cusps. Never fails: any error yields
    /// [`HouseSet::equal_fallback`].
    pub fn compute_houses(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> HouseSet {
        match self.try_compute_houses(julian_day, latitude, longitude, system) {
            Ok(houses) => houses,
            Err(e) => {
                log::warn!("House calculation failed ({}); using equal-house fallback", e);
                HouseSet::equal_fallback(system)
            }
        }
    }

    /// Compute cusps for a textual system identifier; unknown identifiers use
    /// equal houses.
    pub fn compute_houses_for_id(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system_id: &str,
    ) -> HouseSet {
        self.compute_houses(julian_day, latitude, longitude, HouseSystem::resolve(system_id))
    }

    pub fn try_compute_houses(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseSet, HouseError> {
        let (ascendant, midheaven) = self.angles(julian_day, latitude, longitude)?;

        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            let base = normalize_degrees(ascendant + i as f64 * 30.0);
            *cusp = if system.is_equal_spaced() {
                base
            } else {
                normalize_degrees(base + perturbation(system, base, latitude, julian_day))
            };
        }

        if cusps.iter().any(|c| !c.is_finite()) {
            return Err(HouseError::DegenerateAngles { julian_day, latitude });
        }

        Ok(HouseSet::from_longitudes(system, ascendant, midheaven, cusps))
    }

    /// Ascendant and Midheaven in degrees.
    pub fn angles(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<(f64, f64), HouseError> {
        if !julian_day.is_finite() {
            return Err(HouseError::InvalidJulianDay(julian_day));
        }
        if !(latitude.is_finite() && longitude.is_finite())
            || latitude.abs() > 90.0
            || longitude.abs() > 180.0
        {
            return Err(HouseError::InvalidCoordinates { latitude, longitude });
        }

        let ramc = local_sidereal_degrees(julian_day, longitude).to_radians();
        let eps = self.obliquity_deg.to_radians();
        let phi = latitude.to_radians();

        let asc = f64::atan2(ramc.cos(), -(ramc.sin() * eps.cos() + phi.tan() * eps.sin()));
        let mc = f64::atan2(ramc.sin(), ramc.cos() * eps.cos());

        if !(asc.is_finite() && mc.is_finite()) {
            return Err(HouseError::DegenerateAngles { julian_day, latitude });
        }

        Ok((
            normalize_degrees(asc.to_degrees()),
            normalize_degrees(mc.to_degrees()),
        ))
    }
}

impl Default for HouseCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// System-specific offset (degrees) applied to an equal-house cusp.
fn perturbation(system: HouseSystem, cusp: f64, latitude: f64, julian_day: f64) -> f64 {
    let a = cusp.to_radians();
    let phi = latitude.to_radians();
    let lat_factor = latitude.abs() / 90.0;

    match system {
        HouseSystem::Equal | HouseSystem::WholeSign => 0.0,
        HouseSystem::Placidus => {
            // Yearly swing in the size of the offset.
            let season = (TAU * (julian_day - J2000_JD) / TROPICAL_YEAR_DAYS).sin();
            15.0 * lat_factor * a.sin() * season
        }
        HouseSystem::Koch => lat_factor * (8.0 * a.sin() + 4.0 * (2.0 * a).cos()),
        HouseSystem::Porphyry => 3.75 * lat_factor * a.sin(),
        HouseSystem::Alcabitius => 5.0 * lat_factor * (2.0 * a).sin(),
        HouseSystem::Campanus => 12.0 * phi.sin() * a.cos(),
        HouseSystem::Regiomontanus => lat_factor * (10.0 * a.sin() + 3.0 * a.cos()),
        HouseSystem::Morinus => 6.0 * lat_factor + 4.0 * a.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidereal_angle_at_epoch() {
        assert!((local_sidereal_degrees(J2000_JD, 0.0) - 280.46061837).abs() < 1e-9);
        assert!((local_sidereal_degrees(J2000_JD, 90.0) - 10.46061837).abs() < 1e-9);
    }

    #[test]
    fn test_mc_on_equator_tracks_ramc_quadrant() {
        let calc = HouseCalculator::new();
        let (asc, mc) = calc.angles(J2000_JD, 0.0, 0.0).unwrap();
        // RAMC ~280.46°, so the MC lies in the fourth quadrant and the
        // Ascendant is roughly a quarter turn ahead of it.
        assert!(mc > 270.0 && mc < 290.0, "mc = {}", mc);
        let gap = normalize_degrees(asc - mc);
        assert!(gap > 80.0 && gap < 100.0, "asc - mc = {}", gap);
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let calc = HouseCalculator::new();
        assert!(matches!(
            calc.angles(J2000_JD, 91.0, 0.0),
            Err(HouseError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            calc.angles(f64::NAN, 10.0, 0.0),
            Err(HouseError::InvalidJulianDay(_))
        ));
    }

    #[test]
    fn test_equal_systems_have_no_perturbation() {
        assert_eq!(perturbation(HouseSystem::Equal, 123.0, 55.0, J2000_JD + 77.0), 0.0);
        assert_eq!(perturbation(HouseSystem::WholeSign, 123.0, -40.0, J2000_JD), 0.0);
    }

    #[test]
    fn test_latitude_sensitive_systems_vanish_on_equator() {
        for system in [
            HouseSystem::Placidus,
            HouseSystem::Koch,
            HouseSystem::Porphyry,
            HouseSystem::Alcabitius,
            HouseSystem::Campanus,
            HouseSystem::Regiomontanus,
        ] {
            assert_eq!(perturbation(system, 200.0, 0.0, J2000_JD + 100.0), 0.0);
        }
    }
}
