//! Natal chart calculation: planetary positions, house cusps and aspects
//! from a birth date, time and place.
//!
//! Positions come from the Swiss Ephemeris when its data files are available
//! and from a deterministic mean-motion model otherwise.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod houses;
pub mod time;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectNature, AspectStrength};
pub use chart::{BirthInput, ChartError, NatalChart, NatalChartService, ServiceConfig, ServiceState};
pub use ephemeris::{Body, EphemerisBackend, EphemerisMode, PlanetPosition};
pub use houses::{HouseCalculator, HouseCusp, HouseSet, HouseSystem};
pub use time::{to_julian_day, JulianMoment};
pub use western::{format_degree, Sign, ZodiacSign, ZODIAC_SIGNS};
