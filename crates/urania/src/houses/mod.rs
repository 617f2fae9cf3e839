pub mod calculator;
pub mod types;

pub use calculator::{local_sidereal_degrees, HouseCalculator, HouseError, OBLIQUITY_J2000_DEG};
pub use types::{HouseCusp, HouseSet, HouseSystem};
