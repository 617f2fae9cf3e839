pub mod adapter;
pub mod analytic;
pub mod backend;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use analytic::AnalyticEphemeris;
pub use backend::{EphemerisBackend, EphemerisError};
pub use types::{Body, BodyInfo, EphemerisMode, PlanetPosition, BODIES};
