use crate::aspects::types::Aspect;
use crate::ephemeris::types::{Body, EphemerisMode, PlanetPosition};
use crate::houses::types::{HouseSet, HouseSystem};
use crate::time::JulianMoment;
use serde::{Deserialize, Serialize};

/// Birth data as supplied by the profile layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    /// `DD.MM.YYYY` or `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// Geographic latitude, degrees north
    pub latitude: f64,
    /// Geographic longitude, degrees east
    pub longitude: f64,
    /// House system name or one-letter code; unknown values mean equal houses
    #[serde(default = "default_house_system")]
    pub house_system: String,
}

fn default_house_system() -> String {
    HouseSystem::default().name().to_string()
}

impl BirthInput {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        latitude: f64,
        longitude: f64,
        house_system: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            latitude,
            longitude,
            house_system: house_system.into(),
        }
    }

    /// Whether the coordinates are finite and on the globe.
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The birth input together with the moment computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    #[serde(flatten)]
    pub input: BirthInput,
    #[serde(flatten)]
    pub moment: JulianMoment,
}

/// A computed natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub planets: Vec<PlanetPosition>,
    pub houses: HouseSet,
    /// At most 15, tightest first
    pub aspects: Vec<Aspect>,
    pub birth_data: BirthData,
    /// Model that produced the planet positions
    pub ephemeris: EphemerisMode,
}

impl NatalChart {
    pub fn planet(&self, body: Body) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.body == body)
    }

    pub fn julian_day(&self) -> f64 {
        self.birth_data.moment.julian_day
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
