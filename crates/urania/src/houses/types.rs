use crate::angles::normalize_degrees;
use crate::western::zodiac::{degree_in_sign, format_degree, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Equal,
    WholeSign,
    Porphyry,
    Alcabitius,
    Campanus,
    Regiomontanus,
    Morinus,
}

/// House system mapping: (name, one-letter code, system)
const HOUSE_SYSTEMS: &[(&str, char, HouseSystem)] = &[
    ("placidus", 'P', HouseSystem::Placidus),
    ("koch", 'K', HouseSystem::Koch),
    ("equal", 'E', HouseSystem::Equal),
    ("whole_sign", 'W', HouseSystem::WholeSign),
    ("porphyry", 'O', HouseSystem::Porphyry),
    ("alcabitius", 'B', HouseSystem::Alcabitius),
    ("campanus", 'C', HouseSystem::Campanus),
    ("regiomontanus", 'R', HouseSystem::Regiomontanus),
    ("morinus", 'M', HouseSystem::Morinus),
];

impl HouseSystem {
    /// All supported systems.
    pub fn all() -> impl Iterator<Item = HouseSystem> {
        HOUSE_SYSTEMS.iter().map(|(_, _, system)| *system)
    }

    /// Parse a one-letter code (`"P"`) or a name (`"placidus"`, `"whole-sign"`),
    /// ignoring case.
    pub fn parse(identifier: &str) -> Option<HouseSystem> {
        let id = identifier.trim().to_lowercase().replace(['-', ' '], "_");
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, code, _)| {
                *name == id || (id.len() == 1 && id.starts_with(code.to_ascii_lowercase()))
            })
            .map(|(_, _, system)| *system)
    }

    /// Like [`HouseSystem::parse`], but unknown identifiers become
    /// [`HouseSystem::Equal`].
    pub fn resolve(identifier: &str) -> HouseSystem {
        HouseSystem::parse(identifier).unwrap_or_else(|| {
            log::warn!(
                "Unknown house system {:?}, using equal houses. Valid systems: {:?}",
                identifier,
                HOUSE_SYSTEMS.iter().map(|(name, _, _)| *name).collect::<Vec<_>>()
            );
            HouseSystem::Equal
        })
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, system)| *system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("equal")
    }

    pub fn code(self) -> char {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, system)| *system == self)
            .map(|(_, code, _)| *code)
            .unwrap_or('E')
    }

    /// Equal and whole-sign cusps are the unperturbed 30° baseline.
    pub fn is_equal_spaced(self) -> bool {
        matches!(self, HouseSystem::Equal | HouseSystem::WholeSign)
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCusp {
    /// 1..=12
    pub house_number: u8,
    pub cusp_longitude: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
}

impl HouseCusp {
    pub fn new(house_number: u8, cusp_longitude: f64) -> Self {
        let cusp_longitude = normalize_degrees(cusp_longitude);
        Self {
            house_number,
            cusp_longitude,
            sign: Sign::from_longitude(cusp_longitude),
            degree_in_sign: degree_in_sign(cusp_longitude),
        }
    }
}

impl fmt::Display for HouseCusp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "House {:>2}: {}", self.house_number, format_degree(self.cusp_longitude))
    }
}

/// Twelve cusps plus the two angles they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseSet {
    pub system: HouseSystem,
    pub ascendant: f64,
    pub midheaven: f64,
    pub cusps: [HouseCusp; 12],
    /// True when the calculation failed and the fixed 0°/30°/... layout was used.
    pub fallback: bool,
}

impl HouseSet {
    /// Build a set from twelve cusp longitudes, numbering them 1..=12.
    pub fn from_longitudes(
        system: HouseSystem,
        ascendant: f64,
        midheaven: f64,
        longitudes: [f64; 12],
    ) -> Self {
        Self {
            system,
            ascendant: normalize_degrees(ascendant),
            midheaven: normalize_degrees(midheaven),
            cusps: std::array::from_fn(|i| HouseCusp::new(i as u8 + 1, longitudes[i])),
            fallback: false,
        }
    }

    /// Cusps at 0°, 30°, ..., 330° for when house computation fails.
    pub fn equal_fallback(system: HouseSystem) -> Self {
        let mut set = Self::from_longitudes(
            system,
            0.0,
            270.0,
            std::array::from_fn(|i| i as f64 * 30.0),
        );
        set.fallback = true;
        set
    }

    /// Descendant, opposite the ascendant.
    pub fn descendant(&self) -> f64 {
        normalize_degrees(self.ascendant + 180.0)
    }

    /// Imum Coeli, opposite the midheaven.
    pub fn imum_coeli(&self) -> f64 {
        normalize_degrees(self.midheaven + 180.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HouseCusp> {
        self.cusps.iter()
    }
}
