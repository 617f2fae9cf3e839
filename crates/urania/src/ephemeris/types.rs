use crate::angles::normalize_degrees;
use crate::western::zodiac::{degree_in_sign, format_degree, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bodies tracked in a natal chart, in canonical chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Chiron,
}

/// Display data and mean-motion elements for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyInfo {
    pub body: Body,
    pub key: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Swiss Ephemeris body number.
    #[serde(skip)]
    pub swiss_id: i32,
    /// Mean geocentric longitude at J2000.0, degrees.
    #[serde(skip)]
    pub reference_longitude: f64,
    /// Mean daily motion, degrees/day (negative for the lunar node).
    #[serde(skip)]
    pub mean_motion: f64,
    /// Nominal geocentric distance, AU.
    #[serde(skip)]
    pub mean_distance: f64,
    /// Jupiter through Pluto: wider orbs, modeled retrograde loops.
    pub outer: bool,
}

pub const BODIES: [BodyInfo; 12] = [
    BodyInfo { body: Body::Sun, key: "sun", name: "Sun", symbol: "☉", swiss_id: 0, reference_longitude: 280.46, mean_motion: 0.9856474, mean_distance: 1.0, outer: false },
    BodyInfo { body: Body::Moon, key: "moon", name: "Moon", symbol: "☽", swiss_id: 1, reference_longitude: 218.32, mean_motion: 13.176396, mean_distance: 0.00257, outer: false },
    BodyInfo { body: Body::Mercury, key: "mercury", name: "Mercury", symbol: "☿", swiss_id: 2, reference_longitude: 252.3, mean_motion: 4.0923344368, mean_distance: 1.0, outer: false },
    BodyInfo { body: Body::Venus, key: "venus", name: "Venus", symbol: "♀", swiss_id: 3, reference_longitude: 181.0, mean_motion: 1.6021302244, mean_distance: 1.0, outer: false },
    BodyInfo { body: Body::Mars, key: "mars", name: "Mars", symbol: "♂", swiss_id: 4, reference_longitude: 355.4, mean_motion: 0.5240207, mean_distance: 1.52, outer: false },
    BodyInfo { body: Body::Jupiter, key: "jupiter", name: "Jupiter", symbol: "♃", swiss_id: 5, reference_longitude: 34.4, mean_motion: 0.083129444, mean_distance: 5.2, outer: true },
    BodyInfo { body: Body::Saturn, key: "saturn", name: "Saturn", symbol: "♄", swiss_id: 6, reference_longitude: 50.1, mean_motion: 0.033545964, mean_distance: 9.54, outer: true },
    BodyInfo { body: Body::Uranus, key: "uranus", name: "Uranus", symbol: "⛢", swiss_id: 7, reference_longitude: 314.1, mean_motion: 0.011725806, mean_distance: 19.19, outer: true },
    BodyInfo { body: Body::Neptune, key: "neptune", name: "Neptune", symbol: "♆", swiss_id: 8, reference_longitude: 304.3, mean_motion: 0.0059818033, mean_distance: 30.07, outer: true },
    BodyInfo { body: Body::Pluto, key: "pluto", name: "Pluto", symbol: "♇", swiss_id: 9, reference_longitude: 232.1, mean_motion: 0.003981552, mean_distance: 39.48, outer: true },
    BodyInfo { body: Body::NorthNode, key: "north_node", name: "North Node", symbol: "☊", swiss_id: 10, reference_longitude: 125.04, mean_motion: -0.0529539, mean_distance: 0.00257, outer: false },
    BodyInfo { body: Body::Chiron, key: "chiron", name: "Chiron", symbol: "⚷", swiss_id: 15, reference_longitude: 251.6, mean_motion: 0.01944, mean_distance: 13.7, outer: false },
];

impl Body {
    /// All tracked bodies in canonical order.
    pub fn all() -> impl Iterator<Item = Body> {
        BODIES.iter().map(|info| info.body)
    }

    pub fn info(self) -> &'static BodyInfo {
        &BODIES[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn is_outer(self) -> bool {
        self.info().outer
    }

    /// Look a body up by its key ("sun", "north_node", ...), case-insensitive.
    pub fn from_key(key: &str) -> Option<Body> {
        let key = key.trim().to_lowercase();
        BODIES.iter().find(|info| info.key == key).map(|info| info.body)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which position model produced a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EphemerisMode {
    /// Swiss Ephemeris positions.
    Real,
    /// Mean-motion approximation.
    Analytic,
}

impl fmt::Display for EphemerisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EphemerisMode::Real => f.write_str("real"),
            EphemerisMode::Analytic => f.write_str("analytic"),
        }
    }
}

/// Geocentric ecliptic position of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees, `[0, 360)`
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance from Earth (AU)
    pub distance: f64,
    /// Signed speed in longitude (degrees per day)
    pub daily_speed: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Build a position, deriving sign, degree and retrograde flag.
    ///
    /// The longitude is normalized into `[0, 360)` first.
    pub fn new(body: Body, longitude: f64, latitude: f64, distance: f64, daily_speed: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        Self {
            body,
            longitude,
            latitude,
            distance,
            daily_speed,
            sign: Sign::from_longitude(longitude),
            degree_in_sign: degree_in_sign(longitude),
            retrograde: daily_speed < 0.0,
        }
    }
}

impl fmt::Display for PlanetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.body.symbol(), self.body.name(), format_degree(self.longitude))?;
        if self.retrograde {
            f.write_str(" R")?;
        }
        Ok(())
    }
}
