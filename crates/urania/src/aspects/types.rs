use crate::ephemeris::types::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aspect types, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Semisextile,
    Semisquare,
    Sextile,
    Quintile,
    Square,
    Tredecile,
    Trine,
    Sesquiquadrate,
    Quincunx,
    Opposition,
}

/// Interpretive character of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Neutral,
    Harmonious,
    Tense,
    Minor,
}

/// Static definition of an aspect type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub name: &'static str,
    /// Exact angle in degrees
    pub angle: f64,
    /// Base orb in degrees, before the outer-body multiplier
    pub orb: f64,
    pub symbol: &'static str,
    pub nature: AspectNature,
}

pub const ASPECT_CATALOG: [AspectDefinition; 11] = [
    AspectDefinition { kind: AspectKind::Conjunction, name: "conjunction", angle: 0.0, orb: 8.0, symbol: "☌", nature: AspectNature::Neutral },
    AspectDefinition { kind: AspectKind::Semisextile, name: "semisextile", angle: 30.0, orb: 2.0, symbol: "⚺", nature: AspectNature::Minor },
    AspectDefinition { kind: AspectKind::Semisquare, name: "semisquare", angle: 45.0, orb: 2.0, symbol: "∠", nature: AspectNature::Minor },
    AspectDefinition { kind: AspectKind::Sextile, name: "sextile", angle: 60.0, orb: 6.0, symbol: "⚹", nature: AspectNature::Harmonious },
    AspectDefinition { kind: AspectKind::Quintile, name: "quintile", angle: 72.0, orb: 2.0, symbol: "∟", nature: AspectNature::Minor },
    AspectDefinition { kind: AspectKind::Square, name: "square", angle: 90.0, orb: 8.0, symbol: "□", nature: AspectNature::Tense },
    AspectDefinition { kind: AspectKind::Tredecile, name: "tredecile", angle: 108.0, orb: 1.0, symbol: "∴", nature: AspectNature::Minor },
    AspectDefinition { kind: AspectKind::Trine, name: "trine", angle: 120.0, orb: 8.0, symbol: "△", nature: AspectNature::Harmonious },
    AspectDefinition { kind: AspectKind::Sesquiquadrate, name: "sesquiquadrate", angle: 135.0, orb: 2.0, symbol: "⊕", nature: AspectNature::Minor },
    AspectDefinition { kind: AspectKind::Quincunx, name: "quincunx", angle: 150.0, orb: 3.0, symbol: "⚻", nature: AspectNature::Tense },
    AspectDefinition { kind: AspectKind::Opposition, name: "opposition", angle: 180.0, orb: 8.0, symbol: "☍", nature: AspectNature::Tense },
];

impl AspectKind {
    pub fn definition(self) -> &'static AspectDefinition {
        &ASPECT_CATALOG[self as usize]
    }

    pub fn angle(self) -> f64 {
        self.definition().angle
    }

    pub fn base_orb(self) -> f64 {
        self.definition().orb
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn symbol(self) -> &'static str {
        self.definition().symbol
    }

    pub fn nature(self) -> AspectNature {
        self.definition().nature
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How close an aspect is to exact, relative to its effective orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectStrength {
    Exact,
    Medium,
    Weak,
}

/// An aspect between two bodies of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    /// Earlier body in canonical order
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Shorter-arc separation between the two bodies, `[0, 180]`
    pub actual_angle: f64,
    /// |actual_angle - kind.angle|
    pub orb_delta: f64,
    /// Base orb times the pair's orb multiplier
    pub effective_orb: f64,
    pub strength: AspectStrength,
    /// 100 when exact, 0 at the edge of the orb
    pub exactness: f64,
    /// Whether the pair is moving toward exactness
    pub applying: bool,
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} (orb {:.2}°, {:?})",
            self.body_a.name(),
            self.kind.symbol(),
            self.kind.name(),
            self.body_b.name(),
            self.orb_delta,
            self.strength
        )
    }
}
