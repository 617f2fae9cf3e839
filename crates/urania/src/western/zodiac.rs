//! Tropical zodiac reference data.
//!
//! Twelve 30° signs starting at 0° Aries, each with its element and modality.

use crate::angles::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Static description of one sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacSign {
    pub sign: Sign,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
}

/// The zodiac in order, index `i` covering `[30i, 30i + 30)`.
pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { sign: Sign::Aries, name: "Aries", symbol: "♈", element: Element::Fire, modality: Modality::Cardinal },
    ZodiacSign { sign: Sign::Taurus, name: "Taurus", symbol: "♉", element: Element::Earth, modality: Modality::Fixed },
    ZodiacSign { sign: Sign::Gemini, name: "Gemini", symbol: "♊", element: Element::Air, modality: Modality::Mutable },
    ZodiacSign { sign: Sign::Cancer, name: "Cancer", symbol: "♋", element: Element::Water, modality: Modality::Cardinal },
    ZodiacSign { sign: Sign::Leo, name: "Leo", symbol: "♌", element: Element::Fire, modality: Modality::Fixed },
    ZodiacSign { sign: Sign::Virgo, name: "Virgo", symbol: "♍", element: Element::Earth, modality: Modality::Mutable },
    ZodiacSign { sign: Sign::Libra, name: "Libra", symbol: "♎", element: Element::Air, modality: Modality::Cardinal },
    ZodiacSign { sign: Sign::Scorpio, name: "Scorpio", symbol: "♏", element: Element::Water, modality: Modality::Fixed },
    ZodiacSign { sign: Sign::Sagittarius, name: "Sagittarius", symbol: "♐", element: Element::Fire, modality: Modality::Mutable },
    ZodiacSign { sign: Sign::Capricorn, name: "Capricorn", symbol: "♑", element: Element::Earth, modality: Modality::Cardinal },
    ZodiacSign { sign: Sign::Aquarius, name: "Aquarius", symbol: "♒", element: Element::Air, modality: Modality::Fixed },
    ZodiacSign { sign: Sign::Pisces, name: "Pisces", symbol: "♓", element: Element::Water, modality: Modality::Mutable },
];

impl Sign {
    /// Position in the zodiac, 0 (Aries) ..= 11 (Pisces).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Sign {
        ZODIAC_SIGNS[index % 12].sign
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(longitude: f64) -> Sign {
        Sign::from_index(sign_index(longitude))
    }

    pub fn info(self) -> &'static ZodiacSign {
        &ZODIAC_SIGNS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn element(self) -> Element {
        self.info().element
    }

    pub fn modality(self) -> Modality {
        self.info().modality
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign index (0-11) for a longitude: `floor(lon / 30) mod 12`.
pub fn sign_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / 30.0).floor() as usize) % 12
}

/// Degrees past the start of the containing sign, in `[0, 30)`.
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % 30.0
}

/// Format a longitude as `D°M' <sign symbol>`, e.g. `15°30' ♈`.
pub fn format_degree(longitude: f64) -> String {
    let in_sign = degree_in_sign(longitude);
    let whole = in_sign.floor();
    let minutes = ((in_sign - whole) * 60.0).floor();
    format!(
        "{}°{:02}' {}",
        whole as u32,
        minutes as u32,
        Sign::from_longitude(longitude).symbol()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.999), 11);
        assert_eq!(sign_index(360.0), 0);
        assert_eq!(sign_index(-15.0), 11);
    }

    #[test]
    fn test_catalog_order_matches_enum() {
        for (i, entry) in ZODIAC_SIGNS.iter().enumerate() {
            assert_eq!(entry.sign.index(), i);
        }
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Pisces.modality(), Modality::Mutable);
        assert_eq!(Sign::Capricorn.modality(), Modality::Cardinal);
    }

    #[test]
    fn test_format_degree() {
        assert_eq!(format_degree(15.5), "15°30' ♈");
        assert_eq!(format_degree(280.25), "10°15' ♑");
    }
}
