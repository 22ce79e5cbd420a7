use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::text::fold;

/// Width of one sign on the ecliptic, in degrees.
pub const SIGN_SPAN: f64 = 30.0;

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
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

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// All 12 signs in ecliptic order, Aries first.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Sign at `index`, wrapping every 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_SIGNS[index % 12]
    }

    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = longitude.rem_euclid(360.0);
        // rem_euclid can return exactly 360.0 for tiny negative inputs
        let sign_index = ((normalized_longitude / SIGN_SPAN).floor() as usize).min(11);
        Self::from_index(sign_index)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Longitude where the sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_SPAN
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn portuguese_name(self) -> &'static str {
        match self {
            Self::Aries => "Áries",
            Self::Taurus => "Touro",
            Self::Gemini => "Gêmeos",
            Self::Cancer => "Câncer",
            Self::Leo => "Leão",
            Self::Virgo => "Virgem",
            Self::Libra => "Libra",
            Self::Scorpio => "Escorpião",
            Self::Sagittarius => "Sagitário",
            Self::Capricorn => "Capricórnio",
            Self::Aquarius => "Aquário",
            Self::Pisces => "Peixes",
        }
    }

    /// Fire, earth, air and water repeat in that order from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zodiac sign: {0}")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    /// Accepts English and Portuguese names in any case, with or without accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold(s);
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| fold(sign.name()) == key || fold(sign.portuguese_name()) == key)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    pub const fn portuguese_name(self) -> &'static str {
        match self {
            Element::Fire => "Fogo",
            Element::Earth => "Terra",
            Element::Air => "Ar",
            Element::Water => "Água",
        }
    }
}
