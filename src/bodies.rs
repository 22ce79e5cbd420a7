//! Static table of the bodies tracked by the chart.
//!
//! Each body moves at a constant mean daily motion from its mean longitude at
//! J2000.0. The constants are the mean longitudes and rates of the standard
//! approximate Keplerian element tables (Sun and Moon from the solar and lunar
//! mean longitude series), converted from degrees per Julian century to degrees
//! per day.

use std::fmt;

use serde::Serialize;

use crate::text::fold;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialBody {
    /// English identifier, e.g. `"Sun"`.
    pub name: &'static str,
    /// Name shown to Portuguese-speaking users, e.g. `"Sol"`.
    pub portuguese_name: &'static str,
    pub symbol: &'static str,
    /// CSS color used by the presentation layer.
    pub color: &'static str,
    /// Degrees per day.
    pub mean_daily_motion: f64,
    /// Mean ecliptic longitude at J2000.0, degrees in [0, 360).
    pub longitude_at_epoch: f64,
}

impl CelestialBody {
    /// Days needed to sweep a full 360°.
    pub fn mean_period_days(&self) -> f64 {
        360.0 / self.mean_daily_motion
    }

    /// Looks a body up by English or Portuguese name, ignoring case and accents.
    pub fn find(name: &str) -> Option<&'static CelestialBody> {
        let key = fold(name);
        EXTENDED_BODIES
            .iter()
            .find(|body| fold(body.name) == key || fold(body.portuguese_name) == key)
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.name)
    }
}

// ---------------------------
// ## Body Constants
// ---------------------------

pub const SUN: CelestialBody = CelestialBody {
    name: "Sun",
    portuguese_name: "Sol",
    symbol: "☉",
    color: "#FDB813",
    mean_daily_motion: 0.985_647_36,
    longitude_at_epoch: 280.466_46,
};

pub const MOON: CelestialBody = CelestialBody {
    name: "Moon",
    portuguese_name: "Lua",
    symbol: "☽",
    color: "#C0C0C0",
    mean_daily_motion: 13.176_396_475,
    longitude_at_epoch: 218.316_448,
};

pub const MERCURY: CelestialBody = CelestialBody {
    name: "Mercury",
    portuguese_name: "Mercúrio",
    symbol: "☿",
    color: "#B5A642",
    mean_daily_motion: 4.092_338_785,
    longitude_at_epoch: 252.250_324,
};

pub const VENUS: CelestialBody = CelestialBody {
    name: "Venus",
    portuguese_name: "Vênus",
    symbol: "♀",
    color: "#E6A8D7",
    mean_daily_motion: 1.602_130_469,
    longitude_at_epoch: 181.979_099,
};

pub const MARS: CelestialBody = CelestialBody {
    name: "Mars",
    portuguese_name: "Marte",
    symbol: "♂",
    color: "#C1440E",
    mean_daily_motion: 0.524_032_928,
    longitude_at_epoch: 355.446_568,
};

pub const JUPITER: CelestialBody = CelestialBody {
    name: "Jupiter",
    portuguese_name: "Júpiter",
    symbol: "♃",
    color: "#C88B3A",
    mean_daily_motion: 0.083_086_821,
    longitude_at_epoch: 34.396_441,
};

pub const SATURN: CelestialBody = CelestialBody {
    name: "Saturn",
    portuguese_name: "Saturno",
    symbol: "♄",
    color: "#8B7D6B",
    mean_daily_motion: 0.033_470_051,
    longitude_at_epoch: 49.954_244,
};

pub const URANUS: CelestialBody = CelestialBody {
    name: "Uranus",
    portuguese_name: "Urano",
    symbol: "♅",
    color: "#4FD0E7",
    mean_daily_motion: 0.011_731_199,
    longitude_at_epoch: 313.238_105,
};

pub const NEPTUNE: CelestialBody = CelestialBody {
    name: "Neptune",
    portuguese_name: "Netuno",
    symbol: "♆",
    color: "#4B70DD",
    mean_daily_motion: 0.005_981_094,
    longitude_at_epoch: 304.879_970,
};

pub const PLUTO: CelestialBody = CelestialBody {
    name: "Pluto",
    portuguese_name: "Plutão",
    symbol: "♇",
    color: "#7F4F3A",
    mean_daily_motion: 0.003_975_573,
    longitude_at_epoch: 238.929_038,
};

/// The seven visible bodies, Sun first.
pub static CLASSICAL_BODIES: [CelestialBody; 7] = [SUN, MOON, MERCURY, VENUS, MARS, JUPITER, SATURN];

/// Classical bodies followed by the outer planets.
pub static EXTENDED_BODIES: [CelestialBody; 10] = [
    SUN, MOON, MERCURY, VENUS, MARS, JUPITER, SATURN, URANUS, NEPTUNE, PLUTO,
];
