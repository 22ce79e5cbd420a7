//! Natal chart positions from mean planetary motion.
//!
//! Each body moves at a constant rate from its J2000.0 longitude; the
//! resulting ecliptic longitude is rounded to hundredths of a degree and
//! mapped onto the twelve 30° tropical signs.
//!
//! ```
//! use aztro_chart::{PositionCalculator, ZodiacSign};
//! use chrono::{TimeZone, Utc};
//!
//! let instant = Utc.with_ymd_and_hms(1990, 5, 15, 14, 30, 0).unwrap();
//! let positions = PositionCalculator::classical().compute_positions(instant);
//! assert_eq!(positions[0].body_name, "Sun");
//! assert_eq!(positions[0].sign, ZodiacSign::Taurus);
//! ```
//!
//! Around the calculator sit the pieces of the birth form: input validation
//! ([`birth`]), the city catalog ([`locations`]), canned interpretations
//! ([`interpretation`]) and chart assembly ([`chart`]).

pub mod birth;
pub mod bodies;
pub mod calculator;
pub mod chart;
pub mod config;
pub mod error;
pub mod interpretation;
pub mod locations;
pub mod time;
pub mod zodiac;

mod text;

// ---------------------------
// ## Re-exports
// ---------------------------

pub use birth::{BirthInfo, BirthRequest};
pub use bodies::{CelestialBody, CLASSICAL_BODIES, EXTENDED_BODIES};
pub use calculator::{PositionCalculator, PositionResult};
pub use chart::{generate_chart, BirthChart, ChartResponse, PlanetEntry};
pub use config::{BodySet, ChartConfig};
pub use error::{BirthError, ChartError, ConfigError, ValidationErrors};
pub use interpretation::{interpret, Language};
pub use locations::{City, Location};
pub use zodiac::{Element, ZodiacSign};
