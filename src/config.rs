//! Chart configuration loaded from TOML.
//!
//! ```toml
//! [chart]
//! bodies = "extended"
//! language = "english"
//! default_utc_offset = "-03:00"
//! earliest_birth_date = "1900-01-01"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::birth::parse_offset;
use crate::bodies::{CelestialBody, CLASSICAL_BODIES, EXTENDED_BODIES};
use crate::calculator::PositionCalculator;
use crate::error::ConfigError;
use crate::interpretation::Language;

pub const CONFIG_FILE_NAME: &str = "aztro_chart.toml";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySet {
    /// Sun through Saturn.
    #[default]
    Classical,
    /// Adds Uranus, Neptune and Pluto.
    Extended,
}

impl BodySet {
    pub fn bodies(self) -> &'static [CelestialBody] {
        match self {
            BodySet::Classical => &CLASSICAL_BODIES,
            BodySet::Extended => &EXTENDED_BODIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub chart: ChartSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default)]
    pub bodies: BodySet,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_utc_offset")]
    pub default_utc_offset: String,
    #[serde(default = "default_earliest_birth_date")]
    pub earliest_birth_date: NaiveDate,
}

fn default_utc_offset() -> String {
    "+00:00".to_string()
}

fn default_earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bodies: BodySet::default(),
            language: Language::default(),
            default_utc_offset: default_utc_offset(),
            earliest_birth_date: default_earliest_birth_date(),
        }
    }
}

impl ChartConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ChartConfig = content.parse()?;
        log::debug!("loaded chart config from {}", path.display());
        Ok(config)
    }

    /// Searches `aztro_chart.toml` in the current directory, then `config/`.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("config").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Like [`ChartConfig::from_default_location`], but any failure yields the defaults.
    pub fn load_or_default() -> Self {
        match Self::from_default_location() {
            Ok(config) => config,
            Err(ConfigError::NotFound) => Self::default(),
            Err(e) => {
                log::warn!("ignoring chart config: {e}");
                Self::default()
            }
        }
    }

    /// Offset applied to wall-clock birth times that do not carry their own.
    pub fn default_offset(&self) -> Result<FixedOffset, ConfigError> {
        parse_offset(&self.chart.default_utc_offset).ok_or_else(|| ConfigError::InvalidValue {
            key: "chart.default_utc_offset",
            value: self.chart.default_utc_offset.clone(),
        })
    }

    pub fn calculator(&self) -> PositionCalculator<'static> {
        PositionCalculator::new(self.chart.bodies.bodies())
    }

    fn validate(self) -> Result<Self, ConfigError> {
        self.default_offset()?;
        Ok(self)
    }
}

impl FromStr for ChartConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ChartConfig = toml::from_str(s)?;
        config.validate()
    }
}
