//! Birth chart assembly: positions plus display data and interpretations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::birth::{BirthInfo, BirthRequest};
use crate::bodies::CelestialBody;
use crate::calculator::PositionResult;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::interpretation::{interpret_position, Language};
use crate::locations::Location;

/// One body's row in a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetEntry {
    pub name: String,
    pub symbol: &'static str,
    pub sign: String,
    /// Ecliptic longitude.
    pub position: f64,
    /// Degrees into the sign.
    pub degree: f64,
    pub color: &'static str,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    pub timestamp: DateTime<Utc>,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    pub planets: Vec<PlanetEntry>,
}

/// `{"birthChart": {...}}`, the payload returned to the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub birth_chart: BirthChart,
}

impl PlanetEntry {
    pub fn new(body: &CelestialBody, position: &PositionResult, language: Language) -> Self {
        let (name, sign) = match language {
            Language::English => (body.name, position.sign.name()),
            Language::Portuguese => (body.portuguese_name, position.sign.portuguese_name()),
        };
        PlanetEntry {
            name: name.to_string(),
            symbol: body.symbol,
            sign: sign.to_string(),
            position: position.longitude,
            degree: position.sign_degree,
            color: body.color,
            interpretation: interpret_position(position, language),
        }
    }
}

impl BirthChart {
    pub fn calculate(birth_info: &BirthInfo, config: &ChartConfig) -> Self {
        let calculator = config.calculator();
        let language = config.chart.language;
        let positions = calculator.compute_positions(birth_info.date_time);

        let planets = calculator
            .bodies()
            .iter()
            .zip(positions.iter())
            .map(|(body, position)| PlanetEntry::new(body, position, language))
            .collect();

        log::debug!(
            "computed {} positions for {}",
            positions.len(),
            birth_info.date_time.to_rfc3339()
        );

        BirthChart {
            timestamp: birth_info.date_time,
            location: birth_info.location,
            place: birth_info.place.clone(),
            planets,
        }
    }

    pub fn planet(&self, name: &str) -> Option<&PlanetEntry> {
        let name = crate::text::fold(name);
        self.planets.iter().find(|p| crate::text::fold(&p.name) == name)
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();

        text.push_str(&format!(
            "Birth Chart for {} UTC\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));
        if let Some(place) = &self.place {
            text.push_str(&format!("Place: {place}\n"));
        }
        text.push_str(&format!(
            "Location: {:.4}, {:.4}\n",
            self.location.latitude, self.location.longitude
        ));

        text.push_str("\nPlanetary Positions:\n");
        for planet in &self.planets {
            text.push_str(&format!(
                "{} {:<9} {:>6.2}°  {} {:.2}°\n",
                planet.symbol, planet.name, planet.position, planet.sign, planet.degree
            ));
        }

        text.push_str("\nInterpretations:\n");
        for planet in &self.planets {
            text.push_str(&format!("\n{} {}\n{}\n", planet.symbol, planet.name, planet.interpretation));
        }

        text
    }
}

impl ChartResponse {
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Validates a submitted form and builds its chart.
pub fn generate_chart(
    request: &BirthRequest,
    now: DateTime<Utc>,
    config: &ChartConfig,
) -> Result<ChartResponse, ChartError> {
    config.default_offset()?;

    let birth_info = request.validate(now, config).map_err(|errors| {
        log::warn!("rejected birth request: {errors}");
        errors
    })?;

    Ok(ChartResponse {
        birth_chart: BirthChart::calculate(&birth_info, config),
    })
}
