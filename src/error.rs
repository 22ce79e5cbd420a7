// ---------------------------
// ## Error Handling
// ---------------------------

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::interpretation::Language;

/// One problem with a submitted birth form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BirthError {
    #[error("birth date is required")]
    MissingDate,
    #[error("invalid birth date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("birth date cannot be in the future")]
    FutureDate,
    #[error("birth date must be on or after {0}")]
    TooEarly(NaiveDate),
    #[error("birth time is required")]
    MissingTime,
    #[error("invalid birth time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("invalid UTC offset {0:?}, expected +HH:MM or -HH:MM")]
    InvalidOffset(String),
    #[error("a city must be selected")]
    MissingCity,
    #[error("unknown city {0:?}")]
    UnknownCity(String),
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: String, longitude: String },
}

impl BirthError {
    /// Message for the person filling in the form.
    pub fn message(&self, language: Language) -> String {
        match language {
            Language::English => self.to_string(),
            Language::Portuguese => match self {
                BirthError::MissingDate => "Data de nascimento é obrigatória".to_string(),
                BirthError::InvalidDate(_) => "Data de nascimento inválida".to_string(),
                BirthError::FutureDate => "Data de nascimento não pode ser futura".to_string(),
                BirthError::TooEarly(date) => format!(
                    "Data de nascimento deve ser posterior a {}",
                    date.format("%d/%m/%Y")
                ),
                BirthError::MissingTime => "Hora de nascimento é obrigatória".to_string(),
                BirthError::InvalidTime(_) => "Hora de nascimento inválida".to_string(),
                BirthError::InvalidOffset(_) => "Fuso horário inválido".to_string(),
                BirthError::MissingCity => "Selecione uma cidade".to_string(),
                BirthError::UnknownCity(name) => format!("Cidade desconhecida: {name}"),
                BirthError::InvalidCoordinates { .. } => "Coordenadas inválidas".to_string(),
            },
        }
    }
}

/// Every problem found in one form submission. Never empty.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationErrors(Vec<BirthError>);

impl ValidationErrors {
    /// `None` when there is nothing to report.
    pub fn from_vec(errors: Vec<BirthError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(ValidationErrors(errors))
        }
    }

    pub fn errors(&self) -> &[BirthError] {
        &self.0
    }

    pub fn contains(&self, error: &BirthError) -> bool {
        self.0.contains(error)
    }

    pub fn messages(&self, language: Language) -> Vec<String> {
        self.0.iter().map(|e| e.message(language)).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "invalid birth data: {}", messages.join("; "))
    }
}

impl From<BirthError> for ValidationErrors {
    fn from(error: BirthError) -> Self {
        ValidationErrors(vec![error])
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("no aztro_chart.toml found in the standard locations")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize chart: {0}")]
    Serialization(#[from] serde_json::Error),
}
