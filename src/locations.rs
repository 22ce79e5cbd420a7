//! Birth places: coordinates plus the static catalog of Brazilian cities
//! offered by the birth form.

use serde::{Deserialize, Serialize};

use crate::text::fold;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location { latitude, longitude }
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn sao_paulo() -> Self { Location { latitude: -23.5505, longitude: -46.6333 } }
    pub fn rio_de_janeiro() -> Self { Location { latitude: -22.9068, longitude: -43.1729 } }
    pub fn brasilia() -> Self { Location { latitude: -15.7975, longitude: -47.8919 } }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    /// Two-letter state abbreviation.
    pub state: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
}

impl City {
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    /// `"Name, ST"`, the form the city picker displays and submits.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct State {
    pub name: &'static str,
    pub abbreviation: &'static str,
}

const fn city(name: &'static str, state: &'static str, latitude: f64, longitude: f64, timezone: &'static str) -> City {
    City { name, state, latitude, longitude, timezone }
}

const SP: &str = "America/Sao_Paulo";

// ---------------------------
// ## City Catalog
// ---------------------------

/// State capitals plus the larger cities of SP, RJ and MG.
pub static CITIES: [City; 34] = [
    city("São Paulo", "SP", -23.5505, -46.6333, SP),
    city("Campinas", "SP", -22.9071, -47.0632, SP),
    city("Santos", "SP", -23.9618, -46.3322, SP),
    city("Ribeirão Preto", "SP", -21.1775, -47.8103, SP),
    city("Rio de Janeiro", "RJ", -22.9068, -43.1729, SP),
    city("Niterói", "RJ", -22.8832, -43.1033, SP),
    city("São Gonçalo", "RJ", -22.8268, -43.0634, SP),
    city("Belo Horizonte", "MG", -19.9167, -43.9345, SP),
    city("Uberlândia", "MG", -18.9113, -48.2622, SP),
    city("Juiz de Fora", "MG", -21.7642, -43.3496, SP),
    city("Brasília", "DF", -15.7975, -47.8919, SP),
    city("Salvador", "BA", -12.9714, -38.5014, "America/Bahia"),
    city("Fortaleza", "CE", -3.7172, -38.5433, "America/Fortaleza"),
    city("Manaus", "AM", -3.1019, -60.0250, "America/Manaus"),
    city("Curitiba", "PR", -25.4284, -49.2733, SP),
    city("Recife", "PE", -8.0476, -34.8770, "America/Recife"),
    city("Porto Alegre", "RS", -30.0346, -51.2177, SP),
    city("Belém", "PA", -1.4558, -48.4902, "America/Belem"),
    city("Goiânia", "GO", -16.6869, -49.2648, SP),
    city("São Luís", "MA", -2.5391, -44.2829, "America/Fortaleza"),
    city("Maceió", "AL", -9.6498, -35.7089, "America/Maceio"),
    city("Campo Grande", "MS", -20.4697, -54.6201, "America/Campo_Grande"),
    city("Teresina", "PI", -5.0892, -42.8016, "America/Fortaleza"),
    city("Natal", "RN", -5.7945, -35.2120, "America/Fortaleza"),
    city("Cuiabá", "MT", -15.6014, -56.0979, "America/Cuiaba"),
    city("João Pessoa", "PB", -7.1195, -34.8450, "America/Fortaleza"),
    city("Aracaju", "SE", -10.9472, -37.0731, "America/Maceio"),
    city("Florianópolis", "SC", -27.5945, -48.5477, SP),
    city("Porto Velho", "RO", -8.7619, -63.9039, "America/Porto_Velho"),
    city("Macapá", "AP", 0.0356, -51.0705, "America/Belem"),
    city("Rio Branco", "AC", -9.9754, -67.8249, "America/Rio_Branco"),
    city("Vitória", "ES", -20.3222, -40.3381, SP),
    city("Boa Vista", "RR", 2.8235, -60.6758, "America/Boa_Vista"),
    city("Palmas", "TO", -10.2491, -48.3243, "America/Araguaina"),
];

pub static STATES: [State; 27] = [
    State { name: "Acre", abbreviation: "AC" },
    State { name: "Alagoas", abbreviation: "AL" },
    State { name: "Amapá", abbreviation: "AP" },
    State { name: "Amazonas", abbreviation: "AM" },
    State { name: "Bahia", abbreviation: "BA" },
    State { name: "Ceará", abbreviation: "CE" },
    State { name: "Distrito Federal", abbreviation: "DF" },
    State { name: "Espírito Santo", abbreviation: "ES" },
    State { name: "Goiás", abbreviation: "GO" },
    State { name: "Maranhão", abbreviation: "MA" },
    State { name: "Mato Grosso", abbreviation: "MT" },
    State { name: "Mato Grosso do Sul", abbreviation: "MS" },
    State { name: "Minas Gerais", abbreviation: "MG" },
    State { name: "Pará", abbreviation: "PA" },
    State { name: "Paraíba", abbreviation: "PB" },
    State { name: "Paraná", abbreviation: "PR" },
    State { name: "Pernambuco", abbreviation: "PE" },
    State { name: "Piauí", abbreviation: "PI" },
    State { name: "Rio de Janeiro", abbreviation: "RJ" },
    State { name: "Rio Grande do Norte", abbreviation: "RN" },
    State { name: "Rio Grande do Sul", abbreviation: "RS" },
    State { name: "Rondônia", abbreviation: "RO" },
    State { name: "Roraima", abbreviation: "RR" },
    State { name: "Santa Catarina", abbreviation: "SC" },
    State { name: "São Paulo", abbreviation: "SP" },
    State { name: "Sergipe", abbreviation: "SE" },
    State { name: "Tocantins", abbreviation: "TO" },
];

/// Every city, alphabetical by folded name.
pub fn all() -> Vec<&'static City> {
    let mut cities: Vec<&'static City> = CITIES.iter().collect();
    cities.sort_by_key(|c| fold(c.name));
    cities
}

/// Cities whose `"Name, ST"` label contains `term`, ignoring case and accents.
/// An empty term matches everything.
pub fn search(term: &str) -> Vec<&'static City> {
    let needle = fold(term);
    all()
        .into_iter()
        .filter(|c| fold(&c.label()).contains(&needle))
        .collect()
}

pub fn find_city(state: &str, city_name: &str) -> Option<&'static City> {
    let state = state.trim();
    let name = fold(city_name);
    CITIES
        .iter()
        .find(|c| c.state.eq_ignore_ascii_case(state) && fold(c.name) == name)
}

pub fn cities_by_state(state: &str) -> Vec<&'static City> {
    let state = state.trim();
    all()
        .into_iter()
        .filter(|c| c.state.eq_ignore_ascii_case(state))
        .collect()
}

/// Resolves a picker label such as `"Recife, PE"`. A bare name is accepted
/// when it is unambiguous.
pub fn parse_label(label: &str) -> Option<&'static City> {
    match label.rsplit_once(',') {
        Some((name, state)) => find_city(state, name),
        None => {
            let name = fold(label);
            let mut matches = CITIES.iter().filter(|c| fold(c.name) == name);
            match (matches.next(), matches.next()) {
                (Some(city), None) => Some(city),
                _ => None,
            }
        }
    }
}

pub fn states() -> &'static [State] {
    &STATES
}
