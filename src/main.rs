use std::env;
use std::error::Error;
use std::path::PathBuf;

use aztro_chart::{
    generate_chart, locations, BirthRequest, ChartConfig, ChartError, PositionCalculator,
    ValidationErrors,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "aztro_chart", about = "Mean-motion natal chart calculator")]
struct Cli {
    /// Path to an aztro_chart.toml (default: ./aztro_chart.toml, then ./config/)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Birth chart with interpretations
    Chart {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Birth time, HH:MM
        #[arg(long)]
        time: String,
        /// City label, e.g. "Recife, PE"
        #[arg(long, default_value = "São Paulo, SP")]
        city: String,
        /// UTC offset of the birth time, e.g. -03:00
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
        /// Print the JSON payload instead of text
        #[arg(long)]
        json: bool,
    },
    /// Raw positions at an instant
    Positions {
        /// RFC 3339 instant (default: now)
        #[arg(long)]
        at: Option<String>,
        /// Include Uranus, Neptune and Pluto
        #[arg(long)]
        extended: bool,
        #[arg(long)]
        json: bool,
    },
    /// List the city catalog
    Cities {
        /// Substring of the "Name, ST" label
        #[arg(long)]
        search: Option<String>,
        /// Two-letter state abbreviation
        #[arg(long)]
        state: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ChartConfig::from_file(path)?,
        None => ChartConfig::load_or_default(),
    };

    match cli.command {
        Commands::Chart {
            date,
            time,
            city,
            offset,
            json,
        } => {
            let mut request = BirthRequest::new(date, time).with_city(city);
            request.utc_offset = offset;

            let response = match generate_chart(&request, Utc::now(), &config) {
                Ok(response) => response,
                Err(ChartError::Validation(errors)) => {
                    print_validation_errors(&errors, &config);
                    return Err(errors.into());
                }
                Err(e) => return Err(e.into()),
            };
            info!(
                "chart for {} with {} bodies",
                response.birth_chart.timestamp.to_rfc3339(),
                response.birth_chart.planets.len()
            );

            if json {
                println!("{}", response.to_json()?);
            } else {
                print!("{}", response.birth_chart.to_text());
            }
        }

        Commands::Positions { at, extended, json } => {
            let instant = match at {
                Some(at) => DateTime::parse_from_rfc3339(&at)?.with_timezone(&Utc),
                None => Utc::now(),
            };
            let calculator = if extended {
                PositionCalculator::extended()
            } else {
                config.calculator()
            };
            let positions = calculator.compute_positions(instant);

            if json {
                println!("{}", serde_json::to_string_pretty(&positions)?);
            } else {
                println!("Positions at {}", instant.to_rfc3339());
                for position in &positions {
                    println!(
                        "{:<8} {:>6.2}°  {:<11} {:>5.2}°",
                        position.body_name, position.longitude, position.sign.name(), position.sign_degree
                    );
                }
            }
        }

        Commands::Cities { search, state } => {
            let mut cities = match &state {
                Some(state) => locations::cities_by_state(state),
                None => locations::all(),
            };
            if let Some(term) = &search {
                let hits = locations::search(term);
                cities.retain(|c| hits.contains(c));
            }
            for city in cities {
                println!(
                    "{:<24} {:>9.4} {:>9.4}  {}",
                    city.label(),
                    city.latitude,
                    city.longitude,
                    city.timezone
                );
            }
        }
    }

    Ok(())
}

fn print_validation_errors(errors: &ValidationErrors, config: &ChartConfig) {
    for message in errors.messages(config.chart.language) {
        eprintln!("{message}");
    }
}
