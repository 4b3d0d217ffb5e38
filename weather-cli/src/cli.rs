use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Text, validator::Validation};
use tracing::debug;
use weather_core::{Config, HttpProvider, WeatherPage, get_weather};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup client")]
pub struct Cli {
    /// Log requests and responses to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather service endpoint in the config file.
    Configure,

    /// Show weather for a pair of coordinates.
    Show {
        /// Latitude; prompted for when absent.
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<String>,

        /// Longitude; prompted for when absent.
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<String>,

        /// Weather service base URL, overriding the config file.
        #[arg(long, env = "WEATHER_ENDPOINT")]
        endpoint: Option<String>,
    },

    /// Check that the weather service is up.
    Health {
        /// Weather service base URL, overriding the config file.
        #[arg(long, env = "WEATHER_ENDPOINT")]
        endpoint: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lat, lon, endpoint } => {
                let latitude = match lat {
                    Some(lat) => lat,
                    None => prompt_coordinate("Latitude:")?,
                };
                let longitude = match lon {
                    Some(lon) => lon,
                    None => prompt_coordinate("Longitude:")?,
                };

                let provider = HttpProvider::new(resolve_endpoint(endpoint)?);
                let mut page = WeatherPage::with_inputs(latitude, longitude);

                let outcome = get_weather(&mut page, &provider).await;
                output::write_result(&mut std::io::stdout().lock(), &page)
                    .context("Failed to write weather output")?;

                outcome.map_err(anyhow::Error::from)
            }
            Command::Health { endpoint } => {
                let provider = HttpProvider::new(resolve_endpoint(endpoint)?);
                let health = provider.health().await?;

                match health.time {
                    Some(time) => println!(
                        "{} is {} (server time {})",
                        provider.endpoint(),
                        health.status,
                        time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
                    ),
                    None => println!("{} is {}", provider.endpoint(), health.status),
                }

                Ok(())
            }
        }
    }
}

/// Flag or env var first, then the config file, then the local default.
fn resolve_endpoint(endpoint: Option<String>) -> anyhow::Result<String> {
    if let Some(endpoint) = endpoint {
        return Ok(endpoint);
    }

    let cfg = Config::load()?;
    debug!(endpoint = cfg.endpoint(), "using configured endpoint");
    Ok(cfg.endpoint().to_string())
}

fn prompt_coordinate(label: &str) -> anyhow::Result<String> {
    Text::new(label)
        .prompt()
        .with_context(|| format!("Failed to read {}", label.trim_end_matches(':').to_lowercase()))
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let endpoint = Text::new("Weather service endpoint:")
        .with_default(cfg.endpoint())
        .with_validator(|input: &str| {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("Endpoint must start with http:// or https://".into()))
            }
        })
        .prompt()
        .context("Failed to read endpoint")?;

    cfg.set_endpoint(endpoint.trim());
    let path = cfg.save()?;

    println!("Saved endpoint {} to {}", cfg.endpoint(), path.display());
    Ok(())
}
