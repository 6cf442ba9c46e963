use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use meteo_core::{
    Config, Coordinates, Forecast, Place, ReqwestTransport, fetch_forecast, fetch_places,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Place search and forecasts from Open-Meteo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for places matching a name.
    Search {
        /// Place name, e.g. "Kitchener". Leading and trailing whitespace is
        /// trimmed before the query is sent.
        #[arg(value_parser = non_blank)]
        query: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the forecast for explicit coordinates.
    Forecast {
        #[arg(long, allow_negative_numbers = true, value_parser = parse_latitude)]
        latitude: f64,

        #[arg(long, allow_negative_numbers = true, value_parser = parse_longitude)]
        longitude: f64,

        /// Number of hourly rows to print.
        #[arg(long, default_value_t = 24)]
        hours: usize,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search for a place and show the forecast for the best match.
    Show {
        /// Place name, e.g. "Kitchener". Surrounding whitespace is trimmed.
        #[arg(value_parser = non_blank)]
        query: String,

        /// Choose among all matches interactively instead of taking the first.
        #[arg(long)]
        pick: bool,

        /// Number of hourly rows to print.
        #[arg(long, default_value_t = 24)]
        hours: usize,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the path of the configuration file.
    Path,
    /// Print the effective configuration as TOML.
    Show,
    /// Write a configuration file with the default settings.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Search { query, json } => {
                let (config, transport) = load()?;
                let places = fetch_places(&transport, &config.endpoints, &query)
                    .await
                    .with_context(|| format!("Place search for '{query}' failed"))?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&places)?);
                } else if places.is_empty() {
                    println!("No places found for '{query}'.");
                } else {
                    print!("{}", render::places(&places));
                }
            }
            Command::Forecast {
                latitude,
                longitude,
                hours,
                json,
            } => {
                let (config, transport) = load()?;
                let coords = Coordinates {
                    latitude,
                    longitude,
                };
                let forecast = forecast_for(&config, &transport, coords).await?;
                let label = render::coordinates(coords);
                emit(&label, &forecast, hours, json)?;
            }
            Command::Show {
                query,
                pick,
                hours,
                json,
            } => {
                let (config, transport) = load()?;
                let places = fetch_places(&transport, &config.endpoints, &query)
                    .await
                    .with_context(|| format!("Place search for '{query}' failed"))?;

                let place = choose(places, pick).ok_or_else(|| {
                    anyhow!(
                        "No places found for '{query}'.\n\
                         Hint: try a broader name, or use `meteo forecast --latitude .. --longitude ..`."
                    )
                })??;

                tracing::info!(name = %place.name, "showing forecast");
                let forecast = forecast_for(&config, &transport, Coordinates::from(&place)).await?;
                emit(&render::place(&place), &forecast, hours, json)?;
            }
            Command::Config { action } => match action {
                ConfigAction::Path => {
                    println!("{}", Config::config_file_path()?.display());
                }
                ConfigAction::Show => {
                    print!("{}", Config::load()?.to_toml()?);
                }
                ConfigAction::Init { force } => {
                    let path = Config::config_file_path()?;
                    if path.exists() && !force {
                        return Err(anyhow!(
                            "Config file already exists: {}\n\
                             Hint: pass `--force` to overwrite it with defaults.",
                            path.display()
                        ));
                    }

                    Config::default().save()?;
                    println!("Wrote {}", path.display());
                }
            },
        }

        Ok(())
    }
}

fn load() -> anyhow::Result<(Config, ReqwestTransport)> {
    let config = Config::load()?;
    let transport = config.transport()?;
    Ok((config, transport))
}

async fn forecast_for(
    config: &Config,
    transport: &ReqwestTransport,
    coords: Coordinates,
) -> anyhow::Result<Forecast> {
    fetch_forecast(transport, &config.endpoints, coords)
        .await
        .with_context(|| format!("Forecast for {} failed", render::coordinates(coords)))
}

fn emit(label: &str, forecast: &Forecast, hours: usize, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(forecast)?);
    } else {
        print!("{}", render::forecast(label, forecast, hours));
    }
    Ok(())
}

/// `None` when there is nothing to choose from.
fn choose(mut places: Vec<Place>, interactive: bool) -> Option<anyhow::Result<Place>> {
    if places.is_empty() {
        return None;
    }
    if !interactive || places.len() == 1 {
        return Some(Ok(places.swap_remove(0)));
    }

    let labels: Vec<String> = places.iter().map(render::place).collect();
    let picked = inquire::Select::new("Which place?", labels.clone())
        .prompt()
        .context("Place selection cancelled")
        .and_then(|label| {
            labels
                .iter()
                .position(|l| *l == label)
                .ok_or_else(|| anyhow!("Selected place not in list"))
        })
        .map(|idx| places.swap_remove(idx));

    Some(picked)
}

fn non_blank(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err("query must not be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    in_range(s, -90.0, 90.0)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    in_range(s, -180.0, 180.0)
}

fn in_range(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside {min}..={max}"))
    }
}
