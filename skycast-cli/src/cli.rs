use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use skycast_core::{Config, FileStore, HistoryStore, WeatherApp, provider_from_config};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "City weather lookup with a recent-search history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and a default city.
    Configure,

    /// Show current weather for a city (prompts when none is given).
    Show {
        /// City name, e.g. "Pokhara".
        city: Option<String>,
    },

    /// List recent lookups, most recent first.
    History,

    /// Remove one city from the recent lookups.
    Forget {
        /// City name exactly as `history` lists it.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(city).await,
            Some(Command::History) => history(),
            Some(Command::Forget { city }) => forget(&city),
            // Bare invocation: the dashboard view, default city plus history.
            None => dashboard().await,
        }
    }
}

fn open_app(config: &Config) -> Result<WeatherApp<FileStore>> {
    let provider = provider_from_config(config)?;
    Ok(WeatherApp::new(provider, FileStore::open_default()?))
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("OpenWeather API key:")
        .with_help_message("Create one for free at https://openweathermap.org/api")
        .prompt()?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let default_city = inquire::Text::new("Default city:")
        .with_default(config.startup_city())
        .prompt()?;

    config.api_key = Some(api_key.trim().to_string());
    config.default_city = Some(default_city.trim().to_string()).filter(|c| !c.is_empty());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>) -> Result<()> {
    let city = match city {
        Some(city) => city,
        None => inquire::Text::new("City:").prompt()?,
    };

    let config = Config::load()?;
    let mut app = open_app(&config)?;

    let reading = app.lookup(&city).await?;
    output::print_reading(&reading);

    Ok(())
}

/// The widget's initial render: default city's weather, then the history
/// panel. A failed lookup is reported but still leaves the history visible.
async fn dashboard() -> Result<()> {
    let config = Config::load()?;
    let mut app = open_app(&config)?;

    match app.lookup(config.startup_city()).await {
        Ok(reading) => output::print_reading(&reading),
        Err(e) => eprintln!("{e}"),
    }

    println!();
    output::print_history(app.recent());

    Ok(())
}

fn history() -> Result<()> {
    let store = HistoryStore::load(FileStore::open_default()?);
    output::print_history(store.entries());
    Ok(())
}

fn forget(city: &str) -> Result<()> {
    let mut store = HistoryStore::load(FileStore::open_default()?);

    let known = store.entries().iter().any(|e| e.city == city);
    store.delete(city)?;

    if known {
        println!("Removed {city} from recent searches.");
    } else {
        println!("{city} is not in the recent searches.");
    }
    Ok(())
}
