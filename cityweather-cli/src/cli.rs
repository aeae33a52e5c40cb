use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use cityweather_core::{AppState, Config, Phase, SearchController};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::render::render_state;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optionally a custom endpoint).
    Configure {
        /// API key; prompted for when omitted.
        #[arg(long)]
        api_key: Option<String>,

        /// Override the current-conditions endpoint URL.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show current weather for a city.
    Show {
        /// City name.
        city: String,

        /// Print the full state as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up cities one after another until cancelled.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { api_key, base_url } => configure(api_key, base_url),
            Command::Show { city, json } => {
                let controller = SearchController::from_config(&Config::load()?);
                let state = controller.search(city).await;
                print_state(&state, json)?;

                match (state.phase, state.error_message) {
                    (Phase::Failed, Some(message)) => Err(anyhow!(message)),
                    _ => Ok(()),
                }
            }
            Command::Interactive => interactive(SearchController::from_config(&Config::load()?)).await,
        }
    }
}

fn configure(api_key: Option<String>, base_url: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };
    config.set_api_key(&api_key);

    if let Some(url) = base_url {
        config.base_url = Some(url);
    }

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn interactive(controller: SearchController) -> anyhow::Result<()> {
    println!("{}", render_state(&controller.state()));

    loop {
        let city = match Text::new("City:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("interactive session ended");
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        let state = controller.search(city).await;
        println!("{}\n", render_state(&state));
    }
}

fn print_state(state: &AppState, json: bool) -> anyhow::Result<()> {
    if json {
        let text =
            serde_json::to_string_pretty(state).context("Failed to serialize state to JSON")?;
        println!("{text}");
    } else if state.phase != Phase::Failed {
        // failures are reported through the returned error
        println!("{}", render_state(state));
    }

    Ok(())
}
