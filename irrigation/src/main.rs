// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use advice::{GeminiClient, GeminiConfig};
use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, Secrets};
use error::Error;
use std::io;
use tracing::debug;
use weather::{WeatherClient, WeatherConfig};

mod cli;
mod export;
mod presenter;
mod runner;

use cli::Cli;
use presenter::TerminalPresenter;
use runner::Advisor;

const MISSING_ADVICE_KEY: &str =
  "AI API key is missing or revoked. Add a new key to your .env file and restart the app.";

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_writer(io::stderr).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging();

  match config::dotenv::load(&cli.env_file) {
    Ok(count) => debug!("Loaded {} variables from {}", count, cli.env_file.display()),
    Err(Error::PathNotFound(path)) => debug!("No env file at {}", path.display()),
    Err(e) => return Err(e).context("Failed to load env file"),
  }

  let settings = Config::load_or_default(&cli.config)?;
  let secrets = Secrets::from_env();
  debug!("Resolved secrets: {:?}", secrets);

  let advice_key = secrets.advice_api_key.clone().context(MISSING_ADVICE_KEY)?;
  let generator = GeminiClient::new(
    GeminiConfig::new(advice_key)
      .context(MISSING_ADVICE_KEY)?
      .with_base_url(&settings.advice.base_url)
      .with_model(&settings.advice.model),
  )?;

  let weather = WeatherClient::new(
    WeatherConfig::new(secrets.weather_api_key.clone())
      .with_base_url(&settings.weather.base_url)
      .with_units(&settings.weather.units)
      .with_timeout(settings.weather.timeout()),
  )?;

  let advisor = Advisor::new(weather, generator)?;
  let submission = cli.submission()?;

  let sections = {
    let mut presenter = TerminalPresenter::new(io::stdout().lock());
    advisor
      .run(&submission.crop, &submission.city, &mut presenter)
      .await
      .context("Failed to write to the terminal")?
  };

  if let (Some(sections), Some(path)) = (sections, cli.save_path(&settings.export.file_name)) {
    export::save_advice(&path, &sections)?;
    println!("\nAdvice saved to {}", path.display());
  }

  Ok(())
}
