// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use clap::Parser;
use inquire::Text;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
  name = "irrigation",
  version,
  about = "Watering advice for your crop based on today's weather"
)]
pub struct Cli {
  /// What you are growing, e.g. rice, wheat, maize. Asked for when omitted.
  #[arg(long)]
  pub crop: Option<String>,

  /// Where your crops are. Asked for when omitted.
  #[arg(long)]
  pub city: Option<String>,

  /// Settings file. Defaults are used when it does not exist.
  #[arg(long, value_name = "FILE", default_value = "irrigation.toml")]
  pub config: PathBuf,

  /// File with API keys in KEY=VALUE form.
  #[arg(long, value_name = "FILE", default_value = ".env")]
  pub env_file: PathBuf,

  /// Save the advice as plain text. Without a value the configured file name is used.
  #[arg(long, value_name = "FILE", num_args = 0..=1)]
  pub save: Option<Option<PathBuf>>,
}

/// Crop and city as entered. Validation happens in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
  pub crop: String,
  pub city: String,
}

impl Cli {
  pub fn submission(&self) -> Result<Submission> {
    let crop = match &self.crop {
      Some(crop) => crop.clone(),
      None => Text::new("What are you growing?")
        .with_placeholder("e.g. rice, wheat, maize")
        .prompt()
        .context("Failed to read crop type")?,
    };

    let city = match &self.city {
      Some(city) => city.clone(),
      None => Text::new("Where are your crops? (City)")
        .with_placeholder("e.g. Krakow")
        .prompt()
        .context("Failed to read city")?,
    };

    Ok(Submission { crop, city })
  }

  pub fn save_path(&self, default_file: &str) -> Option<PathBuf> {
    self
      .save
      .as_ref()
      .map(|path| path.clone().unwrap_or_else(|| PathBuf::from(default_file)))
  }
}
