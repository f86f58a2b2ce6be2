// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_ADVICE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_EXPORT_FILE: &str = "watering_advice.txt";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub weather: WeatherSettings,
  pub advice: AdviceSettings,
  pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
  pub base_url: String,
  pub units: String,
  pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdviceSettings {
  pub base_url: String,
  pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
  pub file_name: String,
}

impl Default for WeatherSettings {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_WEATHER_URL.into(),
      units: "metric".into(),
      timeout_secs: 10,
    }
  }
}

impl Default for AdviceSettings {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_ADVICE_URL.into(),
      model: DEFAULT_MODEL.into(),
    }
  }
}

impl Default for ExportSettings {
  fn default() -> Self {
    Self {
      file_name: DEFAULT_EXPORT_FILE.into(),
    }
  }
}

impl WeatherSettings {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Reads the settings file if there is one, otherwise falls back to defaults.
  pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      tracing::debug!("No settings file at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    Self::from_file(path)
  }
}
