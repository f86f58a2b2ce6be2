// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::env;
use std::fmt;

pub const WEATHER_API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
pub const ADVICE_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// API keys resolved once at startup and handed to each client.
#[derive(Clone, Default)]
pub struct Secrets {
  pub weather_api_key: Option<String>,
  pub advice_api_key: Option<String>,
}

impl Secrets {
  pub fn from_env() -> Self {
    Self::from_lookup(|name| env::var(name).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let read = |name: &str| {
      lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    };

    Self {
      weather_api_key: read(WEATHER_API_KEY_VAR),
      advice_api_key: read(ADVICE_API_KEY_VAR),
    }
  }
}

impl fmt::Debug for Secrets {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mask = |key: &Option<String>| if key.is_some() { "<set>" } else { "<missing>" };
    f.debug_struct("Secrets")
      .field("weather_api_key", &mask(&self.weather_api_key))
      .field("advice_api_key", &mask(&self.advice_api_key))
      .finish()
  }
}
