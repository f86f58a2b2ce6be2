// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;
pub mod dotenv;
mod secrets;

pub use config::{
  AdviceSettings, Config, ExportSettings, WeatherSettings, DEFAULT_ADVICE_URL, DEFAULT_EXPORT_FILE,
  DEFAULT_MODEL, DEFAULT_WEATHER_URL,
};
pub use secrets::{Secrets, ADVICE_API_KEY_VAR, WEATHER_API_KEY_VAR};
