// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

// Every field is optional so a missing one can be reported by name
// instead of as a generic decode failure.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CurrentWeatherResponse {
  pub main: Option<MainReadings>,
  #[serde(default)]
  pub weather: Vec<Condition>,
  pub rain: Option<Rain>,
  pub cod: Option<serde_json::Value>,
  pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MainReadings {
  pub temp: Option<f64>,
  pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Condition {
  pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Rain {
  #[serde(rename = "1h")]
  pub one_hour: Option<f64>,
}

impl CurrentWeatherResponse {
  /// The provider reports `cod` as a number or a string depending on the endpoint.
  pub fn status_code(&self) -> Option<u16> {
    match self.cod.as_ref()? {
      serde_json::Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
      serde_json::Value::String(s) => s.trim().parse().ok(),
      _ => None,
    }
  }
}
