// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::{API_BASE_URL, DEFAULT_UNITS, REQUEST_TIMEOUT};
use std::time::Duration;

#[derive(Clone)]
pub struct WeatherConfig {
  pub(crate) api_key: Option<String>,
  pub(crate) base_url: String,
  pub(crate) units: String,
  pub(crate) timeout: Duration,
}

impl WeatherConfig {
  /// A missing key is accepted here; lookups fail with `MissingApiKey` instead.
  pub fn new(api_key: Option<String>) -> Self {
    Self {
      api_key: api_key.filter(|key| !key.trim().is_empty()),
      base_url: API_BASE_URL.to_string(),
      units: DEFAULT_UNITS.to_string(),
      timeout: REQUEST_TIMEOUT,
    }
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_units(mut self, units: impl Into<String>) -> Self {
    self.units = units.into();
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn has_api_key(&self) -> bool {
    self.api_key.is_some()
  }
}

impl std::fmt::Debug for WeatherConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WeatherConfig")
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("base_url", &self.base_url)
      .field("units", &self.units)
      .field("timeout", &self.timeout)
      .finish()
  }
}
