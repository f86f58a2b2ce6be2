// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::API_KEY_VAR,
  models::{api::CurrentWeatherResponse, weather::WeatherReading},
};
use async_trait::async_trait;
use error::Error;
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, Error>;
}

/// OpenWeatherMap current-weather client.
pub struct WeatherClient {
  config: WeatherConfig,
  client: reqwest::Client,
}

impl WeatherClient {
  pub fn new(config: WeatherConfig) -> Result<Self, Error> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()?;

    Ok(Self { config, client })
  }

  fn build_api_url(&self, city: &str, api_key: &str) -> Result<Url, Error> {
    Url::parse_with_params(
      &self.config.base_url,
      &[
        ("q", city),
        ("appid", api_key),
        ("units", self.config.units.as_str()),
      ],
    )
    .map_err(|e| Error::ConfigError(format!("Failed to build weather API URL: {}", e)))
  }
}

/// The request URL carries `appid`, so it is dropped before the error leaves the client.
fn without_url(e: reqwest::Error) -> Error {
  Error::NetworkError(e.without_url())
}

#[async_trait]
impl WeatherProvider for WeatherClient {
  #[instrument(skip(self))]
  async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, Error> {
    let city = city.trim();
    if city.is_empty() {
      return Err(Error::ValidationError("City name cannot be empty".into()));
    }

    let api_key = self
      .config
      .api_key
      .as_deref()
      .ok_or(Error::MissingApiKey(API_KEY_VAR))?;

    let url = self.build_api_url(city, api_key)?;
    debug!("Requesting current weather for {}", city);
    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(without_url)?;

    if response.status() == StatusCode::NOT_FOUND {
      warn!("Weather provider does not know city {}", city);
      return Err(Error::CityNotFound(city.to_string()));
    }

    let body = response
      .error_for_status()
      .map_err(without_url)?
      .text()
      .await
      .map_err(without_url)?;
    let payload: CurrentWeatherResponse = serde_json::from_str(&body)
      .map_err(|e| Error::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if payload.status_code() == Some(404) {
      warn!(
        "Weather provider answered 404 in body for {}: {:?}",
        city, payload.message
      );
      return Err(Error::CityNotFound(city.to_string()));
    }

    let reading = WeatherReading::from_response(payload)?;
    info!(
      "Weather in {}: {}°C, {}% humidity, {} mm rain, {}",
      city,
      reading.temperature,
      reading.humidity,
      reading.precipitation_last_hour,
      reading.description
    );
    Ok(reading)
  }
}
