// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::CurrentWeatherResponse;
use error::Error;
use serde::Serialize;

/// Normalized current conditions for one city, in metric units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
  pub temperature: f64,
  pub humidity: f64,
  pub precipitation_last_hour: f64,
  pub description: String,
}

impl WeatherReading {
  pub(crate) fn from_response(response: CurrentWeatherResponse) -> Result<Self, Error> {
    let main = response.main.ok_or_else(|| missing("main"))?;
    let temperature = main.temp.ok_or_else(|| missing("main.temp"))?;
    let humidity = main.humidity.ok_or_else(|| missing("main.humidity"))?;

    let description = response
      .weather
      .into_iter()
      .next()
      .and_then(|condition| condition.description)
      .ok_or_else(|| missing("weather[0].description"))?;

    let precipitation_last_hour = response
      .rain
      .and_then(|rain| rain.one_hour)
      .unwrap_or(0.0);

    Ok(Self {
      temperature,
      humidity,
      precipitation_last_hour,
      description,
    })
  }
}

fn missing(field: &str) -> Error {
  Error::MalformedResponse(format!("missing field `{}`", field))
}
