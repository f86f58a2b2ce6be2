// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::Section;
use weather::WeatherReading;

/// Facts sent to the model for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
  pub crop: String,
  pub city: String,
  pub weather: WeatherReading,
}

impl AdviceRequest {
  pub fn new(crop: impl Into<String>, city: impl Into<String>, weather: WeatherReading) -> Self {
    Self {
      crop: crop.into(),
      city: city.into(),
      weather,
    }
  }

  /// The prompt sent first. The parser depends on the marker names it lists.
  pub fn primary_prompt(&self) -> String {
    format!(
      "You are an agricultural assistant for beginner farmers. \
       Given the following data, provide a clear, structured irrigation recommendation.\n\
       Crop: {}\n\
       Location: {}\n\
       Temperature: {}°C\n\
       Humidity: {}%\n\
       Precipitation (last hour): {} mm\n\
       Weather: {}\n\
       \n\
       IMPORTANT: Your response MUST be in this exact format, with no extra text, \
       no introduction, and no summary.\n\
       {}\
       Do not add any other text. Do not add a greeting or closing.",
      self.crop,
      self.city,
      self.weather.temperature,
      self.weather.humidity,
      self.weather.precipitation_last_hour,
      self.weather.description,
      format_block(),
    )
  }

  /// Shorter, more directive retry used once when the first answer is empty.
  pub fn fallback_prompt(&self) -> String {
    format!(
      "You must answer in this format, with no extra text.\n\
       {}\
       Crop: {}\n\
       Location: {}\n\
       Temperature: {}°C\n\
       Humidity: {}%\n\
       Precipitation: {} mm\n\
       Weather: {}\n",
      format_block(),
      self.crop,
      self.city,
      self.weather.temperature,
      self.weather.humidity,
      self.weather.precipitation_last_hour,
      self.weather.description,
    )
  }
}

fn format_block() -> String {
  Section::ALL
    .iter()
    .map(|&section| {
      format!(
        "{}\n{}\n{}\n",
        section.open_tag(),
        section.instruction(),
        section.close_tag()
      )
    })
    .collect()
}
