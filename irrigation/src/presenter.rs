// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use advice::{AdviceSections, Section};
use error::Error;
use std::io::{self, Write};
use weather::WeatherReading;

pub const NO_ADVICE: &str = "No advice was returned. Please try again.";

/// Rendering layer fed by the pipeline. Only sees normalized data.
pub trait Presenter {
  fn weather(&mut self, city: &str, reading: &WeatherReading) -> io::Result<()>;
  fn advice(&mut self, sections: &AdviceSections) -> io::Result<()>;
  fn no_advice(&mut self) -> io::Result<()>;
  fn error(&mut self, error: &Error) -> io::Result<()>;
}

pub struct TerminalPresenter<W: Write> {
  out: W,
}

impl<W: Write> TerminalPresenter<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  #[cfg(test)]
  pub fn into_inner(self) -> W {
    self.out
  }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
  fn weather(&mut self, city: &str, reading: &WeatherReading) -> io::Result<()> {
    writeln!(self.out, "{}", weather_line(city, reading))?;
    writeln!(self.out, "Here's what the weather means for your crops today:")?;
    writeln!(self.out)
  }

  fn advice(&mut self, sections: &AdviceSections) -> io::Result<()> {
    writeln!(self.out, "Your Watering Advice")?;
    writeln!(self.out, "====================")?;
    for section in Section::ALL {
      writeln!(self.out)?;
      writeln!(self.out, "{}", section.label())?;
      match section {
        Section::IrrigationNeeded => {
          let flag = if sections.irrigation_recommended() { "[GO]" } else { "[HOLD]" };
          writeln!(self.out, "  {} {}", flag, sections.get(section))?;
        }
        _ => {
          for line in sections.get(section).lines() {
            writeln!(self.out, "  {}", line)?;
          }
        }
      }
    }
    self.out.flush()
  }

  fn no_advice(&mut self) -> io::Result<()> {
    writeln!(self.out, "{}", NO_ADVICE)
  }

  fn error(&mut self, error: &Error) -> io::Result<()> {
    writeln!(self.out, "! {}", user_message(error))
  }
}

pub fn weather_line(city: &str, reading: &WeatherReading) -> String {
  format!(
    "Weather in {}: {}°C, {}% humidity, {} mm rain, {}",
    title_case(city),
    reading.temperature,
    reading.humidity,
    reading.precipitation_last_hour,
    capitalize(&reading.description)
  )
}

/// Message shown to the user for a failed submission.
pub fn user_message(error: &Error) -> String {
  match error {
    Error::ValidationError(_) => "Both crop type and city are required.".to_string(),
    Error::CityNotFound(_) => "City not found. Please check the city name.".to_string(),
    Error::NetworkError(cause) => format!("Network or API error: {}", cause),
    Error::MalformedResponse(detail) => format!("Unexpected weather data: {}", detail),
    Error::AdviceGenerationFailed(_) => {
      "Sorry, there was an error getting advice. Please try again.".to_string()
    }
    Error::MissingApiKey(var) => {
      format!("{} is not set. Add it to your .env file and restart the app.", var)
    }
    other => other.to_string(),
  }
}

/// Upper-cases the first letter of every word, lower-cases the rest.
fn title_case(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut word_start = true;
  for c in text.chars() {
    if c.is_alphabetic() {
      if word_start {
        out.extend(c.to_uppercase());
      } else {
        out.extend(c.to_lowercase());
      }
      word_start = false;
    } else {
      out.push(c);
      word_start = true;
    }
  }
  out
}

fn capitalize(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    None => String::new(),
  }
}
