// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::presenter::Presenter;
use advice::{
  AdviceClient, AdviceOutcome, AdviceParser, AdviceRequest, AdviceSections, TextGenerator,
};
use error::Error;
use std::io;
use tracing::{info, instrument, warn};
use weather::WeatherProvider;

/// Runs one submission: weather lookup, advice request, parsing, rendering.
pub struct Advisor<W: WeatherProvider, G: TextGenerator> {
  weather: W,
  advice: AdviceClient<G>,
  parser: AdviceParser,
}

impl<W: WeatherProvider, G: TextGenerator> Advisor<W, G> {
  pub fn new(weather: W, generator: G) -> Result<Self, Error> {
    Ok(Self {
      weather,
      advice: AdviceClient::new(generator),
      parser: AdviceParser::new()?,
    })
  }

  /// Pipeline failures are reported through the presenter. Only a failure to
  /// write to the presenter itself is returned.
  #[instrument(skip(self, presenter))]
  pub async fn run<P: Presenter>(
    &self,
    crop: &str,
    city: &str,
    presenter: &mut P,
  ) -> io::Result<Option<AdviceSections>> {
    match self.advise(crop, city, presenter).await {
      Ok(sections) => Ok(sections),
      Err(Error::IoError(e)) => Err(e),
      Err(e) => {
        warn!("Submission failed: {}", e);
        presenter.error(&e)?;
        Ok(None)
      }
    }
  }

  async fn advise<P: Presenter>(
    &self,
    crop: &str,
    city: &str,
    presenter: &mut P,
  ) -> Result<Option<AdviceSections>, Error> {
    let (crop, city) = (crop.trim(), city.trim());
    if crop.is_empty() || city.is_empty() {
      return Err(Error::ValidationError(
        "crop type and city must not be empty".into(),
      ));
    }

    let reading = self.weather.fetch_weather(city).await?;
    presenter.weather(city, &reading)?;

    let request = AdviceRequest::new(crop, city, reading);
    let text = match self.advice.request_advice(&request).await? {
      AdviceOutcome::Degraded(raw) if raw.trim().is_empty() => {
        presenter.no_advice()?;
        return Ok(None);
      }
      outcome => {
        info!("Advice source: {:?}", outcome.source());
        outcome.text().to_string()
      }
    };

    let sections = self.parser.parse(&text);
    presenter.advice(&sections)?;
    Ok(Some(sections))
  }
}
