// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::prompt::AdviceRequest;
use async_trait::async_trait;
use error::Error;
use tracing::{info, instrument, warn};

/// One reply from a text-generation backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
  /// Extracted answer text, `None` when the backend returned no candidate.
  pub text: Option<String>,
  /// The reply as received, kept for the degraded path.
  pub raw: String,
}

impl Generation {
  pub fn usable_text(&self) -> Option<&str> {
    self
      .text
      .as_deref()
      .map(str::trim)
      .filter(|text| !text.is_empty())
  }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
  async fn generate(&self, prompt: &str) -> Result<Generation, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceSource {
  Primary,
  Fallback,
  Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceOutcome {
  /// The first prompt produced text.
  Generated(String),
  /// The first reply was empty; the fallback prompt produced text.
  Fallback(String),
  /// Both replies were empty; carries the raw second reply.
  Degraded(String),
}

impl AdviceOutcome {
  pub fn text(&self) -> &str {
    match self {
      Self::Generated(text) | Self::Fallback(text) | Self::Degraded(text) => text,
    }
  }

  pub fn source(&self) -> AdviceSource {
    match self {
      Self::Generated(_) => AdviceSource::Primary,
      Self::Fallback(_) => AdviceSource::Fallback,
      Self::Degraded(_) => AdviceSource::Degraded,
    }
  }
}

/// Two-attempt policy over a [`TextGenerator`]: primary prompt, then at most
/// one fallback prompt when the first reply carries no text. Errors are
/// returned as-is and never retried.
pub struct AdviceClient<G: TextGenerator> {
  generator: G,
}

impl<G: TextGenerator> AdviceClient<G> {
  pub fn new(generator: G) -> Self {
    Self { generator }
  }

  #[instrument(skip(self, request), fields(crop = %request.crop, city = %request.city))]
  pub async fn request_advice(&self, request: &AdviceRequest) -> Result<AdviceOutcome, Error> {
    let first = self.generator.generate(&request.primary_prompt()).await?;
    if let Some(text) = first.usable_text() {
      info!("Advice generated on first attempt");
      return Ok(AdviceOutcome::Generated(text.to_string()));
    }

    warn!("Empty reply to primary prompt, retrying once with fallback prompt");
    let second = self.generator.generate(&request.fallback_prompt()).await?;
    if let Some(text) = second.usable_text() {
      info!("Advice generated with fallback prompt");
      return Ok(AdviceOutcome::Fallback(text.to_string()));
    }

    warn!("Fallback reply was empty too, returning raw reply");
    Ok(AdviceOutcome::Degraded(second.raw))
  }
}
