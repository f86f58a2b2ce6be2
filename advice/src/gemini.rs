// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::client::{Generation, TextGenerator};
use async_trait::async_trait;
use error::Error;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiConfig {
  pub(crate) api_key: String,
  pub(crate) base_url: String,
  pub(crate) model: String,
}

impl GeminiConfig {
  pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(Error::MissingApiKey("GEMINI_API_KEY"));
    }

    Ok(Self {
      api_key,
      base_url: API_BASE_URL.to_string(),
      model: DEFAULT_MODEL.to_string(),
    })
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }
}

impl std::fmt::Debug for GeminiConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GeminiConfig")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .finish()
  }
}

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
  contents: [Content<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Content<'a> {
  role: &'static str,
  parts: [Part<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Part<'a> {
  text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
  content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
  text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
  error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
  message: String,
}

impl GenerateResponse {
  /// Text of the first candidate, `None` when there is nothing to read.
  fn text(&self) -> Option<String> {
    let parts = &self.candidates.first()?.content.as_ref()?.parts;
    let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    if texts.is_empty() {
      None
    } else {
      Some(texts.concat())
    }
  }
}

/// Single-turn `generateContent` client for the Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiClient {
  config: GeminiConfig,
  client: Client,
}

impl GeminiClient {
  /// Uses the HTTP client's default timeouts.
  pub fn new(config: GeminiConfig) -> Result<Self, Error> {
    let mut api_key = header::HeaderValue::from_str(&config.api_key)
      .map_err(|e| Error::ConfigError(format!("Invalid Gemini API key: {}", e)))?;
    api_key.set_sensitive(true);

    let mut headers = header::HeaderMap::new();
    headers.insert(API_KEY_HEADER, api_key);

    let client = Client::builder().default_headers(headers).build()?;
    Ok(Self { config, client })
  }

  fn endpoint(&self) -> String {
    format!(
      "{}/models/{}:generateContent",
      self.config.base_url.trim_end_matches('/'),
      self.config.model
    )
  }
}

#[async_trait]
impl TextGenerator for GeminiClient {
  #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
  async fn generate(&self, prompt: &str) -> Result<Generation, Error> {
    let request = GenerateRequest {
      contents: [Content {
        role: "user",
        parts: [Part { text: prompt }],
      }],
    };

    let response = self
      .client
      .post(self.endpoint())
      .json(&request)
      .send()
      .await
      .map_err(Error::advice)?;

    let status = response.status();
    let raw = response.text().await.map_err(Error::advice)?;

    if !status.is_success() {
      let message = serde_json::from_str::<ErrorEnvelope>(&raw)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| raw.clone());
      error!("Gemini request failed with status: {}", status);
      return Err(Error::advice(format!("HTTP {}: {}", status, message)));
    }

    let parsed: GenerateResponse = serde_json::from_str(&raw)
      .map_err(|e| Error::advice(format!("Failed to parse Gemini response: {}", e)))?;

    let text = parsed.text();
    debug!("Gemini reply has text: {}", text.is_some());
    Ok(Generation { text, raw })
  }
}
