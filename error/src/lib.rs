// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::path::PathBuf;
use thiserror::Error as ThisError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Validation error: {0}")]
  ValidationError(String),
  #[error("City not found: {0}")]
  CityNotFound(String),
  #[error("Network or API error: {0}")]
  NetworkError(#[from] reqwest::Error),
  #[error("Malformed weather response: {0}")]
  MalformedResponse(String),
  #[error("Advice generation failed: {0}")]
  AdviceGenerationFailed(#[source] BoxError),
  #[error("Missing API key: {0}")]
  MissingApiKey(&'static str),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("Path not found: {}", .0.display())]
  PathNotFound(PathBuf),
  #[error("Regex error: {0}")]
  RegexError(#[from] regex::Error),
}

impl Error {
  pub fn advice(cause: impl Into<BoxError>) -> Self {
    Self::AdviceGenerationFailed(cause.into())
  }
}
