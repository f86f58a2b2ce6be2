// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod gemini;
pub mod models;
pub mod parser;
pub mod prompt;

pub use client::{AdviceClient, AdviceOutcome, AdviceSource, Generation, TextGenerator};
pub use gemini::{GeminiClient, GeminiConfig};
pub use models::{AdviceSections, Section};
pub use parser::AdviceParser;
pub use prompt::AdviceRequest;
