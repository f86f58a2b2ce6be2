// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use advice::AdviceSections;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::{info, instrument};

/// Writes the labelled download text, replacing any earlier file in one step.
#[instrument(skip(sections))]
pub fn save_advice(path: &Path, sections: &AdviceSections) -> Result<()> {
  write_atomically(path, &sections.to_download_text())?;
  info!("Advice saved to {}", path.display());
  Ok(())
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
  let temp_path = path.with_extension("tmp");
  fs::write(&temp_path, content).context("Failed to write temporary file")?;
  fs::rename(&temp_path, path).context("Failed to save advice file")?;
  Ok(())
}
