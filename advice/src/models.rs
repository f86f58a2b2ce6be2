// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
  IrrigationNeeded,
  Reasoning,
  SuggestedFrequency,
  Precautions,
}

impl Section {
  pub const ALL: [Section; 4] = [
    Section::IrrigationNeeded,
    Section::Reasoning,
    Section::SuggestedFrequency,
    Section::Precautions,
  ];

  /// Name used inside the `[NAME]...[/NAME]` markers.
  pub fn marker(self) -> &'static str {
    match self {
      Section::IrrigationNeeded => "IRRIGATION_NEEDED",
      Section::Reasoning => "REASONING",
      Section::SuggestedFrequency => "SUGGESTED_FREQUENCY",
      Section::Precautions => "PRECAUTIONS",
    }
  }

  pub fn open_tag(self) -> String {
    format!("[{}]", self.marker())
  }

  pub fn close_tag(self) -> String {
    format!("[/{}]", self.marker())
  }

  pub fn default_text(self) -> &'static str {
    match self {
      Section::IrrigationNeeded => "No clear answer",
      Section::Reasoning => "No reasoning provided.",
      Section::SuggestedFrequency => "No frequency advice provided.",
      Section::Precautions => "No precautions provided.",
    }
  }

  /// Heading shown to the farmer and written into the download.
  pub fn label(self) -> &'static str {
    match self {
      Section::IrrigationNeeded => "Should you water today?",
      Section::Reasoning => "Why this advice?",
      Section::SuggestedFrequency => "How often to water?",
      Section::Precautions => "Things to watch out for",
    }
  }

  /// What the model is told to put between the markers.
  pub fn instruction(self) -> &'static str {
    match self {
      Section::IrrigationNeeded => "Yes or No",
      Section::Reasoning => "Short, clear explanation",
      Section::SuggestedFrequency => "How often to water",
      Section::Precautions => "Simple, practical precautions",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceSections {
  pub irrigation_needed: String,
  pub reasoning: String,
  pub suggested_frequency: String,
  pub precautions: String,
}

impl Default for AdviceSections {
  fn default() -> Self {
    Self::from_fn(|_| None)
  }
}

impl AdviceSections {
  /// Builds the sections from per-section lookups, defaulting what is missing.
  pub fn from_fn(mut lookup: impl FnMut(Section) -> Option<String>) -> Self {
    let mut value = |section: Section| {
      lookup(section).unwrap_or_else(|| section.default_text().to_string())
    };

    Self {
      irrigation_needed: value(Section::IrrigationNeeded),
      reasoning: value(Section::Reasoning),
      suggested_frequency: value(Section::SuggestedFrequency),
      precautions: value(Section::Precautions),
    }
  }

  pub fn get(&self, section: Section) -> &str {
    match section {
      Section::IrrigationNeeded => &self.irrigation_needed,
      Section::Reasoning => &self.reasoning,
      Section::SuggestedFrequency => &self.suggested_frequency,
      Section::Precautions => &self.precautions,
    }
  }

  pub fn irrigation_recommended(&self) -> bool {
    self.irrigation_needed.trim().eq_ignore_ascii_case("yes")
  }

  /// Re-wraps every section in its markers, the same shape the model is asked for.
  pub fn to_marked_text(&self) -> String {
    Section::ALL
      .iter()
      .map(|&section| {
        format!(
          "{}\n{}\n{}",
          section.open_tag(),
          self.get(section),
          section.close_tag()
        )
      })
      .collect::<Vec<_>>()
      .join("\n")
  }

  /// Plain-text export: label, value, blank line between sections.
  pub fn to_download_text(&self) -> String {
    Section::ALL
      .iter()
      .map(|&section| format!("{}\n{}", section.label(), self.get(section)))
      .collect::<Vec<_>>()
      .join("\n\n")
  }
}
