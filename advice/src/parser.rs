// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::{AdviceSections, Section};
use error::Error;
use regex::Regex;
use tracing::{debug, instrument};

/// Pulls the four `[NAME]...[/NAME]` sections out of a model reply.
#[derive(Debug, Clone)]
pub struct AdviceParser {
  patterns: Vec<(Section, Regex)>,
}

impl AdviceParser {
  pub fn new() -> Result<Self, Error> {
    let patterns = Section::ALL
      .iter()
      .map(|&section| {
        let pattern = format!(
          "(?s){}(.*?){}",
          regex::escape(&section.open_tag()),
          regex::escape(&section.close_tag())
        );
        Ok((section, Regex::new(&pattern)?))
      })
      .collect::<Result<Vec<_>, Error>>()?;

    Ok(Self { patterns })
  }

  /// Never fails: anything missing or blank falls back to the section default.
  #[instrument(skip(self, text), fields(len = text.len()))]
  pub fn parse(&self, text: &str) -> AdviceSections {
    AdviceSections::from_fn(|section| {
      let found = self.extract(section, text);
      if found.is_none() {
        debug!("Section {} missing or empty, using default", section.marker());
      }
      found
    })
  }

  fn extract(&self, section: Section, text: &str) -> Option<String> {
    let (_, re) = self.patterns.iter().find(|(s, _)| *s == section)?;
    re.captures(text)
      .and_then(|caps| caps.get(1))
      .map(|m| m.as_str().trim())
      .filter(|content| !content.is_empty())
      .map(str::to_string)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn parser() -> AdviceParser {
    AdviceParser::new().unwrap()
  }

  #[test]
  fn single_section_keeps_other_defaults() {
    let sections = parser().parse("[IRRIGATION_NEEDED]\nYes\n[/IRRIGATION_NEEDED]");
    assert_eq!(sections.irrigation_needed, "Yes");
    assert_eq!(sections.reasoning, "No reasoning provided.");
    assert_eq!(sections.suggested_frequency, "No frequency advice provided.");
    assert_eq!(sections.precautions, "No precautions provided.");
  }

  #[test]
  fn empty_input_yields_all_defaults() {
    assert_eq!(parser().parse(""), AdviceSections::default());
  }

  #[test]
  fn full_reply_with_surrounding_prose() {
    let reply = "Sure! Here is my advice.\n\
      [IRRIGATION_NEEDED]\nNo\n[/IRRIGATION_NEEDED]\n\
      [REASONING]\nIt rained 4 mm in the last hour\nand humidity is high.\n[/REASONING]\n\
      [SUGGESTED_FREQUENCY]\nEvery 2-3 days\n[/SUGGESTED_FREQUENCY]\n\
      [PRECAUTIONS]\nCheck drainage.\n[/PRECAUTIONS]\n\
      Good luck with your harvest!";

    let sections = parser().parse(reply);
    assert_eq!(sections.irrigation_needed, "No");
    assert_eq!(
      sections.reasoning,
      "It rained 4 mm in the last hour\nand humidity is high."
    );
    assert_eq!(sections.suggested_frequency, "Every 2-3 days");
    assert_eq!(sections.precautions, "Check drainage.");
  }

  #[test]
  fn out_of_order_sections_are_found() {
    let reply = "[PRECAUTIONS]Mulch[/PRECAUTIONS][IRRIGATION_NEEDED]Yes[/IRRIGATION_NEEDED]";
    let sections = parser().parse(reply);
    assert_eq!(sections.irrigation_needed, "Yes");
    assert_eq!(sections.precautions, "Mulch");
    assert_eq!(sections.reasoning, Section::Reasoning.default_text());
  }

  #[test]
  fn blank_section_falls_back_to_default() {
    let sections = parser().parse("[REASONING]\n   \n\t[/REASONING]");
    assert_eq!(sections.reasoning, "No reasoning provided.");
  }

  #[test]
  fn markers_are_case_sensitive() {
    let sections = parser().parse("[irrigation_needed]Yes[/irrigation_needed]");
    assert_eq!(sections.irrigation_needed, "No clear answer");
  }

  #[test]
  fn unmatched_marker_falls_back_to_default() {
    let sections =
      parser().parse("[IRRIGATION_NEEDED]\nYes\n[/IRRIGATION_NEEDED\n[REASONING]Dry[/REASONING]");
    assert_eq!(sections.irrigation_needed, "No clear answer");
    assert_eq!(sections.reasoning, "Dry");
  }

  #[test]
  fn first_occurrence_wins_and_match_is_non_greedy() {
    let sections = parser().parse("[REASONING]first[/REASONING] [REASONING]second[/REASONING]");
    assert_eq!(sections.reasoning, "first");
  }

  #[test]
  fn reparsing_marked_text_is_stable() {
    let p = parser();
    let first = p.parse("[SUGGESTED_FREQUENCY]\n  Twice a week \n[/SUGGESTED_FREQUENCY] trailing");
    assert_eq!(p.parse(&first.to_marked_text()), first);
  }

  fn section_body() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[^\\[\\]]{0,40}")
  }

  proptest! {
    /// Covers bodies and prose without `[` or `]`. Nested or stray markers are
    /// matched first-come by the non-greedy patterns and are not stable.
    #[test]
    fn parse_is_idempotent_on_section_form(
      bodies in proptest::collection::vec(section_body(), 4),
      prose in "[^\\[\\]]{0,20}",
      reversed in any::<bool>(),
    ) {
      let mut order: Vec<usize> = (0..4).collect();
      if reversed {
        order.reverse();
      }

      let mut reply = prose.clone();
      for index in order {
        if let Some(body) = &bodies[index] {
          let section = Section::ALL[index];
          reply.push_str(&format!("{}{}{}", section.open_tag(), body, section.close_tag()));
        }
      }
      reply.push_str(&prose);

      let p = parser();
      let parsed = p.parse(&reply);
      prop_assert_eq!(p.parse(&parsed.to_marked_text()), parsed);
    }
  }
}
