//! Section extraction driven by a keyword index.

use super::index::KeywordIndex;
use crate::config::Config;
use log::debug;
use std::ops::Range;

/// Extracts the rule sections relevant to a task.
///
/// Create once per run from the loaded [`Config`].
#[derive(Debug, Clone)]
pub struct RuleExtractor {
    index: KeywordIndex,
    marker_prefix: String,
}

impl RuleExtractor {
    pub fn new(index: KeywordIndex, marker_prefix: impl Into<String>) -> Self {
        Self {
            index,
            marker_prefix: marker_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.keyword_index(), config.marker_prefix.clone())
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn marker_prefix(&self) -> &str {
        &self.marker_prefix
    }

    /// Concatenate the sections of `rules_document` whose markers are pulled
    /// in by keywords found in `task_description`.
    ///
    /// Each section runs from its marker to the next occurrence of the marker
    /// prefix (or the end of the document) and is followed by a newline.
    /// Sections appear in matched-marker order. Markers missing from the
    /// document are skipped. No keyword match yields an empty string.
    pub fn extract(&self, rules_document: &str, task_description: &str) -> String {
        extract(rules_document, task_description, &self.index, &self.marker_prefix)
    }
}

/// Rule sections of `rules_document` selected by `index` for `task_description`.
pub fn extract(
    rules_document: &str,
    task_description: &str,
    index: &KeywordIndex,
    marker_prefix: &str,
) -> String {
    let mut rules = String::new();

    for marker in index.matching_markers(task_description) {
        match section_span(rules_document, marker, marker_prefix) {
            Some(span) => {
                rules.push_str(&rules_document[span]);
                rules.push('\n');
            }
            None => debug!("marker '{}' not found in rules document, skipping", marker),
        }
    }

    rules
}

/// Byte range of the section introduced by the first occurrence of `marker`.
///
/// The range starts at the marker itself and ends where `marker_prefix` next
/// occurs after the marker token, or at the end of the document.
pub fn section_span(rules_document: &str, marker: &str, marker_prefix: &str) -> Option<Range<usize>> {
    let start = rules_document.find(marker)?;
    let body_start = start + marker.len();
    let end = rules_document[body_start..]
        .find(marker_prefix)
        .map_or(rules_document.len(), |offset| body_start + offset);
    Some(start..end)
}
