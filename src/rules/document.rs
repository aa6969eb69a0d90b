//! Marker-delimited rules document.

use super::index::KeywordIndex;
use regex::Regex;

/// A named section of the rules document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSection<'a> {
    /// The marker token as written, e.g. `// --- UI Components ---`.
    pub marker: &'a str,
    /// The marker with its syntax stripped, e.g. `UI Components`.
    pub name: String,
    /// Raw text from the marker up to the next marker or end of document.
    pub body: &'a str,
}

/// A rules document split into its sections.
///
/// Text before the first marker belongs to no section.
#[derive(Debug, Clone)]
pub struct RulesDocument<'a> {
    text: &'a str,
    sections: Vec<RuleSection<'a>>,
}

impl<'a> RulesDocument<'a> {
    /// Split `text` at every occurrence of `marker_prefix`.
    ///
    /// A section's marker token is the rest of the line its prefix starts on.
    pub fn parse(text: &'a str, marker_prefix: &str) -> Self {
        let name_pattern = marker_name_pattern(marker_prefix);
        let starts: Vec<usize> = text.match_indices(marker_prefix).map(|(i, _)| i).collect();

        let mut sections = Vec::with_capacity(starts.len());
        let mut boundary = 0;
        for &start in &starts {
            // A prefix occurring inside the previous marker line is not a new section.
            if start < boundary {
                continue;
            }
            let line_end = text[start..].find('\n').map_or(text.len(), |i| start + i);
            let marker = text[start..line_end].trim_end();
            let end = starts
                .iter()
                .copied()
                .find(|&next| next >= start + marker.len())
                .unwrap_or(text.len());

            sections.push(RuleSection {
                marker,
                name: marker_name(name_pattern.as_ref(), marker),
                body: &text[start..end],
            });
            boundary = start + marker.len();
        }

        Self { text, sections }
    }

    pub fn sections(&self) -> &[RuleSection<'a>] {
        &self.sections
    }

    /// Index markers that never occur in the document.
    pub fn missing_markers<'i>(&self, index: &'i KeywordIndex) -> Vec<&'i str> {
        index
            .markers()
            .into_iter()
            .filter(|marker| !self.text.contains(marker))
            .collect()
    }
}

fn marker_name_pattern(marker_prefix: &str) -> Option<Regex> {
    Regex::new(&format!(r"^{}\s*(.*?)[\s\-]*$", regex::escape(marker_prefix))).ok()
}

fn marker_name(pattern: Option<&Regex>, marker: &str) -> String {
    pattern
        .and_then(|re| re.captures(marker))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| marker.trim().to_string(), |m| m.as_str().to_string())
}
