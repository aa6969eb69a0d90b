//! `--list`: show what the documents contain without filling anything.

use super::Documents;
use crate::rules::{RuleExtractor, RulesDocument};
use std::io::Write;

/// Write the catalog, the rule sections, and any keyword markers that the
/// rules document lacks.
pub fn write_listing<W: Write>(
    out: &mut W,
    docs: &Documents,
    extractor: &RuleExtractor,
) -> std::io::Result<()> {
    writeln!(out, "Sections:")?;
    for (i, section) in docs.catalog.sections().iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({} unchecked)",
            i + 1,
            section.name,
            section.tasks.len()
        )?;
        for (j, task) in section.tasks.iter().enumerate() {
            writeln!(out, "   {}. {}", j + 1, task)?;
        }
    }

    let rules = RulesDocument::parse(&docs.rules, extractor.marker_prefix());
    writeln!(out)?;
    writeln!(out, "Rule sections:")?;
    for section in rules.sections() {
        writeln!(out, "  - {}", section.name)?;
    }

    let missing = rules.missing_markers(extractor.index());
    if !missing.is_empty() {
        writeln!(out)?;
        writeln!(out, "Keyword markers not found in the rules document:")?;
        for marker in missing {
            writeln!(out, "  - {}", marker)?;
        }
    }

    out.flush()
}
