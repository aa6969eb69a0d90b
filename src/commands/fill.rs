//! Filling the template for a selected task.

use crate::catalog::TaskCatalog;
use crate::error::Result;
use crate::fs::read_document;
use crate::rules::RuleExtractor;
use crate::select::Selection;
use crate::template::{substitute, try_substitute};
use log::{debug, info};
use std::path::Path;

/// The three input documents of a run.
#[derive(Debug, Clone)]
pub struct Documents {
    pub catalog: TaskCatalog,
    pub template: String,
    pub rules: String,
}

impl Documents {
    /// Read all three documents. Any read failure is fatal for the run.
    pub fn load(tasks: &Path, template: &Path, rules: &Path) -> Result<Self> {
        Ok(Self {
            catalog: TaskCatalog::load(tasks)?,
            template: read_document(template)?,
            rules: read_document(rules)?,
        })
    }
}

/// Extract the rules for the selected task and substitute the tagged block.
///
/// Without `strict`, a template lacking the block is returned unchanged (with
/// a logged warning). With `strict`, that case is a `NoMatchingBlock` error.
pub fn fill_template(
    docs: &Documents,
    selection: &Selection,
    extractor: &RuleExtractor,
    strict: bool,
) -> Result<String> {
    let rules = extractor.extract(&docs.rules, &selection.task);
    if rules.is_empty() {
        info!("no rule sections matched task '{}'", selection.task);
    } else {
        debug!("extracted {} byte(s) of rules", rules.len());
    }

    if strict {
        Ok(try_substitute(
            &docs.template,
            &selection.section,
            &selection.task,
            &rules,
        )?)
    } else {
        Ok(substitute(
            &docs.template,
            &selection.section,
            &selection.task,
            &rules,
        ))
    }
}
