//! Replacement of the tagged task block in a prompt template.
//!
//! The template carries exactly one block of three adjacent tag pairs:
//!
//! ```text
//! <TASK>
//! ...
//! </TASK>
//! <TASK_FROM_TASKS_MD>
//! ...
//! </TASK_FROM_TASKS_MD>
//! <CURSOR_RULES>
//! ...
//! </CURSOR_RULES>
//! ```
//!
//! Each run replaces the whole block with a freshly built one. Everything
//! outside the block is copied through byte for byte, and the inserted text is
//! verbatim (no escape sequences are interpreted).
//!
//! # Locating the block
//!
//! The block is found in three stages, each searching forward from the end
//! of the previous one:
//!
//! 1. the first `<TASK>` tag
//! 2. the first `</TASK>` immediately followed by a newline and `<TASK_FROM_TASKS_MD>`
//! 3. the first `</TASK_FROM_TASKS_MD>` immediately followed by a newline and `<CURSOR_RULES>`
//!
//! and the span ends after the first `</CURSOR_RULES>` that follows. Each
//! stage that fails is reported by its own [`BlockError`] variant.

use log::warn;
use std::fmt;
use std::ops::Range;

const TASK_OPEN: &str = "<TASK>";
const TASK_TO_SOURCE: &str = "</TASK>\n<TASK_FROM_TASKS_MD>";
const SOURCE_TO_RULES: &str = "</TASK_FROM_TASKS_MD>\n<CURSOR_RULES>";
const RULES_CLOSE: &str = "</CURSOR_RULES>";

/// Error type for a template without a complete tagged block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// No `<TASK>` tag anywhere in the template.
    MissingTaskTag,
    /// `<TASK>` is not followed by `</TASK>` and `<TASK_FROM_TASKS_MD>` on the next line.
    MissingSourceTag {
        /// Where the search for this stage started.
        position: usize,
    },
    /// `<TASK_FROM_TASKS_MD>` is not followed by its close tag and `<CURSOR_RULES>`.
    MissingRulesTag {
        /// Where the search for this stage started.
        position: usize,
    },
    /// `<CURSOR_RULES>` is never closed.
    UnclosedRulesTag {
        /// Where the search for this stage started.
        position: usize,
    },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::MissingTaskTag => write!(f, "no <TASK> tag found"),
            BlockError::MissingSourceTag { position } => write!(
                f,
                "no </TASK> followed by <TASK_FROM_TASKS_MD> after position {}",
                position
            ),
            BlockError::MissingRulesTag { position } => write!(
                f,
                "no </TASK_FROM_TASKS_MD> followed by <CURSOR_RULES> after position {}",
                position
            ),
            BlockError::UnclosedRulesTag { position } => {
                write!(f, "no </CURSOR_RULES> after position {}", position)
            }
        }
    }
}

impl std::error::Error for BlockError {}

/// The block inserted into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskBlock<'a> {
    pub section: &'a str,
    pub task: &'a str,
    pub rules: &'a str,
}

impl fmt::Display for TaskBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TASK>\n\n{section} - {task}\n\n</TASK>\n\
             <TASK_FROM_TASKS_MD>\n\n{task}\n\n</TASK_FROM_TASKS_MD>\n\
             <CURSOR_RULES>\n\n{rules}\n</CURSOR_RULES>",
            section = self.section,
            task = self.task,
            rules = self.rules,
        )
    }
}

/// Text of a freshly filled block.
pub fn render_block(section: &str, task: &str, rules: &str) -> String {
    TaskBlock {
        section,
        task,
        rules,
    }
    .to_string()
}

/// Byte range of the first tagged block in `template`.
pub fn locate_block(template: &str) -> Result<Range<usize>, BlockError> {
    let start = template.find(TASK_OPEN).ok_or(BlockError::MissingTaskTag)?;

    let position = start + TASK_OPEN.len();
    let task_close = find_from(template, position, TASK_TO_SOURCE)
        .ok_or(BlockError::MissingSourceTag { position })?;

    let position = task_close + TASK_TO_SOURCE.len();
    let source_close = find_from(template, position, SOURCE_TO_RULES)
        .ok_or(BlockError::MissingRulesTag { position })?;

    let position = source_close + SOURCE_TO_RULES.len();
    let rules_close = find_from(template, position, RULES_CLOSE)
        .ok_or(BlockError::UnclosedRulesTag { position })?;

    Ok(start..rules_close + RULES_CLOSE.len())
}

fn find_from(haystack: &str, from: usize, needle: &str) -> Option<usize> {
    haystack[from..].find(needle).map(|offset| from + offset)
}

/// Replace the first tagged block, reporting a template without one.
///
/// Later blocks, if any, are left untouched.
pub fn try_substitute(
    template: &str,
    section: &str,
    task: &str,
    rules: &str,
) -> Result<String, BlockError> {
    let span = locate_block(template)?;
    let block = render_block(section, task, rules);

    let mut output = String::with_capacity(template.len() - span.len() + block.len());
    output.push_str(&template[..span.start]);
    output.push_str(&block);
    output.push_str(&template[span.end..]);
    Ok(output)
}

/// Replace the first tagged block; a template without one comes back unchanged.
///
/// The missing block is logged as a warning. Use [`try_substitute`] to treat
/// it as an error instead.
pub fn substitute(template: &str, section: &str, task: &str, rules: &str) -> String {
    match try_substitute(template, section, task, rules) {
        Ok(output) => output,
        Err(e) => {
            warn!("{}; template left unchanged", e);
            template.to_string()
        }
    }
}
