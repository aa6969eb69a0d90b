//! Keyword-driven extraction of convention rules.
//!
//! A rules document (typically `.cursorrules`) is split into sections by
//! marker lines such as `// --- UI Components ---`. A [`KeywordIndex`] maps
//! keywords to marker tokens; when a keyword occurs anywhere in a task
//! description, the sections behind its markers are pulled into the prompt.
//!
//! Matching is a case-insensitive *substring* test, not a word match: `form`
//! also matches "plat**form**". That imprecision is accepted.

mod document;
mod extract;
mod index;


pub use document::{RuleSection, RulesDocument};
pub use extract::{RuleExtractor, extract, section_span};
pub use index::KeywordIndex;
