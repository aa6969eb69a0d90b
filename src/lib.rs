//! Taskfill - fill an agent prompt template with a task and its rules
//!
//! Reads three documents: a `tasks.md` checklist, a prompt template, and a
//! `.cursorrules`-style rules document. After a section and an unchecked task
//! are chosen, the rules sections relevant to that task are pulled out by
//! keyword and the template's tagged block is rebuilt around them.
//!
//! # Pipeline
//!
//! ```text
//! tasks.md ──► TaskCatalog ──► select ──► Selection
//!                                            │
//! .cursorrules ──► RuleExtractor::extract ◄──┤
//!                          │                 │
//! template ───────────► substitute ◄─────────┘
//!                          │
//!                          ▼
//!                   filled template
//! ```
//!
//! # Example
//!
//! ```ignore
//! use taskfill::{Config, RuleExtractor, TaskCatalog};
//!
//! let catalog = TaskCatalog::parse(&tasks_md);
//! let extractor = RuleExtractor::from_config(&Config::default());
//! let rules = extractor.extract(&cursor_rules, "Build a Button component");
//! let filled = taskfill::template::substitute(&template, "Components", "Build a Button component", &rules);
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod rules;
pub mod select;
pub mod template;

pub use catalog::TaskCatalog;
pub use config::Config;
pub use error::{Result, TaskfillError};
pub use rules::{KeywordIndex, RuleExtractor};
pub use select::Selection;
