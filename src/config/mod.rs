//! Configuration model for taskfill.
//!
//! The config carries the keyword table that drives rule extraction and the
//! marker prefix that delimits sections of the rules document. Every field is
//! optional: an absent config file, an empty file, or a file naming only some
//! fields all fall back to the built-in defaults.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::KeywordRule;
