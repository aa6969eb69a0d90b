//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a taskfill run.
///
/// Loaded from the YAML file named by `--config`. Unknown fields are ignored
/// for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generic marker syntax that starts a rules-document section.
    ///
    /// A section body ends where the next occurrence of this prefix begins.
    #[serde(default = "default_marker_prefix")]
    pub marker_prefix: String,

    /// Keyword table, in match order.
    ///
    /// When present in the YAML it replaces the built-in table entirely.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<KeywordRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_prefix: default_marker_prefix(),
            keywords: default_keywords(),
        }
    }
}
