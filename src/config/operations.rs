//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, TaskfillError};
use crate::rules::KeywordIndex;
use log::{debug, warn};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TaskfillError::Io)` - The file could not be read
    /// * `Err(TaskfillError::UserError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = crate::fs::read_document(path)?;
        debug!("loading config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load the config at `path` if one was given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                TaskfillError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `marker_prefix` must be non-blank
    /// - every keyword must be non-blank and list at least one marker
    /// - every marker must be non-blank
    ///
    /// A marker that does not start with `marker_prefix` is allowed but logged,
    /// since the following section boundary is still found by the prefix.
    pub fn validate(&self) -> Result<()> {
        if self.marker_prefix.trim().is_empty() {
            return Err(TaskfillError::UserError(
                "config validation failed: marker_prefix must not be empty".to_string(),
            ));
        }

        for rule in &self.keywords {
            if rule.keyword.trim().is_empty() {
                return Err(TaskfillError::UserError(
                    "config validation failed: keywords must not be empty".to_string(),
                ));
            }
            if rule.markers.is_empty() {
                return Err(TaskfillError::UserError(format!(
                    "config validation failed: keyword '{}' has no markers",
                    rule.keyword
                )));
            }
            for marker in &rule.markers {
                if marker.trim().is_empty() {
                    return Err(TaskfillError::UserError(format!(
                        "config validation failed: keyword '{}' has an empty marker",
                        rule.keyword
                    )));
                }
                if !marker.starts_with(&self.marker_prefix) {
                    warn!(
                        "marker '{}' for keyword '{}' does not start with marker_prefix '{}'",
                        marker, rule.keyword, self.marker_prefix
                    );
                }
            }
        }

        Ok(())
    }

    /// Build the keyword index used by the rule extractor.
    pub fn keyword_index(&self) -> KeywordIndex {
        KeywordIndex::from_rules(&self.keywords)
    }
}
