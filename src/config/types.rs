//! Configuration types and defaults for taskfill.

use serde::{Deserialize, Serialize};

/// One row of the keyword table: a keyword and the rule markers it pulls in.
///
/// ```yaml
/// - keyword: form
///   markers:
///     - "// --- UI Components ---"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Substring looked up (case-insensitively) in the task description.
    pub keyword: String,

    /// Marker tokens of the rules-document sections to include on a match.
    pub markers: Vec<String>,
}

impl KeywordRule {
    pub fn new<K, I, M>(keyword: K, markers: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            keyword: keyword.into(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Marker prefix used by `.cursorrules`-style documents.
pub const DEFAULT_MARKER_PREFIX: &str = "// ---";

pub(crate) fn default_marker_prefix() -> String {
    DEFAULT_MARKER_PREFIX.to_string()
}

const COMPONENTS_AND_NAMING: &str = "// --- Components & Naming ---";
const UI_COMPONENTS: &str = "// --- UI Components ---";
const TAILWIND_USAGE: &str = "// --- Tailwind Usage ---";

/// Built-in keyword table for a Next.js + Tailwind `.cursorrules` file.
pub fn default_keywords() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("component", [COMPONENTS_AND_NAMING, UI_COMPONENTS]),
        KeywordRule::new("tailwind", [TAILWIND_USAGE]),
        KeywordRule::new("icon", ["// --- Icons ---"]),
        KeywordRule::new("form", [UI_COMPONENTS]),
        KeywordRule::new("modal", [UI_COMPONENTS]),
        KeywordRule::new("notification", ["// --- Toast Notifications ---"]),
        KeywordRule::new("next.js", ["// --- Next.js Structure ---"]),
        KeywordRule::new("typescript", ["// --- TypeScript & Syntax ---"]),
        KeywordRule::new("style", [TAILWIND_USAGE]),
        KeywordRule::new("button", [UI_COMPONENTS]),
        KeywordRule::new("input", [UI_COMPONENTS]),
        KeywordRule::new("task", [COMPONENTS_AND_NAMING, UI_COMPONENTS]),
        KeywordRule::new("note", [COMPONENTS_AND_NAMING, UI_COMPONENTS]),
        KeywordRule::new("goal", [COMPONENTS_AND_NAMING, UI_COMPONENTS]),
        KeywordRule::new("pomodoro", [COMPONENTS_AND_NAMING, UI_COMPONENTS]),
        KeywordRule::new("shared", ["// --- Code Style ---"]),
        KeywordRule::new("semantic commit", ["// --- Additional ---"]),
        KeywordRule::new("build", ["// --- IMPORTANT: ---"]),
    ]
}
