//! Task catalog parsed from a `tasks.md` document.
//!
//! # Task Document Format
//!
//! ```text
//! # Project Tasks
//!
//! ## Components
//! - [ ] Build a reusable Button component
//! - [x] Set up the layout
//!
//! ## Notes
//! - [ ] Add note search
//! ```
//!
//! Each line is trimmed, then classified:
//!
//! - `# ` lines are the document title and are skipped
//! - `## ` lines open a section named by the trimmed heading text
//! - `- [ ] ` lines add an unchecked task to the open section
//! - anything else (blank lines, checked items, prose, deeper headings) is ignored
//!
//! An unchecked item that appears before any `## ` heading has no section to
//! attach to and is dropped.

use log::debug;

mod io;

const TITLE_MARKER: &str = "# ";
const SECTION_MARKER: &str = "## ";
const UNCHECKED_MARKER: &str = "- [ ] ";

/// A `## ` section and its unchecked tasks, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub tasks: Vec<String>,
}

/// Ordered mapping of section name to unchecked tasks.
///
/// Section names are unique. A heading repeated later in the document resets
/// that section's task list but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCatalog {
    sections: Vec<Section>,
}

impl TaskCatalog {
    /// Parse a catalog from the contents of a task document.
    pub fn parse(content: &str) -> Self {
        let mut catalog = Self::default();
        let mut current: Option<usize> = None;

        for line in content.lines() {
            let line = line.trim();

            if line.starts_with(TITLE_MARKER) {
                continue;
            }

            if let Some(heading) = line.strip_prefix(SECTION_MARKER) {
                current = Some(catalog.open_section(heading.trim()));
            } else if let Some(task) = line.strip_prefix(UNCHECKED_MARKER) {
                let task = task.trim();
                match current {
                    Some(idx) => catalog.sections[idx].tasks.push(task.to_string()),
                    None => debug!("dropping task outside any section: {}", task),
                }
            }
        }

        catalog
    }

    /// Open (or reopen) a section and return its position.
    fn open_section(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => {
                debug!("section '{}' repeated, restarting its task list", name);
                self.sections[idx].tasks.clear();
                idx
            }
            None => {
                self.sections.push(Section {
                    name: name.to_string(),
                    tasks: Vec::new(),
                });
                self.sections.len() - 1
            }
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Unchecked tasks of `section`, or `None` if there is no such section.
    pub fn tasks(&self, section: &str) -> Option<&[String]> {
        self.section(section).map(|s| s.tasks.as_slice())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of unchecked tasks across all sections.
    pub fn task_count(&self) -> usize {
        self.sections.iter().map(|s| s.tasks.len()).sum()
    }
}
