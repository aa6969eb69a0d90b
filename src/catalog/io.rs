//! File I/O for task documents.

use super::TaskCatalog;
use crate::error::Result;
use log::debug;
use std::path::Path;

impl TaskCatalog {
    /// Load and parse a task document from disk.
    ///
    /// A read failure is fatal for the run and surfaces as `TaskfillError::Io`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = crate::fs::read_document(path)?;
        let catalog = Self::parse(&content);
        debug!(
            "parsed {} section(s) with {} unchecked task(s) from {}",
            catalog.len(),
            catalog.task_count(),
            path.display()
        );
        Ok(catalog)
    }
}
