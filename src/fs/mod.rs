//! Filesystem helpers for taskfill.
//!
//! All three input documents are loaded whole; the only write is the optional
//! atomic write-back of the filled template.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{Result, TaskfillError};
use std::path::Path;

/// Read a whole document into memory.
///
/// A missing or unreadable file is an [`TaskfillError::Io`] naming the path.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| TaskfillError::io("read", path, e))
}
