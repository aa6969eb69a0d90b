//! Exit code constants for the taskfill CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, empty catalog, aborted selection)
//! - 2: I/O failure (an input document could not be read, or write-back failed)
//! - 3: Template mismatch (no tagged block found, only with `--strict`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or nothing to select.
pub const USER_ERROR: i32 = 1;

/// I/O failure: a document could not be read or the result could not be written.
pub const IO_FAILURE: i32 = 2;

/// The template has no `<TASK>`/`<TASK_FROM_TASKS_MD>`/`<CURSOR_RULES>` block.
pub const TEMPLATE_MISMATCH: i32 = 3;
