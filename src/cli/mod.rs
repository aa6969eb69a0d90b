//! CLI argument parsing for taskfill.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! work happens in the `commands` module.

use crate::select::Pick;
use clap::Parser;
use std::path::PathBuf;

/// Fill a prompt template with a task from tasks.md and the matching rules.
///
/// Lists the sections of the task document, asks for a section and an
/// unchecked task, pulls the relevant sections out of the rules document by
/// keyword, and replaces the <TASK>/<TASK_FROM_TASKS_MD>/<CURSOR_RULES> block
/// of the template. The filled template is printed to stdout.
#[derive(Parser, Debug)]
#[command(name = "taskfill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the tasks.md file.
    pub tasks_file: PathBuf,

    /// Path to the script-template.txt file.
    pub template_file: PathBuf,

    /// Path to the .cursorrules file.
    pub rules_file: PathBuf,

    /// YAML config with the keyword table and marker prefix.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Section to use, by number or exact name (skips the section prompt).
    #[arg(short, long, value_name = "N|NAME")]
    pub section: Option<Pick>,

    /// Task to use, by number or exact text (skips the task prompt).
    #[arg(short, long, value_name = "N|TEXT", requires = "section")]
    pub task: Option<Pick>,

    /// Also write the filled template back to TEMPLATE_FILE.
    #[arg(long)]
    pub write: bool,

    /// Fail when the template has no tagged block instead of printing it unchanged.
    #[arg(long)]
    pub strict: bool,

    /// Print the sections, tasks, and rule sections found, then exit.
    #[arg(long, conflicts_with_all = ["section", "task", "write"])]
    pub list: bool,

    /// Print only the filled template, without the "Updated template" header.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
