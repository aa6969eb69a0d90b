//! Command implementation for taskfill.
//!
//! A run loads all three documents up front, so an unreadable file fails the
//! run before any prompt is shown. It then either lists what it found
//! (`--list`) or selects a task and fills the template.

mod fill;
mod list;

#[cfg(test)]
mod tests;

pub use fill::{Documents, fill_template};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TaskfillError};
use crate::fs::atomic_write_file;
use crate::rules::{RuleExtractor, RulesDocument};
use crate::select::{Prompter, select};
use log::{info, warn};
use std::io::{BufRead, Write};

/// Dispatch the parsed command line against the real terminal.
///
/// Prompts and menus go to stderr so that stdout carries only the filled
/// template and can be piped or redirected.
pub fn dispatch(cli: Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&cli, stdin.lock(), std::io::stderr(), stdout.lock())
}

/// Execute a run with explicit input, prompt, and output streams.
pub fn run<R, P, O>(cli: &Cli, input: R, prompts: P, mut out: O) -> Result<()>
where
    R: BufRead,
    P: Write,
    O: Write,
{
    let config = Config::load_or_default(cli.config.as_deref())?;
    let extractor = RuleExtractor::from_config(&config);
    if extractor.index().is_empty() {
        warn!("keyword table is empty; no rules will be extracted");
    }
    let docs = Documents::load(&cli.tasks_file, &cli.template_file, &cli.rules_file)?;

    if cli.list {
        return list::write_listing(&mut out, &docs, &extractor).map_err(TaskfillError::Terminal);
    }

    let rules_doc = RulesDocument::parse(&docs.rules, extractor.marker_prefix());
    for marker in rules_doc.missing_markers(extractor.index()) {
        info!(
            "marker '{}' does not occur in {}",
            marker,
            cli.rules_file.display()
        );
    }

    let mut prompter = Prompter::new(input, prompts);
    let selection = select(
        &docs.catalog,
        cli.section.as_ref(),
        cli.task.as_ref(),
        &mut prompter,
    )?;

    let filled = fill_template(&docs, &selection, &extractor, cli.strict)?;

    if cli.write {
        atomic_write_file(&cli.template_file, &filled)?;
        info!("wrote filled template to {}", cli.template_file.display());
    }

    if !cli.quiet {
        writeln!(out, "\nUpdated template:\n").map_err(TaskfillError::Terminal)?;
    }
    writeln!(out, "{}", filled).map_err(TaskfillError::Terminal)?;
    out.flush().map_err(TaskfillError::Terminal)
}
