//! Choosing a section and task from the catalog.
//!
//! Choices come from `--section`/`--task` when given, and from a numbered menu
//! otherwise. The menu re-prompts until it gets a number in range; closing the
//! input instead aborts the run.

use crate::catalog::{Section, TaskCatalog};
use crate::error::{Result, TaskfillError};
use log::debug;
use std::convert::Infallible;
use std::io::{BufRead, Write};
use std::str::FromStr;


/// The chosen section and task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub section: String,
    pub task: String,
}

/// A choice given on the command line: a 1-based number or an exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    Number(usize),
    Name(String),
}

impl FromStr for Pick {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().parse::<usize>() {
            Ok(n) => Pick::Number(n),
            Err(_) => Pick::Name(s.trim().to_string()),
        })
    }
}

impl Pick {
    /// Position of the picked item among `names`.
    fn resolve(&self, names: &[&str], what: &str) -> Result<usize> {
        match self {
            Pick::Number(n) if (1..=names.len()).contains(n) => Ok(n - 1),
            Pick::Number(n) => Err(TaskfillError::UserError(format!(
                "{} number {} is out of range (1-{})",
                what,
                n,
                names.len()
            ))),
            Pick::Name(name) => names.iter().position(|n| *n == name.as_str()).ok_or_else(|| {
                TaskfillError::UserError(format!(
                    "no {} named '{}'; available: {}",
                    what,
                    name,
                    names.join(", ")
                ))
            }),
        }
    }
}

/// Numbered menu over a line-oriented input and a display output.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// List the sections and ask for one that has tasks.
    pub fn choose_section<'c>(&mut self, catalog: &'c TaskCatalog) -> Result<&'c Section> {
        self.say("Available sections:")?;
        for (i, section) in catalog.sections().iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, section.name))?;
        }

        loop {
            let idx = self.read_choice("Select a section number: ", catalog.len())?;
            let section = &catalog.sections()[idx];
            if !section.tasks.is_empty() {
                return Ok(section);
            }
            self.say(&format!(
                "Section '{}' has no unchecked tasks. Please choose another section.",
                section.name
            ))?;
        }
    }

    /// List the tasks of `section` and ask for one.
    pub fn choose_task<'c>(&mut self, section: &'c Section) -> Result<&'c str> {
        self.say(&format!("\nAvailable tasks for '{}':", section.name))?;
        for (i, task) in section.tasks.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, task))?;
        }

        let idx = self.read_choice("Select a task number: ", section.tasks.len())?;
        Ok(&section.tasks[idx])
    }

    /// Prompt until a number in `1..=len` is entered; returns it 0-based.
    fn read_choice(&mut self, prompt: &str, len: usize) -> Result<usize> {
        loop {
            write!(self.output, "{}", prompt).map_err(TaskfillError::Terminal)?;
            self.output.flush().map_err(TaskfillError::Terminal)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(TaskfillError::Terminal)?;
            if read == 0 {
                return Err(TaskfillError::SelectionAborted);
            }

            match line.trim().parse::<i64>() {
                Ok(n) if n >= 1 && (n as u64) <= len as u64 => return Ok(n as usize - 1),
                Ok(_) => self.say("Invalid choice. Please enter a number from the list.")?,
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(TaskfillError::Terminal)
    }
}

/// Resolve the section and task, prompting for whatever was not picked.
pub fn select<R: BufRead, W: Write>(
    catalog: &TaskCatalog,
    section: Option<&Pick>,
    task: Option<&Pick>,
    prompter: &mut Prompter<R, W>,
) -> Result<Selection> {
    if catalog.task_count() == 0 {
        return Err(TaskfillError::UserError(
            "task document has no unchecked tasks under a '## ' section".to_string(),
        ));
    }

    let section = match section {
        Some(pick) => {
            let names: Vec<&str> = catalog.section_names().collect();
            let idx = pick.resolve(&names, "section")?;
            let section = &catalog.sections()[idx];
            if section.tasks.is_empty() {
                return Err(TaskfillError::UserError(format!(
                    "section '{}' has no unchecked tasks",
                    section.name
                )));
            }
            section
        }
        None => prompter.choose_section(catalog)?,
    };

    let task = match task {
        Some(pick) => {
            let names: Vec<&str> = section.tasks.iter().map(String::as_str).collect();
            let idx = pick.resolve(&names, "task")?;
            section.tasks[idx].as_str()
        }
        None => prompter.choose_task(section)?,
    };

    debug!("selected '{}' from section '{}'", task, section.name);
    Ok(Selection {
        section: section.name.clone(),
        task: task.to_string(),
    })
}
