//! End-to-end tests for a taskfill run.

use super::*;
use crate::template::BlockError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TASKS_MD: &str = "\
# Dashboard Tasks

## Components
- [ ] Build a reusable Button component
";

const RULES: &str = "// --- UI Components ---\nUse PascalCase.";

const TEMPLATE: &str = "\
You are working on the dashboard.

<TASK>
</TASK>
<TASK_FROM_TASKS_MD>
</TASK_FROM_TASKS_MD>
<CURSOR_RULES>
</CURSOR_RULES>

Reply with a plan first.
";

const EXPECTED_BLOCK: &str = "<TASK>\n\nComponents - Build a reusable Button component\n\n</TASK>\n<TASK_FROM_TASKS_MD>\n\nBuild a reusable Button component\n\n</TASK_FROM_TASKS_MD>\n<CURSOR_RULES>\n\n// --- UI Components ---\nUse PascalCase.\n\n</CURSOR_RULES>";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(tasks: &str, template: &str, rules: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tasks.md"), tasks).unwrap();
        std::fs::write(dir.path().join("script-template.txt"), template).unwrap();
        std::fs::write(dir.path().join(".cursorrules"), rules).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cli(&self, extra: &[&str]) -> Cli {
        let mut args: Vec<String> = vec!["taskfill".to_string()];
        for name in ["tasks.md", "script-template.txt", ".cursorrules"] {
            args.push(self.path(name).to_string_lossy().into_owned());
        }
        args.extend(extra.iter().map(|s| s.to_string()));
        <Cli as clap::Parser>::try_parse_from(args).unwrap()
    }

    /// Run with scripted input; returns (result, prompts, stdout).
    fn run(&self, extra: &[&str], input: &str) -> (Result<()>, String, String) {
        let cli = self.cli(extra);
        let mut prompts = Vec::new();
        let mut out = Vec::new();
        let result = run(&cli, input.as_bytes(), &mut prompts, &mut out);
        (
            result,
            String::from_utf8(prompts).unwrap(),
            String::from_utf8(out).unwrap(),
        )
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_end_to_end_button_scenario() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    let (result, prompts, out) = fx.run(&[], "1\n1\n");

    result.unwrap();
    assert!(prompts.contains("1. Components"));
    assert!(prompts.contains("1. Build a reusable Button component"));

    let expected = TEMPLATE.replace(
        "<TASK>\n</TASK>\n<TASK_FROM_TASKS_MD>\n</TASK_FROM_TASKS_MD>\n<CURSOR_RULES>\n</CURSOR_RULES>",
        EXPECTED_BLOCK,
    );
    assert_eq!(out, format!("\nUpdated template:\n\n{}\n", expected));
}

#[test]
fn test_run_does_not_touch_template_by_default() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    let (result, _, _) = fx.run(&["--section", "1", "--task", "1"], "");

    result.unwrap();
    assert_eq!(read(&fx.path("script-template.txt")), TEMPLATE);
}

#[test]
fn test_write_back_replaces_template() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    let (result, _, out) = fx.run(&["-s", "Components", "-t", "1", "--write", "--quiet"], "");

    result.unwrap();
    let written = read(&fx.path("script-template.txt"));
    assert!(written.contains(EXPECTED_BLOCK));
    assert_eq!(out, format!("{}\n", written));
}

#[test]
fn test_rerun_on_written_template_is_stable() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    fx.run(&["-s", "1", "-t", "1", "--write"], "").0.unwrap();
    let first = read(&fx.path("script-template.txt"));

    fx.run(&["-s", "1", "-t", "1", "--write"], "").0.unwrap();
    let second = read(&fx.path("script-template.txt"));

    assert_eq!(first, second);
    assert_eq!(second.matches("<CURSOR_RULES>").count(), 1);
}

#[test]
fn test_template_without_block_is_printed_unchanged() {
    let fx = Fixture::new(TASKS_MD, "No tags here.\n", RULES);
    let (result, _, out) = fx.run(&["-s", "1", "-t", "1", "-q"], "");

    result.unwrap();
    assert_eq!(out, "No tags here.\n\n");
}

#[test]
fn test_strict_reports_missing_block() {
    let fx = Fixture::new(TASKS_MD, "No tags here.\n", RULES);
    let (result, _, out) = fx.run(&["-s", "1", "-t", "1", "--strict"], "");

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        TaskfillError::NoMatchingBlock(BlockError::MissingTaskTag)
    ));
    assert_eq!(err.exit_code(), crate::exit_codes::TEMPLATE_MISMATCH);
    assert!(out.is_empty());
}

#[test]
fn test_missing_rules_file_fails_before_prompting() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    std::fs::remove_file(fx.path(".cursorrules")).unwrap();

    let (result, prompts, out) = fx.run(&[], "1\n1\n");

    let err = result.unwrap_err();
    assert!(matches!(err, TaskfillError::Io { action: "read", .. }));
    assert_eq!(err.exit_code(), crate::exit_codes::IO_FAILURE);
    assert!(prompts.is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_no_keyword_match_leaves_rules_empty() {
    let tasks = "## Docs\n- [ ] Write the changelog\n";
    let fx = Fixture::new(tasks, TEMPLATE, RULES);
    let (result, _, out) = fx.run(&["-s", "1", "-t", "1", "-q"], "");

    result.unwrap();
    assert!(out.contains("<CURSOR_RULES>\n\n\n</CURSOR_RULES>"));
}

#[test]
fn test_custom_config_keywords() {
    let fx = Fixture::new(
        "## Docs\n- [ ] Write the changelog\n",
        TEMPLATE,
        "// --- Writing ---\nKeep entries short.\n// --- UI Components ---\nUse PascalCase.",
    );
    std::fs::write(
        fx.path("taskfill.yaml"),
        "keywords:\n  - keyword: changelog\n    markers: [\"// --- Writing ---\"]\n",
    )
    .unwrap();
    let config = fx.path("taskfill.yaml").to_string_lossy().into_owned();

    let (result, _, out) = fx.run(&["-s", "1", "-t", "1", "-q", "-c", &config], "");

    result.unwrap();
    assert!(out.contains("<CURSOR_RULES>\n\n// --- Writing ---\nKeep entries short.\n\n\n</CURSOR_RULES>"));
    assert!(!out.contains("Use PascalCase."));
}

#[test]
fn test_invalid_config_is_user_error() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    std::fs::write(fx.path("bad.yaml"), "marker_prefix: \"\"\n").unwrap();
    let config = fx.path("bad.yaml").to_string_lossy().into_owned();

    let (result, _, _) = fx.run(&["-c", &config], "1\n1\n");
    assert!(matches!(result, Err(TaskfillError::UserError(_))));
}

#[test]
fn test_aborted_selection_prints_nothing() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    let (result, _, out) = fx.run(&[], "1\n");

    assert!(matches!(result, Err(TaskfillError::SelectionAborted)));
    assert!(out.is_empty());
}

#[test]
fn test_list_shows_catalog_and_rule_sections() {
    let fx = Fixture::new(TASKS_MD, TEMPLATE, RULES);
    let (result, prompts, out) = fx.run(&["--list"], "");

    result.unwrap();
    assert!(prompts.is_empty());
    assert!(out.starts_with(
        "Sections:\n1. Components (1 unchecked)\n   1. Build a reusable Button component\n"
    ));
    assert!(out.contains("Rule sections:\n  - UI Components\n"));
    assert!(out.contains("Keyword markers not found in the rules document:"));
    assert!(out.contains("  - // --- Tailwind Usage ---\n"));
}

#[test]
fn test_fill_template_directly() {
    let docs = Documents {
        catalog: crate::catalog::TaskCatalog::parse(TASKS_MD),
        template: TEMPLATE.to_string(),
        rules: RULES.to_string(),
    };
    let selection = crate::select::Selection {
        section: "Components".to_string(),
        task: "Build a reusable Button component".to_string(),
    };
    let extractor = RuleExtractor::from_config(&Config::default());

    let filled = fill_template(&docs, &selection, &extractor, true).unwrap();
    assert!(filled.contains(EXPECTED_BLOCK));
    assert!(filled.starts_with("You are working on the dashboard.\n\n<TASK>"));
}
