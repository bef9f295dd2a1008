//! Human-readable run reports.
//!
//! Every writer targets `std::io::Write` so output can be captured in tests.
//! Colors go through [`ReportOptions::use_colors`] rather than relying on the
//! terminal alone.

use std::env;
use std::fmt::Write as _;
use std::io::{self, Write};

use colored::Colorize;

use crate::error::TaskError;
use crate::languages::tree_sitter_utils::node_range;
use crate::types::{ParseOutcome, RunSummary, TaskResult};

/// How the syntax tree of each file is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeStyle {
    /// Tree-sitter S-expression on a single line.
    #[default]
    Sexp,
    /// One named node per line, indented by depth, with positions.
    Indented,
    /// Omit the tree section.
    None,
}

/// Rendering options for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Tree rendering style.
    pub tree_style: TreeStyle,
    /// Deepest level rendered by [`TreeStyle::Indented`]; `None` is unlimited.
    pub max_depth: Option<usize>,
    /// Whether to emit ANSI colors.
    pub use_colors: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            tree_style: TreeStyle::Sexp,
            max_depth: None,
            use_colors: true,
        }
    }
}

impl ReportOptions {
    /// Defaults with colors controlled by the environment.
    ///
    /// `NO_COLOR` (any value) disables colors, as does `SPOTTER_COLOR=0|false`.
    #[must_use]
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let spotter_color = env::var("SPOTTER_COLOR").ok();

        Self {
            use_colors: colors_enabled(no_color, spotter_color.as_deref()),
            ..Self::default()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.use_colors {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Decide whether to color output from `NO_COLOR` and `SPOTTER_COLOR`.
fn colors_enabled(no_color: bool, spotter_color: Option<&str>) -> bool {
    match spotter_color {
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
        Some(v) if v == "1" || v.eq_ignore_ascii_case("true") || v.is_empty() => !no_color,
        Some(v) => {
            tracing::warn!(
                env_var = "SPOTTER_COLOR",
                value = %v,
                "Invalid value, expected 0/1/true/false"
            );
            !no_color
        }
        None => !no_color,
    }
}

/// Render a syntax tree in the given style.
///
/// Returns an empty string for [`TreeStyle::None`].
#[must_use]
pub fn render_tree(
    root: &tree_sitter::Node,
    style: TreeStyle,
    max_depth: Option<usize>,
) -> String {
    match style {
        TreeStyle::Sexp => root.to_sexp(),
        TreeStyle::Indented => render_indented(root, max_depth),
        TreeStyle::None => String::new(),
    }
}

fn render_indented(root: &tree_sitter::Node, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    let mut stack = vec![(*root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if max_depth.is_some_and(|max| depth > max) {
            continue;
        }
        let marker = if node.is_missing() { " (MISSING)" } else { "" };
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}{} {}{marker}",
            "  ".repeat(depth),
            node.kind(),
            node_range(&node)
        );

        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }

    // Drop the trailing newline; callers add their own.
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Write the report section for one parsed file.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_outcome<W: Write>(
    w: &mut W,
    outcome: &ParseOutcome,
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{} {}", options.header("Parsing file:"), outcome.file_name)?;

    if options.tree_style != TreeStyle::None {
        writeln!(w, "{}", options.header("Syntax tree:"))?;
        writeln!(
            w,
            "{}",
            render_tree(&outcome.root_node(), options.tree_style, options.max_depth)
        )?;
    }

    writeln!(w)?;
    writeln!(w, "{}", options.header("Special syntax:"))?;
    if outcome.special_structures.is_empty() {
        writeln!(
            w,
            "{}",
            options.dim(&format!("no {}-specific syntax found", outcome.language))
        )?;
        return Ok(());
    }

    for kind in &outcome.special_structures {
        writeln!(w, "found {}-specific syntax: {kind}", outcome.language)?;
    }

    let tally = outcome
        .special_counts()
        .iter()
        .map(|(kind, count)| format!("{kind} x{count}"))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(w, "{}", options.dim(&format!("({tally})")))
}

/// Write a line describing a skipped task.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_failure<W: Write>(
    w: &mut W,
    error: &TaskError,
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {} [{}]: {} ({})",
        options.error("skipped"),
        error.file_name(),
        error.language,
        error.message,
        error.kind
    )
}

/// Write the closing summary line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_summary<W: Write>(
    w: &mut W,
    summary: &RunSummary,
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "{}",
        options.dim(&format!(
            "{} file(s) parsed, {} failed, {} special node(s) found",
            summary.files_parsed, summary.files_failed, summary.special_nodes_found
        ))
    )
}

/// Write a full report: outcomes to `out`, failures to `err`, then the summary
/// to `out`.
///
/// # Errors
///
/// Returns any error from the underlying writers.
pub fn write_report<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    results: &[TaskResult],
    options: &ReportOptions,
) -> io::Result<RunSummary> {
    for result in results {
        match result {
            Ok(outcome) => write_outcome(out, outcome, options)?,
            Err(e) => write_failure(err, e, options)?,
        }
    }

    let summary = RunSummary::from_results(results);
    write_summary(out, &summary, options)?;
    Ok(summary)
}
