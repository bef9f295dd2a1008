//! Common display utilities for CLI commands.

use colored::Colorize;
use syntax_spotter::GrammarEntry;

const MAX_DISPLAY_ITEMS: usize = 10;

/// Print one registered grammar with its extensions and special node kinds.
///
/// Shows up to `MAX_DISPLAY_ITEMS` kinds with bullet points; if there are
/// more, shows "... and N more".
pub fn print_grammar(entry: &GrammarEntry) {
    let extensions = entry
        .extensions
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "  {} {}",
        entry.name.white().bold(),
        extensions.dimmed()
    );

    if entry.special_node_types.is_empty() {
        println!("    {}", "no special node kinds".dimmed());
        return;
    }

    for kind in entry.special_node_types.iter().take(MAX_DISPLAY_ITEMS) {
        println!("    {} {kind}", "•".dimmed());
    }

    if entry.special_node_types.len() > MAX_DISPLAY_ITEMS {
        println!(
            "    {} ... and {} more",
            "•".dimmed(),
            entry.special_node_types.len() - MAX_DISPLAY_ITEMS
        );
    }
}
