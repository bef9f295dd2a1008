//! `syntax-spotter languages` command implementation.

use std::path::Path;

use colored::Colorize;
use syntax_spotter::Error;

use super::display::print_grammar;
use super::load_config;

/// Run the languages command.
pub fn run(config_path: Option<&Path>) -> Result<(), Error> {
    let config = load_config(config_path)?;
    let registry = config.build_registry()?;

    println!(
        "{} ({}):",
        "Registered languages".cyan().bold(),
        registry.entries().len()
    );
    for entry in registry.entries() {
        print_grammar(entry);
    }

    Ok(())
}
