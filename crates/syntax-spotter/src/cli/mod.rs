//! CLI command implementations.

mod display;

pub mod languages;
pub mod run;

use std::path::Path;

use syntax_spotter::{Config, Error};

/// Load the configuration file if one was given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}
