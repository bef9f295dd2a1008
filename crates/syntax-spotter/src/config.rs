//! Run configuration.
//!
//! A run is described by a samples directory, a task list, the languages that
//! must be registered before anything is parsed, and optional extra special
//! node kinds per language. Defaults reproduce the bundled three-sample run;
//! a YAML file can replace any part of it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::GrammarRegistry;
use crate::types::Task;

/// Samples bundled with the crate, parsed when no tasks are given.
pub const DEFAULT_SAMPLES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples");

/// A task entry in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskConfig {
    /// File path, relative to the samples directory unless absolute.
    pub file: PathBuf,
    /// Language name; detected from the extension when omitted.
    #[serde(default)]
    pub language: Option<String>,
}

impl From<&TaskConfig> for Task {
    fn from(config: &TaskConfig) -> Self {
        Self {
            path: config.file.clone(),
            language: config.language.clone(),
        }
    }
}

/// Configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory that relative task paths are resolved against.
    #[serde(default = "default_samples_dir")]
    pub samples_dir: PathBuf,

    /// Languages that must be registered before the run starts.
    #[serde(default)]
    pub required_languages: Vec<String>,

    /// Files to parse, in order.
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskConfig>,

    /// Extra special node kinds, keyed by language name.
    #[serde(default)]
    pub special_nodes: BTreeMap<String, Vec<String>>,
}

fn default_samples_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SAMPLES_DIR)
}

fn default_tasks() -> Vec<TaskConfig> {
    [
        ("example.py", "Python"),
        ("example.rs", "Rust"),
        ("example.js", "JavaScript"),
    ]
    .into_iter()
    .map(|(file, language)| TaskConfig {
        file: PathBuf::from(file),
        language: Some(language.to_string()),
    })
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples_dir: default_samples_dir(),
            required_languages: Vec::new(),
            tasks: default_tasks(),
            special_nodes: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse configuration from YAML text.
    ///
    /// Relative `samples_dir` values are kept as written; see [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the YAML is malformed or has unknown fields.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a YAML file.
    ///
    /// A relative `samples_dir` is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, `Error::Config` if it
    /// cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("cannot read config {}: {e}", path.display()),
            ))
        })?;

        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        if config.samples_dir.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.samples_dir = base.join(&config.samples_dir);
        }

        debug!(
            path = %path.display(),
            tasks = config.tasks.len(),
            samples_dir = %config.samples_dir.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Tasks with paths resolved against `samples_dir`.
    #[must_use]
    pub fn resolved_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .map(|t| Task::from(t).resolved_against(&self.samples_dir))
            .collect()
    }

    /// Build the registry for this run: built-ins, plus extra special kinds,
    /// checked against `required_languages`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if an override names an unregistered language or
    /// a required language is missing.
    pub fn build_registry(&self) -> Result<GrammarRegistry> {
        let mut registry = GrammarRegistry::builtin();
        for (language, kinds) in &self.special_nodes {
            registry.extend_special_nodes(language, kinds.iter().cloned())?;
        }
        registry.require(self.required_languages.as_slice())?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_config_lists_three_samples() {
        let config = Config::default();
        let tasks = config.resolved_tasks();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].path, Path::new(DEFAULT_SAMPLES_DIR).join("example.py"));
        assert_eq!(tasks[1].language.as_deref(), Some("Rust"));
        assert_eq!(tasks[2].language.as_deref(), Some("JavaScript"));
    }

    #[test]
    fn bundled_samples_exist() {
        for task in Config::default().resolved_tasks() {
            assert!(task.path.is_file(), "missing sample {}", task.path.display());
        }
    }

    #[test]
    fn from_yaml_fills_defaults() {
        let config = Config::from_yaml("required_languages: [Rust]\n").expect("valid yaml");

        assert_eq!(config.required_languages, vec!["Rust"]);
        assert_eq!(config.tasks, default_tasks());
        assert_eq!(config.samples_dir, default_samples_dir());
    }

    #[test]
    fn from_yaml_reads_tasks_and_overrides() {
        let yaml = "\
tasks:
  - file: a.py
    language: Python
  - file: b.js
special_nodes:
  Python: [lambda]
";
        let config = Config::from_yaml(yaml).expect("valid yaml");

        assert_eq!(config.tasks.len(), 2);
        assert_eq!(config.tasks[1].language, None);
        assert_eq!(config.special_nodes["Python"], vec!["lambda"]);
    }

    #[test]
    fn from_yaml_rejects_unknown_fields() {
        let err = Config::from_yaml("sample_dir: typo\n").expect_err("unknown field");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_resolves_samples_dir_against_config_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("spotter.yaml");
        fs::write(&path, "samples_dir: src\ntasks:\n  - file: x.rs\n").expect("should write");

        let config = Config::load(&path).expect("should load");
        let tasks = config.resolved_tasks();

        assert_eq!(config.samples_dir, dir.path().join("src"));
        assert_eq!(tasks[0].path, dir.path().join("src").join("x.rs"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("should create temp dir");

        let err = Config::load(&dir.path().join("nope.yaml")).expect_err("missing");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn build_registry_applies_overrides() {
        let mut config = Config::default();
        config.special_nodes.insert("Python".into(), vec!["lambda".into()]);

        let registry = config.build_registry().expect("valid config");
        let python = registry.lookup("Python").expect("builtin");
        assert!(python.special_node_types.contains("lambda"));
    }

    #[test]
    fn build_registry_fails_fast_on_missing_required_language() {
        let config = Config {
            required_languages: vec!["Python".into(), "Haskell".into()],
            ..Config::default()
        };

        let err = config.build_registry().expect_err("Haskell is not built in");
        assert!(err.to_string().contains("Haskell"));
    }
}
