//! `syntax-spotter run` command implementation.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use syntax_spotter::report::{self, ReportOptions, TreeStyle};
use syntax_spotter::{Config, Error, Orchestrator, Task};
use tracing::debug;

use super::load_config;

/// Tree rendering choices on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TreeStyleArg {
    /// Tree-sitter S-expression
    #[default]
    Sexp,
    /// Indented outline of named nodes with positions
    Indented,
    /// Do not print the tree
    None,
}

impl From<TreeStyleArg> for TreeStyle {
    fn from(arg: TreeStyleArg) -> Self {
        match arg {
            TreeStyleArg::Sexp => Self::Sexp,
            TreeStyleArg::Indented => Self::Indented,
            TreeStyleArg::None => Self::None,
        }
    }
}

/// Arguments for the run command.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Directory that configured sample paths are resolved against
    #[arg(short, long)]
    pub samples_dir: Option<PathBuf>,

    /// File to parse as PATH[=LANGUAGE]; replaces the configured tasks (repeatable).
    /// Relative paths resolve against --samples-dir when it is given
    #[arg(short, long = "task", value_name = "PATH[=LANGUAGE]", value_parser = Task::parse_arg)]
    pub tasks: Vec<Task>,

    /// How to print each syntax tree
    #[arg(long, value_enum, default_value_t)]
    pub tree_style: TreeStyleArg,

    /// Deepest tree level printed by the indented style
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Run the run command.
pub fn run(config_path: Option<&Path>, args: &RunArgs) -> Result<(), Error> {
    let mut config = load_config(config_path)?;
    if let Some(dir) = &args.samples_dir {
        config.samples_dir.clone_from(dir);
    }

    // Fail fast before any file is touched.
    let registry = config.build_registry()?;
    let tasks = resolve_tasks(&config, args.samples_dir.as_deref(), &args.tasks)?;
    debug!(tasks = tasks.len(), "Resolved tasks");

    let mut orchestrator = Orchestrator::new(registry);
    let results = orchestrator.run(&tasks);

    let options = ReportOptions {
        tree_style: args.tree_style.into(),
        max_depth: args.max_depth,
        ..ReportOptions::from_env()
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    report::write_report(&mut stdout.lock(), &mut stderr.lock(), &results, &options)?;

    Ok(())
}

/// Pick the tasks for this run.
///
/// Command-line tasks win over configured ones. They resolve against
/// `--samples-dir` when it is given and are used as given otherwise.
/// Configured tasks always resolve against the configured samples directory.
fn resolve_tasks(
    config: &Config,
    samples_dir: Option<&Path>,
    cli_tasks: &[Task],
) -> Result<Vec<Task>, Error> {
    if cli_tasks.is_empty() {
        ensure_dir(&config.samples_dir)?;
        return Ok(config.resolved_tasks());
    }

    match samples_dir {
        Some(dir) => {
            ensure_dir(dir)?;
            Ok(cli_tasks
                .iter()
                .cloned()
                .map(|task| task.resolved_against(dir))
                .collect())
        }
        None => Ok(cli_tasks.to_vec()),
    }
}

fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "samples directory not found: {}",
            dir.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_tasks_used_without_cli_tasks() {
        let config = Config::default();
        let tasks = resolve_tasks(&config, None, &[]).expect("bundled samples exist");

        assert_eq!(tasks.len(), 3);
        assert!(tasks[0].path.starts_with(&config.samples_dir));
    }

    #[test]
    fn cli_tasks_replace_configured_tasks() {
        let cli = vec![Task::new("other/a.py", "Python")];
        let tasks = resolve_tasks(&Config::default(), None, &cli).expect("no directory check");

        assert_eq!(tasks, cli);
    }

    #[test]
    fn cli_tasks_resolve_against_samples_dir_flag() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let cli = vec![Task::detect("a.js")];

        let tasks = resolve_tasks(&Config::default(), Some(dir.path()), &cli)
            .expect("directory exists");

        assert_eq!(tasks[0].path, dir.path().join("a.js"));
    }

    #[test]
    fn missing_configured_samples_dir_is_rejected() {
        let config = Config {
            samples_dir: PathBuf::from("no/such/dir"),
            ..Config::default()
        };

        let err = resolve_tasks(&config, None, &[]).expect_err("directory is missing");
        assert!(err.to_string().contains("samples directory not found"));
    }

    #[test]
    fn cli_tasks_without_samples_dir_skip_directory_check() {
        let config = Config {
            samples_dir: PathBuf::from("no/such/dir"),
            ..Config::default()
        };
        let cli = vec![Task::detect("a.py")];

        assert!(resolve_tasks(&config, None, &cli).is_ok());
    }

    #[test]
    fn tree_style_arg_maps_to_report_style() {
        assert_eq!(TreeStyle::from(TreeStyleArg::Indented), TreeStyle::Indented);
        assert_eq!(TreeStyle::from(TreeStyleArg::default()), TreeStyle::Sexp);
    }
}
