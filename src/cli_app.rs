//! Top-level CLI definition and dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell as CompletionShell, generate};
use colored::control;
use thiserror::Error;

use unit_test_helper::check::stringize::Stringize;
use unit_test_helper::check::verbosity::Verbosity;
use unit_test_helper::core::config::Config;
use unit_test_helper::core::errors::UthError;
use unit_test_helper::report::callback::CallbackSink;
use unit_test_helper::session::{Session, SessionBuilder};
use unit_test_helper::{
    uth_check, uth_eq, uth_fn, uth_group, uth_method, uth_op, uth_ret_fn, uth_ret_method,
    uth_ret_op,
};

/// Unit Test Helper: in-process checks with grouped, leveled reports.
#[derive(Debug, Parser)]
#[command(
    name = "uth",
    author,
    version,
    about = "Unit Test Helper - in-process assertion and report engine",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Run the bundled demonstration suites.
    Demo(DemoArgs),
    /// Inspect the effective configuration.
    Config(ConfigArgs),
    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args)]
struct DemoArgs {
    /// Suites to run, in order.
    #[arg(long, value_enum, value_delimiter = ',', default_value = "all")]
    suite: Vec<Suite>,
    /// Verbosity preset or comma-separated flag names.
    #[arg(long, value_name = "FLAGS")]
    verbosity: Option<String>,
    /// Also write the report to a timestamped text file under this directory.
    #[arg(long, value_name = "DIR")]
    log_file: Option<PathBuf>,
    /// Also write one JSONL record per report event to this path.
    #[arg(long, value_name = "PATH")]
    jsonl: Option<PathBuf>,
    /// Stop at the first failing check.
    #[arg(long)]
    exit_on_failure: bool,
    /// Seed for the random helper.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Suite {
    /// Checks that all pass.
    Success,
    /// Checks that fail, with rendered params.
    Failure,
    /// Nested groups with mixed outcomes.
    Groups,
    /// User notification sinks and user data.
    Callbacks,
    /// Every suite above.
    All,
}

#[derive(Debug, Clone, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Print the config file path in use.
    Path,
    /// Print the effective configuration as TOML.
    Show,
    /// Load and validate, reporting the first problem.
    Validate,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Configuration or library failure.
    #[error(transparent)]
    Uth(#[from] UthError),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI. `1` is reserved for failed
    /// checks.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 2,
            Self::Uth(_) | Self::Io(_) => 3,
        }
    }
}

/// Dispatch CLI commands. Returns the process exit code.
pub fn run(cli: &Cli) -> Result<i32, CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        Command::Demo(args) => run_demo(cli, args),
        Command::Config(args) => run_config(cli, args),
        Command::Completions(args) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(0)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.output.color = false;
    }
    Ok(config)
}

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<i32, CliError> {
    let mut stdout = io::stdout();
    match args.command {
        Some(ConfigCommand::Path) => {
            let path = cli.config.clone().unwrap_or_else(Config::default_path);
            writeln!(stdout, "{}", path.display())?;
        }
        None | Some(ConfigCommand::Show) => {
            let config = load_config(cli)?;
            let rendered = toml::to_string_pretty(&config).map_err(|e| UthError::Serialization {
                context: "config show",
                details: e.to_string(),
            })?;
            write!(stdout, "{rendered}")?;
        }
        Some(ConfigCommand::Validate) => {
            let config = load_config(cli)?;
            let source = config
                .config_file
                .as_ref()
                .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
            writeln!(stdout, "configuration OK ({source})")?;
        }
    }
    Ok(0)
}

fn run_demo(cli: &Cli, args: &DemoArgs) -> Result<i32, CliError> {
    let mut config = load_config(cli)?;
    if let Some(raw) = &args.verbosity {
        config.report.verbosity = raw
            .parse::<Verbosity>()
            .map_err(|e| CliError::User(e.to_string()))?;
    }
    if let Some(dir) = &args.log_file {
        config.output.text_file = true;
        config.output.log_dir.clone_from(dir);
    }
    if let Some(path) = &args.jsonl {
        config.output.jsonl = Some(path.clone());
    }
    if args.exit_on_failure {
        config.run.exit_on_failure = true;
    }
    if args.seed.is_some() {
        config.run.seed = args.seed;
    }
    config.validate()?;

    let suites = expand_suites(&args.suite);
    let mut session = if suites.contains(&Suite::Callbacks) {
        demo_listeners(SessionBuilder::from_config(&config)).build()
    } else {
        Session::from_config(&config)
    };

    for suite in suites {
        match suite {
            Suite::Success => success_suite(&mut session),
            Suite::Failure => failure_suite(&mut session),
            Suite::Groups => groups_suite(&mut session),
            Suite::Callbacks => callbacks_suite(&mut session),
            Suite::All => {}
        }
    }

    Ok(session.finish().exit_code)
}

fn expand_suites(requested: &[Suite]) -> Vec<Suite> {
    let mut suites = Vec::new();
    for suite in requested {
        let expanded: &[Suite] = if *suite == Suite::All {
            &[Suite::Success, Suite::Failure, Suite::Groups, Suite::Callbacks]
        } else {
            std::slice::from_ref(suite)
        };
        for s in expanded {
            if !suites.contains(s) {
                suites.push(*s);
            }
        }
    }
    suites
}

// ──────────────────────── demo suites ────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Light {
    Red = 1,
    Green = 3,
}
unit_test_helper::stringize_repr!(Light as i32);

struct Opaque;
impl Stringize for Opaque {}

impl PartialEq for Opaque {
    fn eq(&self, _: &Self) -> bool {
        false
    }
}

struct Matrix([[i32; 2]; 2]);

impl Stringize for Matrix {
    fn stringize(&self) -> String {
        self.0
            .iter()
            .map(|row| row.stringize())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

struct Accumulator {
    total: i64,
}

impl Stringize for Accumulator {
    fn stringize(&self) -> String {
        format!("Accumulator {{ total: {} }}", self.total)
    }
}

impl Accumulator {
    fn add(&mut self, v: i64) -> i64 {
        self.total += v;
        self.total
    }

    fn is_positive(&self) -> bool {
        self.total > 0
    }
}

fn is_even(n: i32) -> bool {
    n % 2 == 0
}

fn square(n: i32) -> i32 {
    n * n
}

fn success_suite(s: &mut Session) {
    uth_group!(s, "success", {
        let a = s.rng().rand_range(0, 100);
        uth_eq!(s, a, a);
        uth_eq!(s, 0.1 + 0.2, 0.3, 1e-9);
        uth_eq!(s, [1, 2, 3], [1, 2, 3]);
        uth_eq!(s, Light::Green, Light::Green);
        uth_check!(s, "uth".starts_with('u'));
        uth_fn!(s, is_even(4));
        uth_ret_fn!(s, 9, square(3));
        let mut acc = Accumulator { total: 0 };
        uth_ret_method!(s, 5, acc, add(5));
        uth_method!(s, acc, is_positive());
        uth_op!(s, 2, <, 3);
        uth_ret_op!(s, 12, 3, *, 4);
    });
}

fn failure_suite(s: &mut Session) {
    uth_group!(s, "failure", {
        uth_eq!(s, 4, 5);
        uth_eq!(s, 1.0_f64, 1.5, 0.5);
        uth_eq!(s, Light::Red, Light::Green);
        uth_eq!(s, Opaque, Opaque);
        uth_eq!(s, Matrix([[1, 0], [0, 1]]), Matrix([[1, 0], [1, 1]]));
        uth_fn!(s, is_even(7));
    });
}

fn groups_suite(s: &mut Session) {
    uth_group!(s, "outer", {
        uth_group!(s, "clean", {
            uth_op!(s, 10, >=, 10);
        });
        uth_group!(s, "dirty", {
            uth_group!(s, "deepest", {
                uth_eq!(s, "left", "right");
            });
            uth_check!(s, true);
        });
    });
}

/// Collects what the notification sinks observed.
#[derive(Debug, Default)]
struct Observed {
    groups_failed: u32,
}

fn demo_listeners(builder: SessionBuilder) -> SessionBuilder {
    builder.user_data(Observed::default()).listener(
        CallbackSink::new()
            .with_group_end(|ctx, group| {
                let note = ctx
                    .user_data::<Observed>()
                    .map_or(0, |o| o.groups_failed);
                let _ = writeln!(
                    io::stdout(),
                    "[callback] group {:?} closed with code {} ({note} failed group(s) noted before)",
                    group.name,
                    group.exit_code()
                );
            })
            .with_finish(|_, outcome| {
                let _ = writeln!(io::stdout(), "[callback] run finished: {outcome:?}");
            }),
    )
}

fn callbacks_suite(s: &mut Session) {
    let group = uth_group!(s, "callbacks", {
        uth_check!(s, s.depth() == 1);
        uth_eq!(s, s.group_path().len(), 1);
    });
    if group.local_failed
        && let Some(observed) = s.user_data_mut::<Observed>()
    {
        observed.groups_failed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn all_expands_without_duplicates() {
        assert_eq!(
            expand_suites(&[Suite::Groups, Suite::All]),
            vec![Suite::Groups, Suite::Success, Suite::Failure, Suite::Callbacks]
        );
    }

    #[test]
    fn demo_suites_produce_expected_outcome() {
        let mut s = Session::builder().seed(9).build();
        success_suite(&mut s);
        assert!(!s.failed());
        groups_suite(&mut s);
        assert!(s.failed());
        assert_eq!(s.groups_run().failure, 3);
        assert_eq!(s.groups_run().success, 2);
    }

    #[test]
    fn config_path_prints_explicit_path() {
        let cli = Cli::parse_from(["uth", "--config", "/tmp/x.toml", "config", "path"]);
        assert_eq!(run(&cli).unwrap(), 0);
    }
}
