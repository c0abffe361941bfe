//! # napp CLI
//!
//! Command-line interface for napp.
//!
//! ## Commands
//!
//! - `init <project-name>` (alias `i`) - create a new Go, HTMX and SQLite project
//!
//! ## Exit codes
//!
//! - `0` - project created, or `--help` / `--version` shown
//! - `1` - any argument, validation, or filesystem error
//!

pub mod output;
pub mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use napp_codegen::{DEFAULT_SESSION_SECRET, GeneratedProject, Generator, ScaffoldConfig, summarize};
use napp_core::NappResult;

pub use validate::project_request_from_args;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status for every failure
pub const EXIT_FAILURE: u8 = 1;

// ============================================================================
// Command surface
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "napp",
    version = VERSION,
    about = "Bootstraps Go, HTMX and SQLite web applications",
    long_about = "A command line tool that bootstraps Go, HTMX and SQLite web \
                  applications and Dockerises them for ease of deployment",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialise a new napp project ready for development
    #[command(visible_alias = "i", override_usage = "napp init <project-name>")]
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name: lowercase letters, digits and hyphens
    #[arg(value_name = "PROJECT_NAME", allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Positionals after the project name, kept to report how many arrived
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Directory to create the project in
    #[arg(short, long, env = "NAPP_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not write a Makefile
    #[arg(long)]
    pub no_makefile: bool,

    /// Do not write a Dockerfile
    #[arg(long)]
    pub no_docker: bool,

    /// Cookie store secret written to .env
    #[arg(
        long,
        env = "NAPP_SESSION_SECRET",
        default_value = DEFAULT_SESSION_SECRET,
        hide_env_values = true
    )]
    pub session_secret: String,
}

impl InitArgs {
    /// Every positional argument, project name first.
    pub fn names(&self) -> Vec<String> {
        self.name.iter().chain(&self.extra).cloned().collect()
    }

    /// Build the scaffold configuration these flags describe.
    pub fn scaffold_config(&self) -> ScaffoldConfig {
        let mut config = ScaffoldConfig::new()
            .with_output_dir(&self.output_dir)
            .with_session_secret(&self.session_secret);
        if self.no_makefile {
            config = config.without_makefile();
        }
        if self.no_docker {
            config = config.without_dockerfile();
        }
        config
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse `std::env::args`, printing help, version, or usage errors.
///
/// Returns the exit code to stop with when parsing did not produce a command
/// to run.
pub fn parse() -> Result<Cli, ExitCode> {
    parse_from(std::env::args_os())
}

/// Like [`parse`], for an explicit argument list.
pub fn parse_from<I, T>(args: I) -> Result<Cli, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| {
        // Printing only fails when stdout/stderr is closed
        let _ = err.print();
        clap_exit_code(err.kind())
    })
}

/// Help and version output succeed; every other parse failure is status 1.
pub fn clap_exit_code(kind: ErrorKind) -> ExitCode {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(EXIT_FAILURE),
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Run a parsed command line and report the outcome.
pub fn execute(cli: Cli) -> ExitCode {
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::from(EXIT_FAILURE);
    };

    match command {
        Command::Init(args) => match init(&args) {
            Ok((project, root)) => {
                output::print_success(&project, &root);
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::debug!(error = ?err, "init failed");
                output::print_error(&err);
                ExitCode::from(EXIT_FAILURE)
            }
        },
    }
}

/// Validate the arguments and scaffold the project.
///
/// Returns the generated project and the root directory it was written to.
pub fn init(args: &InitArgs) -> NappResult<(GeneratedProject, PathBuf)> {
    let request = project_request_from_args(&args.names())?;
    let generator = Generator::new(args.scaffold_config());
    let root = generator.project_root(&request);

    tracing::debug!(project = %request, root = %root.display(), "scaffolding project");
    let project = generator.generate_and_write(&request)?;
    tracing::debug!("\n{}", summarize(&project));

    Ok((project, root))
}

// ============================================================================
// Tests
// ============================================================================
