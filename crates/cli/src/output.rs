//! User-facing messages
//!
//! Success output goes to stdout, warnings and errors to stderr.

use std::path::Path;

use colored::Colorize;
use napp_codegen::GeneratedProject;
use napp_core::NappError;

/// The "next steps" lines printed after a successful run.
pub fn next_steps(root: &Path) -> Vec<String> {
    vec![
        format!("cd {}", root.display()),
        "go mod init <path/your-project>".to_string(),
        "go mod tidy".to_string(),
        "go run cmd/main.go".to_string(),
    ]
}

/// Print the success banner, any generation warnings, and the next steps.
pub fn print_success(project: &GeneratedProject, root: &Path) {
    println!(
        "{}",
        format!("Successfully created {}, next steps:", project.name)
            .green()
            .bold()
    );
    for step in next_steps(root) {
        println!("{step}");
    }

    for warning in &project.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}

/// Usage line shown under errors the user can fix by changing the command line.
pub fn usage_hint(err: &NappError) -> Option<&'static str> {
    err.is_validation()
        .then_some("Usage: napp init <project-name> (see 'napp init --help')")
}

/// Print a fatal error.
pub fn print_error(err: &NappError) {
    eprintln!("{}", err.to_string().red());
    if let Some(hint) = usage_hint(err) {
        eprintln!("{hint}");
    }
}
