//! Application orchestrator.
//! Initializes logging, invokes the backup, and classifies any failure into
//! one of the user-visible categories with its exit code.

use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

use flatback::output as out;
use flatback::{backup_directory, BackupError};

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> ExitCode {
    init_tracing();
    debug!(
        source = %args.source.display(),
        destination = %args.destination.display(),
        "starting backup"
    );

    match backup_directory(&args.source, &args.destination) {
        Ok(summary) => {
            debug!(
                copied = summary.files_copied,
                skipped = summary.entries_skipped,
                "backup finished"
            );
            out::print_success("Backup completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

/// Single top-level error sink: exactly one printed status line per run, with
/// the exit code mapped from the failure category.
fn report_failure(e: &anyhow::Error) -> ExitCode {
    if let Some(be) = e.downcast_ref::<BackupError>() {
        let code = be.code();
        match be {
            BackupError::SourceNotFound(path) => {
                error!(code, kind = "source_not_found", path = %path.display(), "Backup failed");
                out::print_error(&format!("Error: {be}"));
            }
            BackupError::NotADirectory(path) => {
                error!(code, kind = "not_a_directory", path = %path.display(), "Backup failed");
                out::print_error(&format!("Error: {be}"));
            }
            BackupError::PermissionDenied { path, context } => {
                error!(code, kind = "permission_denied", path = %path.display(), %context, "Backup failed");
                out::print_error(&format!("Permission error: {be}"));
            }
        }
        return ExitCode::from(code);
    }

    // Permission failures that surfaced as raw io::Errors deeper in the chain.
    let denied = e
        .chain()
        .filter_map(|c| c.downcast_ref::<io::Error>())
        .any(|ioe| ioe.kind() == io::ErrorKind::PermissionDenied);
    if denied {
        error!(code = 3u8, kind = "permission_denied", error = ?e, "Backup failed");
        out::print_error(&format!("Permission error: {e:#}"));
        return ExitCode::from(3);
    }

    error!(code = 1u8, kind = "unclassified", error = ?e, "Backup failed");
    out::print_error(&format!("Unexpected error during backup: {e:#}"));
    ExitCode::FAILURE
}
