//! Typed errors for the two places where the caller needs to branch on
//! the failure kind: the environment preflight and external commands.
//! Everything else is reported through `anyhow`.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// The environment cannot support a run at all.
///
/// These end the run early with a diagnostic but are not treated as a
/// failed run by the process exit status.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The editor CLI is not on the search path.
    #[error(
        "VS Code command '{0}' not found in PATH. Please ensure VS Code is installed and the '{0}' command is accessible."
    )]
    MissingBinary(String),

    /// Could not determine the user's home directory.
    #[error("cannot determine home directory")]
    NoHome,
}

/// Failure of one invocation of the editor CLI.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The process ran and exited unsuccessfully.
    #[error("{program} exited with {status}")]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        output: String,
    },
}

impl CommandError {
    /// Combined stdout/stderr captured before the failure, if any.
    pub fn output(&self) -> &str {
        match self {
            CommandError::Spawn { .. } => "",
            CommandError::Failed { output, .. } => output,
        }
    }
}
