use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::Editor;
use crate::error::{CommandError, EnvError};

/// Name of the VS Code command-line tool.
pub const CODE_BIN: &str = "code";

/// [`Editor`] backed by the `code` executable.
#[derive(Debug, Clone)]
pub struct CodeCli {
    program: PathBuf,
}

impl CodeCli {
    /// Use an already resolved executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CodeCli {
            program: program.into(),
        }
    }

    /// Resolve `code` on the process search path.
    ///
    /// # Errors
    /// Returns [`EnvError::MissingBinary`] when no executable is found.
    pub fn locate() -> Result<Self, EnvError> {
        Self::from_lookup(which::which(CODE_BIN))
    }

    fn from_lookup(found: Result<PathBuf, which::Error>) -> Result<Self, EnvError> {
        found
            .map(Self::new)
            .map_err(|_| EnvError::MissingBinary(CODE_BIN.to_string()))
    }

    /// Run the tool with `args`, returning combined stdout + stderr.
    ///
    /// A non-zero exit is an error that still carries the captured output.
    fn run(&self, args: &[&str]) -> Result<String, CommandError> {
        debug!(program = %self.program.display(), ?args, "running editor cli");
        let out = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&out.stderr));

        if !out.status.success() {
            return Err(CommandError::Failed {
                program: self.program.clone(),
                status: out.status,
                output: combined,
            });
        }
        Ok(combined)
    }
}

impl Editor for CodeCli {
    fn list_extensions(&self) -> Result<Vec<String>, CommandError> {
        let out = self.run(&["--list-extensions"])?;
        Ok(out.split('\n').map(|l| l.trim().to_string()).collect())
    }

    fn install_extension(&self, id: &str) -> Result<(), CommandError> {
        self.run(&["--install-extension", id]).map(|_| ())
    }
}
