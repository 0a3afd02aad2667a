//! Editor integration layer.
//!
//! The reconciler only talks to the [`Editor`] trait. The concrete backend
//! (`code_cli`) shells out to the VS Code command-line tool; tests swap in a
//! recording fake so no process is spawned.

mod code_cli;

use crate::error::CommandError;

pub use code_cli::{CODE_BIN, CodeCli};

/// Operations the reconciler needs from an editor.
pub trait Editor {
    /// Installed extension identifiers, one per entry, whitespace trimmed.
    fn list_extensions(&self) -> Result<Vec<String>, CommandError>;

    /// Install a single extension by identifier.
    fn install_extension(&self, id: &str) -> Result<(), CommandError>;
}
