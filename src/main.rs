//! # extsync
//!
//! Installs the VS Code extensions listed in
//! `~/dotfiles/vscode/vscode_extensions` that are not installed yet.
//!
//! The command takes no arguments. It exits with a failure status only when
//! the list or the installed extensions cannot be read; a missing `code`
//! binary or a failed single install is reported on the console instead.

use anyhow::Result;
use clap::Parser;
use extsync::cmd_sync;

/// Command-line interface definition.
///
/// There are no options; clap only provides `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "extsync",
    version,
    about = "Install missing VS Code extensions from your dotfiles list"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    cmd_sync()?;
    Ok(())
}
