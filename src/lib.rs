//! Crate entry point for **extsync**.
//!
//! This library holds the implementation behind the `extsync` CLI, which
//! installs the VS Code extensions listed in `~/dotfiles/vscode/vscode_extensions`
//! that `code --list-extensions` does not report yet.
//! Each submodule owns one concern (paths, settings, the editor CLI, the sync itself).

mod config;
mod editor;
mod error;
mod logging;
mod paths;
mod sync;

pub use config::{Settings, read_desired};
pub use editor::{CODE_BIN, CodeCli, Editor};
pub use error::{CommandError, EnvError};
pub use paths::{Paths, home_dir, paths_under};
pub use sync::{
    InstallFailure, SyncOutcome, cmd_sync, install_missing, missing_extensions, reconcile,
    sync_list, sync_with,
};
