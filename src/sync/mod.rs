mod diff;
mod install;
mod progress;
#[cfg(test)]
mod testing;

use anyhow::Result;
use colored::Colorize;
use indicatif::MultiProgress;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::config::{Settings, read_desired};
use crate::editor::{CodeCli, Editor};
use crate::error::EnvError;
use crate::logging;
use crate::paths::{home_dir, paths_under};

pub use diff::missing_extensions;
pub use install::{InstallFailure, install_missing};

/// How a sync run ended.
///
/// Fatal errors (unreadable list, failed enumeration, bad settings) are
/// returned as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// `code` is not on PATH; nothing was read or installed.
    MissingDependency,
    /// The home directory could not be resolved.
    NoHome,
    /// Every desired extension is already installed.
    UpToDate,
    /// Installation was attempted for the missing extensions.
    Installed {
        attempted: Vec<String>,
        failed: Vec<String>,
    },
}

/// CLI command: install every extension listed in the desired-extensions
/// file that `code --list-extensions` does not report.
///
/// High-level flow:
/// 1. Make sure `code` resolves on PATH; otherwise print a notice and stop.
/// 2. Load optional settings and the desired list (`~/dotfiles/vscode/vscode_extensions`).
/// 3. Ask `code` for the installed extensions.
/// 4. Install the missing ones sequentially, one spinner per extension.
///
/// # Errors
/// - The settings file exists but is unreadable or malformed.
/// - The desired list cannot be read.
/// - Listing installed extensions fails.
///
/// A failed install of a single extension is reported, not returned.
pub fn cmd_sync() -> Result<SyncOutcome> {
    let mp = MultiProgress::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    sync_with(CodeCli::locate, home_dir, &mp, &mut out)
}

/// [`cmd_sync`] with the environment lookups injected.
///
/// `locate` runs first; when it fails neither `home` nor any file is
/// touched.
pub fn sync_with<E, L, H, W>(
    locate: L,
    home: H,
    mp: &MultiProgress,
    out: &mut W,
) -> Result<SyncOutcome>
where
    E: Editor,
    L: FnOnce() -> Result<E, EnvError>,
    H: FnOnce() -> Result<PathBuf, EnvError>,
    W: Write,
{
    let editor = match locate() {
        Ok(editor) => editor,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(SyncOutcome::MissingDependency);
        }
    };

    let home = match home() {
        Ok(home) => home,
        Err(e) => {
            writeln!(out, "Error getting home directory: {}", e)?;
            return Ok(SyncOutcome::NoHome);
        }
    };

    let p = paths_under(&home);
    let settings = match Settings::load(&p) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init(Settings::default().log_level());
            error!(error = %format!("{e:#}"), "settings could not be loaded");
            return Err(e);
        }
    };
    logging::init(settings.log_level());

    let list = settings.extensions_path(&p);
    debug!(path = %list.display(), "desired extensions list");
    sync_list(&editor, &list, mp, out)
}

/// Read the desired list at `list` and reconcile it against `editor`.
pub fn sync_list<E: Editor, W: Write>(
    editor: &E,
    list: &Path,
    mp: &MultiProgress,
    out: &mut W,
) -> Result<SyncOutcome> {
    let desired = read_desired(list)?;
    reconcile(editor, desired, mp, out)
}

/// Compare `desired` with what `editor` reports and install the difference.
///
/// Status lines and install errors go to `out` as they happen; the
/// per-extension spinners go to `mp`. `Done!` is written once every
/// missing extension has been attempted.
pub fn reconcile<E: Editor, W: Write>(
    editor: &E,
    desired: Vec<String>,
    mp: &MultiProgress,
    out: &mut W,
) -> Result<SyncOutcome> {
    let installed = editor.list_extensions().map_err(|e| {
        let output = e.output().trim().to_string();
        anyhow::Error::new(e).context(format!(
            "error getting installed VS Code extensions, output: {}",
            output
        ))
    })?;
    debug!(desired = desired.len(), installed = installed.len(), "comparing extensions");

    let missing = missing_extensions(desired, installed);
    debug!(?missing, "missing extensions");

    write!(out, "Checking for uninstalled VSCode extensions...")?;
    if missing.is_empty() {
        writeln!(out, "{}", "all good!".green())?;
        return Ok(SyncOutcome::UpToDate);
    }
    writeln!(out, "found {}.", missing.len())?;
    out.flush()?;

    let failures = install_missing(editor, &missing, mp, out)?;

    writeln!(out, "{}", "Done!".green())?;

    Ok(SyncOutcome::Installed {
        attempted: missing,
        failed: failures.into_iter().map(|f| f.id).collect(),
    })
}
