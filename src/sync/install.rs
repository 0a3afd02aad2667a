use indicatif::MultiProgress;
use std::io::{self, Write};
use tracing::warn;

use super::progress::{err_style, ok_style, start_spinner};
use crate::editor::Editor;
use crate::error::CommandError;

/// One extension that could not be installed.
#[derive(Debug)]
pub struct InstallFailure {
    pub id: String,
    pub error: CommandError,
}

/// Install every identifier in `missing`, strictly one after another.
///
/// Each extension gets its own spinner line on `mp`. When `mp` is not drawn
/// (stderr is not a terminal) an `Installing <id>...` line goes to `out`
/// instead. A failed install is written to `out` with the captured output
/// right away and recorded in the returned list; the remaining extensions
/// are still attempted.
///
/// # Errors
/// Only writing to `out` can fail.
pub fn install_missing<E: Editor, W: Write>(
    editor: &E,
    missing: &[String],
    mp: &MultiProgress,
    out: &mut W,
) -> io::Result<Vec<InstallFailure>> {
    let mut failures = Vec::new();

    for id in missing {
        if mp.is_hidden() {
            writeln!(out, "Installing {}...", id)?;
            out.flush()?;
        }
        let pb = start_spinner(mp, format!("installing {}", id));

        match editor.install_extension(id) {
            Ok(()) => {
                pb.set_style(ok_style());
                pb.finish_with_message(format!("installed {}", id));
            }
            Err(e) => {
                warn!(extension = %id, error = %e, "install failed");
                pb.set_style(err_style());
                pb.finish_with_message(format!("installing {} (error: {})", id, e));
                writeln!(
                    out,
                    "Error installing extension '{}': {}, output: {}",
                    id,
                    e,
                    e.output().trim()
                )?;
                failures.push(InstallFailure {
                    id: id.clone(),
                    error: e,
                });
            }
        }
    }

    Ok(failures)
}
