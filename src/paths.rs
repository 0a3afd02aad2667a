use std::path::{Path, PathBuf};

use crate::error::EnvError;

#[derive(Clone, Debug)]
pub struct Paths {
    pub home: PathBuf,
    pub extensions: PathBuf,
    pub settings: PathBuf,
}

/// Resolve the user's home directory.
///
/// # Errors
/// Returns [`EnvError::NoHome`] when the platform cannot report one.
pub fn home_dir() -> Result<PathBuf, EnvError> {
    dirs::home_dir().ok_or(EnvError::NoHome)
}

/// Fixed layout relative to `home`.
///
/// - desired list: `~/dotfiles/vscode/vscode_extensions`
/// - settings: `~/.config/extsync/config.toml`
pub fn paths_under(home: &Path) -> Paths {
    Paths {
        home: home.to_path_buf(),
        extensions: home.join("dotfiles").join("vscode").join("vscode_extensions"),
        settings: home.join(".config").join("extsync").join("config.toml"),
    }
}

/// Expand a user-supplied path: `~` and `~/...` are taken from `home`,
/// other relative paths are joined onto `home`.
pub fn expand_home(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return home.join(rest);
    }
    let p = Path::new(raw);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        home.join(p)
    }
}
