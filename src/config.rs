use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::paths::{Paths, expand_home};

/// Optional settings loaded from `~/.config/extsync/config.toml`.
///
/// Every key may be omitted; a missing file means all defaults.
///
/// Example TOML:
/// ```toml
/// extensions_file = "~/work/vscode_extensions"
/// log_level = "debug"
/// ```
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub extensions_file: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    /// Load settings from `p.settings`.
    ///
    /// # Errors
    /// - Returns an error if the file exists but cannot be read.
    /// - Returns an error if parsing the TOML fails.
    pub fn load(p: &Paths) -> Result<Settings> {
        let txt = match fs::read_to_string(&p.settings) {
            Ok(txt) => txt,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read settings: {}", p.settings.display()));
            }
        };
        toml::from_str(&txt)
            .with_context(|| format!("failed to parse settings: {}", p.settings.display()))
    }

    /// Path of the desired-extensions list, honouring `extensions_file`.
    pub fn extensions_path(&self, p: &Paths) -> PathBuf {
        match self.extensions_file.as_deref() {
            Some(raw) if !raw.trim().is_empty() => expand_home(raw.trim(), &p.home),
            _ => p.extensions.clone(),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

/// Read the desired-extensions list, one identifier per line.
///
/// Lines are kept as written apart from a trailing `\r`; blank lines are
/// dropped later by the diff, not here. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
///
/// # Errors
/// Returns an error naming `path` if the file cannot be opened or read.
pub fn read_desired(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read extensions file: {}", path.display()))?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(&bytes[..]);
    Ok(body
        .split(|b| *b == b'\n')
        .map(|l| {
            let l = l.strip_suffix(b"\r").unwrap_or(l);
            String::from_utf8_lossy(l).into_owned()
        })
        .collect())
}
