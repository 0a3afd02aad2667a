use std::cell::RefCell;
use std::collections::HashMap;
use std::process::ExitStatus;

use crate::editor::Editor;
use crate::error::CommandError;

#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}

fn failed(output: &str) -> CommandError {
    CommandError::Failed {
        program: "code".into(),
        status: failed_status(),
        output: output.to_string(),
    }
}

/// In-memory editor that records install calls.
pub struct FakeEditor {
    installed: Vec<String>,
    list_error: Option<String>,
    install_errors: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeEditor {
    pub fn new(installed: &[&str]) -> Self {
        FakeEditor {
            installed: installed.iter().map(|s| s.to_string()).collect(),
            list_error: None,
            install_errors: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make `--list-extensions` fail with `output`.
    pub fn list_fails(mut self, output: &str) -> Self {
        self.list_error = Some(output.to_string());
        self
    }

    /// Make installing `id` fail with `output`.
    pub fn failing(mut self, id: &str, output: &str) -> Self {
        self.install_errors.insert(id.to_string(), output.to_string());
        self
    }

    pub fn install_calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Editor for FakeEditor {
    fn list_extensions(&self) -> Result<Vec<String>, CommandError> {
        match &self.list_error {
            Some(out) => Err(failed(out)),
            None => Ok(self.installed.clone()),
        }
    }

    fn install_extension(&self, id: &str) -> Result<(), CommandError> {
        self.calls.borrow_mut().push(id.to_string());
        match self.install_errors.get(id) {
            Some(out) => Err(failed(out)),
            None => Ok(()),
        }
    }
}
