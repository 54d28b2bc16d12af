//! Raw results handed back by whatever executes PowerShell.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Output of one remote invocation, as captured by the executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutput {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(alias = "exit_code", alias = "exitcode")]
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Classify the output: a non-zero exit becomes a command failure carrying `info`.
    pub fn check(&self, info: Option<String>) -> Result<&Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(Error::command_failed(self, info))
        }
    }
}
