use std::process::Command;

use super::indexed_timing::IndexedTiming;
use super::keyed_timing::KeyedTiming;
use crate::lib::clock::Clock;
use crate::lib::constants::{SHELL, SHELL_ARG};
use crate::lib::error::AppError;

const PATH: &str = "models/runner";
const FN_EXECUTE: &str = "execute";

/// Runs shell commands one after another, timing each.
pub struct CommandRunner {
    commands: Vec<String>,
}

impl CommandRunner {
    pub fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Time each command under its own text.
    pub fn run_keyed<C: Clock>(&self, timing: &mut KeyedTiming<C>) -> Result<(), AppError> {
        for command in &self.commands {
            timing.tic(command);
            Self::execute(command)?;
            timing.toc(command);
        }
        Ok(())
    }

    /// Time the ith command in the ith slot.
    pub fn run_indexed<C: Clock>(&self, timing: &mut IndexedTiming<C>) -> Result<(), AppError> {
        for (i, command) in self.commands.iter().enumerate() {
            timing.tic(i)?;
            Self::execute(command)?;
            timing.toc(i)?;
        }
        Ok(())
    }

    // a failing command is still timed
    fn execute(command: &str) -> Result<(), AppError> {
        log::info!("running `{}`", command);
        let status = Command::new(SHELL)
            .arg(SHELL_ARG)
            .arg(command)
            .status()
            .map_err(|e| AppError::new(PATH, FN_EXECUTE, "00", &e.to_string()))?;

        if !status.success() {
            log::warn!("`{}` exited with {}", command, status);
        }
        Ok(())
    }
}
