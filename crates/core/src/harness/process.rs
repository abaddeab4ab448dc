//! Harness backed by an external program
//!
//! The factory renders `program args... case1 case2 ...` and the instance runs
//! it once, blocking until it exits. Everything the program does with the
//! cases is its own business.

use std::process::ExitStatus;

use tracing::{debug, info};

use super::command::HarnessCommand;
use super::traits::{Harness, HarnessFactory};
use crate::config::HarnessSettings;
use crate::error::HarnessError;
use crate::types::CaseSet;

#[derive(Debug, Clone)]
pub struct CommandHarnessFactory {
    settings: HarnessSettings,
}

impl CommandHarnessFactory {
    pub fn new(settings: HarnessSettings) -> Self {
        Self { settings }
    }
}

impl HarnessFactory for CommandHarnessFactory {
    type Harness = CommandHarness;

    fn construct(&self, cases: CaseSet) -> Result<CommandHarness, HarnessError> {
        let program = self.settings.command.trim();
        if program.is_empty() {
            return Err(HarnessError::MissingProgram);
        }

        let mut command = HarnessCommand::new(program)
            .with_args(self.settings.args.iter().cloned())
            .with_args(cases.to_strings());

        if let Some(ref dir) = self.settings.working_dir {
            command = command.with_working_dir(dir.clone());
        }

        for (key, value) in &self.settings.env {
            command = command.with_env(key.clone(), value.clone());
        }

        debug!("Constructed harness command: {}", command.to_shell_command());
        Ok(CommandHarness { cases, command })
    }

    fn name(&self) -> &str {
        &self.settings.command
    }
}

/// One pending invocation of the harness program
#[derive(Debug, Clone)]
pub struct CommandHarness {
    cases: CaseSet,
    command: HarnessCommand,
}

impl CommandHarness {
    pub fn cases(&self) -> &CaseSet {
        &self.cases
    }

    pub fn command(&self) -> &HarnessCommand {
        &self.command
    }
}

impl Harness for CommandHarness {
    type Output = ExitStatus;
    type Error = HarnessError;

    fn run(self) -> Result<ExitStatus, HarnessError> {
        let shell_cmd = self.command.to_shell_command();
        info!("Running: {}", shell_cmd);
        if let Some(dir) = self.command.working_dir() {
            info!("Working directory: {}", dir.display());
        }

        let status = self.command.execute().map_err(|source| HarnessError::Spawn {
            program: self.command.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(HarnessError::Failed {
                command: shell_cmd,
                code: status.code(),
            });
        }

        Ok(status)
    }
}
