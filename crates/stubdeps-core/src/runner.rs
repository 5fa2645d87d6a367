//! Process execution for install commands.

use std::process::Command;

use crate::error::InstallError;

/// Runs a command line and reports its exit code.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> Result<i32, InstallError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, argv: &[String]) -> Result<i32, InstallError> {
        (**self).run(argv)
    }
}

/// Spawns the command as a child process with inherited stdio and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<i32, InstallError> {
        let (program, args) = argv.split_first().ok_or(InstallError::EmptyCommand)?;

        tracing::debug!(program = %program, args = ?args, "Spawning process");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| InstallError::Spawn {
                program: program.clone(),
                source,
            })?;

        // No code means the process was killed by a signal.
        Ok(status.code().unwrap_or(1))
    }
}
