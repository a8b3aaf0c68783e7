//! Command execution: run host commands on behalf of handlers.
//!
//! Commands run through `sh -c` with the session's stdin, stdout and stderr,
//! so interactive tools (certbot's wizard, `systemctl status` paging) talk to
//! the operator directly. A failing command never aborts the session;
//! it comes back as a failed [`CommandResult`] for the handler to report.

use std::process::Command;

use crate::model::CommandResult;

/// Runs one command line to completion.
pub trait Executor {
    fn run(&mut self, command_line: &str) -> CommandResult;
}

/// Runs commands against the host shell.
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn run(&mut self, command_line: &str) -> CommandResult {
        tracing::debug!(command = command_line, "running");

        let status = match Command::new("sh").arg("-c").arg(command_line).status() {
            Ok(status) => status,
            Err(e) => {
                return CommandResult::failure(format!("failed to launch `{command_line}`: {e}"));
            }
        };

        if status.success() {
            return CommandResult::success();
        }

        match status.code() {
            Some(code) => CommandResult::failure(format!("`{command_line}` exited with status {code}")),
            None => CommandResult::failure(format!("`{command_line}` was terminated by a signal")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_exit_is_success() {
        let result = ShellExecutor.run("true");
        assert_eq!(result, CommandResult::success());
    }

    #[test]
    fn non_zero_exit_is_reported_not_raised() {
        let result = ShellExecutor.run("exit 3");
        assert!(!result.exited_cleanly);
        assert_eq!(
            result.diagnostic.as_deref(),
            Some("`exit 3` exited with status 3")
        );
    }

    #[test]
    fn unknown_program_is_a_failure() {
        let result = ShellExecutor.run("proxyctl-no-such-program-here 2>/dev/null");
        assert!(!result.exited_cleanly);
        assert!(result.diagnostic.unwrap().contains("status 127"));
    }
}
