//! Action handlers: the fixed step sequence behind each menu action.
//!
//! Every handler follows the same shape, with any step optional:
//! collect answers → render artifacts → write (backing up first where asked)
//! → run host commands in a fixed order.
//!
//! Commands run unconditionally in sequence: a failed syntax check does not
//! stop the reload that follows it. A failed write does stop the handler,
//! before any command runs.

mod deploy;
mod proxy;
mod service;

use std::{fs, io, path::PathBuf};

use crate::config::Config;
use crate::exec::Executor;
use crate::host::HostCommands;
use crate::model::{Action, ConfigArtifact};
use crate::prompt::{PromptError, Prompter};
use crate::template::TemplateError;

/// Errors that end a handler early.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("invalid input: {0}")]
    Validation(#[from] TemplateError),

    #[error("failed to back up {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HandlerError {
    /// Whether the session can carry on after this error.
    ///
    /// A broken prompt means there is no operator left to return to.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Prompt(_))
    }
}

/// What a handler has to work with.
pub struct Context<'a> {
    pub config: &'a Config,
    pub host: HostCommands,
    pub executor: &'a mut dyn Executor,
    pub prompter: &'a mut dyn Prompter,
}

impl<'a> Context<'a> {
    pub fn new(
        config: &'a Config,
        executor: &'a mut dyn Executor,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            config,
            host: HostCommands::new(config),
            executor,
            prompter,
        }
    }

    /// Run one command, logging why it failed if it did.
    fn run(&mut self, command: &str) -> bool {
        let result = self.executor.run(command);
        if let Some(diagnostic) = &result.diagnostic {
            tracing::warn!("{diagnostic}");
        }
        result.exited_cleanly
    }

    /// Run each command in order, regardless of earlier failures.
    ///
    /// Returns whether all of them exited cleanly.
    fn run_all(&mut self, commands: &[String]) -> bool {
        let mut clean = true;
        for command in commands {
            clean &= self.run(command);
        }
        clean
    }

    /// Syntax-check the proxy config, then reload the service.
    fn validate_and_reload(&mut self) -> bool {
        let commands = [self.host.test_config(), self.host.systemctl("reload")];
        self.run_all(&commands)
    }
}

/// Run the handler for `action`.
pub fn handle(action: Action, cx: &mut Context<'_>) -> Result<(), HandlerError> {
    tracing::debug!(%action, "dispatching");
    match action {
        Action::InstallProxy => service::install(cx),
        Action::ConfigureTls => proxy::configure_tls(cx),
        Action::SetupFirewall => service::setup_firewall(cx),
        Action::ConfigureLoadBalancer => proxy::configure_load_balancer(cx),
        Action::Optimize => proxy::optimize(cx),
        Action::Diagnose => service::diagnose(cx),
        Action::GenerateComposeFile => deploy::generate_compose_file(cx),
        Action::SetupCi => deploy::setup_ci(cx),
        Action::Start => service::lifecycle(cx, "start", "Service started."),
        Action::Stop => service::lifecycle(cx, "stop", "Service stopped."),
        Action::Status => service::lifecycle(cx, "status", "Status shown."),
        Action::Exit => Ok(()),
    }
}

/// Write each artifact, snapshotting the old file first where requested.
pub(crate) fn write_artifacts(artifacts: &[ConfigArtifact]) -> Result<(), HandlerError> {
    for artifact in artifacts {
        if artifact.backup {
            back_up(artifact)?;
        }
        fs::write(&artifact.destination, &artifact.content).map_err(|source| {
            HandlerError::Write {
                path: artifact.destination.clone(),
                source,
            }
        })?;
        tracing::info!(path = %artifact.destination.display(), "wrote");
    }
    Ok(())
}

/// Validator for required text answers.
fn not_blank(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("a value is required".to_string())
    } else {
        Ok(())
    }
}

/// Validator for values handed to a host command as an argument.
///
/// A leading `-` would be parsed as an option by the command itself, and
/// quoting does not help with that.
fn not_an_option(value: &str) -> Result<(), String> {
    if value.trim_start().starts_with('-') {
        Err("must not start with '-'".to_string())
    } else {
        Ok(())
    }
}

/// A required command argument.
fn argument(value: &str) -> Result<(), String> {
    not_blank(value)?;
    not_an_option(value)
}

fn back_up(artifact: &ConfigArtifact) -> Result<(), HandlerError> {
    let backup = artifact.backup_path();
    match fs::copy(&artifact.destination, &backup) {
        Ok(_) => {
            tracing::info!(path = %backup.display(), "backed up");
            Ok(())
        }
        // Nothing to lose.
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(HandlerError::Backup {
            path: artifact.destination.clone(),
            source,
        }),
    }
}
