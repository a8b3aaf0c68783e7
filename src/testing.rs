//! Test doubles for the executor and prompter seams.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use crate::config::{Config, Paths};
use crate::exec::Executor;
use crate::model::{Action, CommandResult};
use crate::prompt::{PromptError, Prompter};

/// Records every command line and fails the ones matching a pattern.
#[derive(Debug, Default)]
pub struct FakeExecutor {
    pub commands: Vec<String>,
    failing: Vec<String>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command containing `pattern`.
    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.failing.push(pattern.to_string());
        self
    }
}

impl Executor for FakeExecutor {
    fn run(&mut self, command_line: &str) -> CommandResult {
        self.commands.push(command_line.to_string());
        if self.failing.iter().any(|p| command_line.contains(p.as_str())) {
            CommandResult::failure(format!("`{command_line}` exited with status 1"))
        } else {
            CommandResult::success()
        }
    }
}

/// One scripted operator response.
#[derive(Debug, Clone)]
pub enum Scripted {
    Text(String),
    Confirm(bool),
    Select(usize),
}

impl Scripted {
    /// Pick `action` from the main menu.
    pub fn menu(action: Action) -> Self {
        let index = Action::ALL.iter().position(|a| *a == action).unwrap();
        Self::Select(index)
    }

    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Answers prompts from a script. Running out of answers, or meeting the
/// wrong kind of prompt, fails like a closed terminal would.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Scripted>,
    pub prompts: Vec<String>,
    /// The options shown by each `select`, in order.
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }

    fn next(&mut self, prompt: &str) -> Result<Scripted, PromptError> {
        self.prompts.push(prompt.to_string());
        self.script
            .pop_front()
            .ok_or_else(|| closed(format!("no answer for {prompt}")))
    }
}

/// What dialoguer reports when the terminal goes away.
fn closed(message: String) -> PromptError {
    PromptError::Dialog(dialoguer::Error::IO(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        message,
    )))
}

fn unexpected(prompt: &str, got: &Scripted) -> PromptError {
    closed(format!("scripted {got:?} does not answer {prompt}"))
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str, _default: Option<&str>) -> Result<String, PromptError> {
        match self.next(prompt)? {
            Scripted::Text(s) => Ok(s),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(prompt)? {
            Scripted::Confirm(b) => Ok(b),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn select(
        &mut self,
        prompt: &str,
        options: &[&str],
        _default: usize,
    ) -> Result<usize, PromptError> {
        self.offered
            .push(options.iter().map(|o| (*o).to_string()).collect());
        match self.next(prompt)? {
            Scripted::Select(i) => Ok(i),
            other => Err(unexpected(prompt, &other)),
        }
    }
}

/// A config whose generated files all land under `root`.
pub fn config_in(root: &Path) -> Config {
    let conf_d = root.join("conf.d");
    fs::create_dir_all(&conf_d).unwrap();
    Config {
        paths: Paths {
            nginx_conf: root.join("nginx.conf"),
            conf_d,
            working_dir: root.to_path_buf(),
        },
        ..Config::default()
    }
}
