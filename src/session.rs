//! The session loop: menu, dispatch, repeat.
//!
//! The loop is a small state machine:
//!
//! ```text
//! Idle ──pick action──▶ Dispatching(action) ──handler returns──▶ Idle
//!   └──pick Exit──▶ Exited
//! ```
//!
//! Handler failures are logged and the menu comes back. Only a broken
//! prompt ends the session early; the caller decides what that means for
//! the process.

use crate::config::Config;
use crate::exec::Executor;
use crate::handlers::{self, Context, HandlerError};
use crate::model::Action;
use crate::prompt::{PromptError, Prompter};
use crate::report;

const MENU_PROMPT: &str = "What would you like to do?";

/// Errors that end the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("menu failed: {0}")]
    Menu(#[from] PromptError),

    #[error("{action} aborted: {source}")]
    Aborted {
        action: Action,
        #[source]
        source: HandlerError,
    },
}

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The menu is about to be shown.
    Idle,

    /// A handler is about to run.
    Dispatching(Action),

    /// The operator chose to leave.
    Exited,
}

/// One operator's run of the console.
pub struct Session<'a> {
    config: &'a Config,
    executor: &'a mut dyn Executor,
    prompter: &'a mut dyn Prompter,
    state: State,
}

impl<'a> Session<'a> {
    pub fn new(
        config: &'a Config,
        executor: &'a mut dyn Executor,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            config,
            executor,
            prompter,
            state: State::Idle,
        }
    }

    /// Run until the operator exits.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while self.step()? != State::Exited {}
        report::done("Goodbye.");
        Ok(())
    }

    /// Make one transition and return the new state.
    pub fn step(&mut self) -> Result<State, SessionError> {
        self.state = match self.state {
            State::Idle => match self.choose()? {
                Action::Exit => State::Exited,
                action => State::Dispatching(action),
            },
            State::Dispatching(action) => {
                self.dispatch(action)?;
                State::Idle
            }
            State::Exited => State::Exited,
        };
        Ok(self.state)
    }

    fn choose(&mut self) -> Result<Action, PromptError> {
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        let index = self.prompter.select(MENU_PROMPT, &labels, 0)?;
        Action::ALL
            .get(index)
            .copied()
            .ok_or(PromptError::NoSuchOption(index))
    }

    fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        let mut cx = Context::new(self.config, self.executor, self.prompter);
        match handlers::handle(action, &mut cx) {
            Ok(()) => Ok(()),
            Err(e) if e.is_recoverable() => {
                tracing::error!(%action, "{e}");
                Ok(())
            }
            Err(source) => Err(SessionError::Aborted { action, source }),
        }
    }
}
