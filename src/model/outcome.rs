//! Command outcomes as reported back to handlers.

/// How an external command went.
///
/// A failed command is a value, not an error: handlers decide what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exited_cleanly: bool,

    /// What went wrong, when something did.
    pub diagnostic: Option<String>,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            exited_cleanly: true,
            diagnostic: None,
        }
    }

    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self {
            exited_cleanly: false,
            diagnostic: Some(diagnostic.into()),
        }
    }
}
