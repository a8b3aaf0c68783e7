//! Core data model for proxyctl.
//!
//! These types carry one handler invocation from menu to host:
//! the chosen action, the operator's answers, the rendered artifacts,
//! and the outcome of each command run.

mod action;
mod answer;
mod artifact;
mod outcome;

pub use action::Action;
pub use answer::{Answer, AnswerField, AnswerSet, FieldKind};
pub use artifact::ConfigArtifact;
pub use outcome::CommandResult;
