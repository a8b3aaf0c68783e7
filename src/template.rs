//! Configuration generation: render artifacts from typed inputs.
//!
//! Each rule is a pure function. Nothing here touches the filesystem;
//! writing (and backing up) is the handler's job.

pub mod compose;
pub mod load_balancer;
pub mod pipeline;
pub mod tuning;

use crate::config::Paths;
use crate::model::{Action, AnswerSet, ConfigArtifact};

pub use compose::ComposeProject;
pub use load_balancer::LoadBalancer;

/// Input that can't be turned into configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("{field} entry {position} is empty")]
    EmptyEntry { field: &'static str, position: usize },

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    #[error("port mapping `{0}` must look like host:container")]
    MalformedPort(String),

    #[error("missing answer for {0}")]
    MissingAnswer(&'static str),
}

/// Render the artifacts for `action` from a complete answer set.
///
/// Actions that generate nothing render to an empty list.
pub fn render(
    action: Action,
    answers: &AnswerSet,
    paths: &Paths,
) -> Result<Vec<ConfigArtifact>, TemplateError> {
    match action {
        Action::ConfigureLoadBalancer => {
            Ok(vec![LoadBalancer::from_answers(answers)?.render(paths)?])
        }
        Action::GenerateComposeFile => {
            Ok(vec![ComposeProject::from_answers(answers)?.render(paths)?])
        }
        Action::SetupCi => Ok(vec![pipeline::render(paths)]),
        Action::Optimize => Ok(vec![tuning::render(paths)]),
        Action::InstallProxy
        | Action::ConfigureTls
        | Action::SetupFirewall
        | Action::Diagnose
        | Action::Start
        | Action::Stop
        | Action::Status
        | Action::Exit => Ok(Vec::new()),
    }
}

/// Split a comma-separated list, trimming each entry.
///
/// Empty entries are an error rather than silently dropped.
/// Duplicates are kept as given.
pub fn split_entries(field: &'static str, list: &str) -> Result<Vec<String>, TemplateError> {
    list.split(',')
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry.trim();
            if entry.is_empty() {
                Err(TemplateError::EmptyEntry {
                    field,
                    position: i + 1,
                })
            } else {
                Ok(entry.to_string())
            }
        })
        .collect()
}

/// Trimmed value of a required text answer.
fn required(answers: &AnswerSet, field: &'static str) -> Result<String, TemplateError> {
    let value = answers
        .text(field)
        .ok_or(TemplateError::MissingAnswer(field))?
        .trim();
    if value.is_empty() {
        return Err(TemplateError::EmptyValue(field));
    }
    Ok(value.to_string())
}
