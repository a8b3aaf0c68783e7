//! Answer collection: walk a handler's fields and ask for each one.

use crate::model::{Answer, AnswerField, AnswerSet, FieldKind};
use crate::prompt::{PromptError, Prompter};
use crate::report;

/// Ask for each field in declaration order.
///
/// Fields hidden by `visible_when` are skipped and left out of the result.
/// Text fields with a validator are asked again until the answer passes.
/// The returned set is complete: every visible field has a valid answer.
pub fn collect(
    prompter: &mut dyn Prompter,
    fields: &[AnswerField],
) -> Result<AnswerSet, PromptError> {
    let mut answers = AnswerSet::new();

    for field in fields {
        if let Some(visible) = field.visible_when
            && !visible(&answers)
        {
            tracing::debug!(field = field.name, "skipped");
            continue;
        }

        let answer = match &field.kind {
            FieldKind::Text { default } => {
                Answer::Text(ask_text(prompter, field, default.as_deref())?)
            }
            FieldKind::Confirm { default } => {
                Answer::Flag(prompter.confirm(&field.prompt, *default)?)
            }
            FieldKind::Choice { options } => {
                let index = prompter.select(&field.prompt, options, 0)?;
                let option = options
                    .get(index)
                    .ok_or(PromptError::NoSuchOption(index))?;
                Answer::Choice((*option).to_string())
            }
        };

        answers.insert(field.name, answer);
    }

    Ok(answers)
}

fn ask_text(
    prompter: &mut dyn Prompter,
    field: &AnswerField,
    default: Option<&str>,
) -> Result<String, PromptError> {
    loop {
        let input = prompter.text(&field.prompt, default)?;
        let value = match default {
            Some(d) if input.trim().is_empty() => d.to_string(),
            _ => input,
        };

        if let Some(validate) = field.validator
            && let Err(reason) = validate(&value)
        {
            report::rejected(&reason);
            continue;
        }

        return Ok(value);
    }
}
