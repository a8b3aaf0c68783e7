//! Answer types: what a handler asks for and what the operator answered.

use std::collections::BTreeMap;

/// Decides whether a field is asked, given the answers collected so far.
pub type Visibility = fn(&AnswerSet) -> bool;

/// Checks a text answer. The error is shown to the operator before re-prompting.
pub type Validator = fn(&str) -> Result<(), String>;

/// A named input descriptor.
#[derive(Debug, Clone)]
pub struct AnswerField {
    pub name: &'static str,
    pub prompt: String,
    pub kind: FieldKind,
    pub validator: Option<Validator>,
    pub visible_when: Option<Visibility>,
}

/// How a field is asked and what shape its answer takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text. The default is used verbatim when the input is empty.
    Text { default: Option<String> },

    /// Yes or no.
    Confirm { default: bool },

    /// Exactly one of a fixed set of options. No free text.
    Choice { options: Vec<&'static str> },
}

impl AnswerField {
    pub fn text(name: &'static str, prompt: impl Into<String>) -> Self {
        Self::new(name, prompt, FieldKind::Text { default: None })
    }

    pub fn confirm(name: &'static str, prompt: impl Into<String>, default: bool) -> Self {
        Self::new(name, prompt, FieldKind::Confirm { default })
    }

    pub fn choice(name: &'static str, prompt: impl Into<String>, options: &[&'static str]) -> Self {
        Self::new(
            name,
            prompt,
            FieldKind::Choice {
                options: options.to_vec(),
            },
        )
    }

    /// Set the default of a text field. Has no effect on other kinds.
    #[must_use]
    pub fn default(mut self, value: impl Into<String>) -> Self {
        if let FieldKind::Text { default } = &mut self.kind {
            *default = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    #[must_use]
    pub fn visible_when(mut self, visibility: Visibility) -> Self {
        self.visible_when = Some(visibility);
        self
    }

    fn new(name: &'static str, prompt: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name,
            prompt: prompt.into(),
            kind,
            validator: None,
            visible_when: None,
        }
    }
}

/// A collected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
    Choice(String),
}

/// Answers for one invocation of one handler.
///
/// Fields that were never asked (hidden by `visible_when`) are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, answer: Answer) {
        self.answers.insert(name.into(), answer);
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.answers.get(name)
    }

    /// The value of a text or choice answer.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Answer::Text(s) | Answer::Choice(s) => Some(s),
            Answer::Flag(_) => None,
        }
    }

    /// The value of a confirm answer. Absent or non-flag answers read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Answer::Flag(true)))
    }
}
