use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Type a character into the focused field.
    Insert(char),
    Backspace,
    /// Move focus between title and description.
    NextField,
    /// Validate and, if valid, enter the submitting state.
    SubmitRequested,
    SubmitSucceeded,
    SubmitFailed(String),
}

impl Intent for FormIntent {}
