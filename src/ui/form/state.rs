use crate::model::FeatureCreate;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub focused: FormField,
    /// Validated request currently being submitted.
    pub in_flight: Option<FeatureCreate>,
    /// Inline error from validation or the server.
    pub error: Option<String>,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }
}
