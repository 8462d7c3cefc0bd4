//! Reducer for the new-feature form.

use crate::model::{FeatureCreate, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormField, FormState};

/// Form transitions. Edits and re-submits are ignored while a submission is
/// in flight.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) => {
                if state.is_submitting() || ch.is_control() {
                    return state;
                }
                let (field, max) = focused_field(&mut state);
                if field.chars().count() < max {
                    field.push(ch);
                }
                state
            }
            FormIntent::Backspace => {
                if !state.is_submitting() {
                    focused_field(&mut state).0.pop();
                }
                state
            }
            FormIntent::NextField => {
                state.focused = match state.focused {
                    FormField::Title => FormField::Description,
                    FormField::Description => FormField::Title,
                };
                state
            }
            FormIntent::SubmitRequested => {
                if state.is_submitting() {
                    return state;
                }
                match FeatureCreate::new(&state.title, &state.description) {
                    Ok(request) => {
                        state.in_flight = Some(request);
                        state.error = None;
                    }
                    Err(err) => state.error = Some(err.to_string()),
                }
                state
            }
            FormIntent::SubmitSucceeded => FormState::default(),
            FormIntent::SubmitFailed(message) => {
                state.in_flight = None;
                state.error = Some(message);
                state
            }
        }
    }
}

fn focused_field(state: &mut FormState) -> (&mut String, usize) {
    match state.focused {
        FormField::Title => (&mut state.title, TITLE_MAX_CHARS),
        FormField::Description => (&mut state.description, DESCRIPTION_MAX_CHARS),
    }
}
