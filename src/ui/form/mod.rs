//! New-feature form: field editing, local validation and submit lifecycle.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormState};
pub use view::render_form;
