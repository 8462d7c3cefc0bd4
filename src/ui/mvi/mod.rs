//! Model-View-Intent (MVI) primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: owned snapshot of one piece of UI (feature store, form)
//! - **Intent**: user action or server response
//! - **Reducer**: pure function producing the next state
//!
//! Side effects (sending requests) happen in `App` around the dispatch call,
//! never inside a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
