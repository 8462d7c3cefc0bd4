//! Client-held feature collection and its load/create/vote transitions.

mod intent;
mod reducer;
mod state;

pub use intent::FeatureIntent;
pub use reducer::FeatureStoreReducer;
pub use state::FeatureStoreState;
