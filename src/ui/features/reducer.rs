//! Reducer for the feature store.

use crate::model::{sort_for_display, Feature};
use crate::ui::mvi::Reducer;

use super::intent::FeatureIntent;
use super::state::FeatureStoreState;

/// Feature store transitions.
///
/// Responses are applied in the order they arrive. There is no sequence
/// guard: a slow vote response can overwrite a fresher count for the same
/// feature. Creates and votes confirmed while a load is in flight are kept
/// and applied once the load succeeds.
pub struct FeatureStoreReducer;

impl Reducer for FeatureStoreReducer {
    type State = FeatureStoreState;
    type Intent = FeatureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeatureIntent::LoadStarted => match state {
                FeatureStoreState::Loading { pending } => FeatureStoreState::Loading { pending },
                FeatureStoreState::Ready { .. } => FeatureStoreState::loading(),
            },
            FeatureIntent::Loaded(features) => match state {
                FeatureStoreState::Loading { pending } => {
                    FeatureStoreState::ready(apply_pending(features, pending))
                }
                FeatureStoreState::Ready { .. } => FeatureStoreState::ready(features),
            },
            FeatureIntent::LoadFailed(message) => FeatureStoreState::failed(message),

            FeatureIntent::Created(feature) => match state {
                FeatureStoreState::Ready {
                    mut features,
                    error,
                    voting,
                    vote_errors,
                } => {
                    // Appended without re-sorting; it moves into rank on the next vote.
                    match features.iter_mut().find(|f| f.id == feature.id) {
                        Some(existing) => *existing = feature,
                        None => features.push(feature),
                    }
                    FeatureStoreState::Ready {
                        features,
                        error,
                        voting,
                        vote_errors,
                    }
                }
                FeatureStoreState::Loading { pending } => buffer_confirmed(pending, feature),
            },

            FeatureIntent::VoteStarted(id) => match state {
                FeatureStoreState::Ready {
                    features,
                    error,
                    mut voting,
                    mut vote_errors,
                } => {
                    if voting.insert(id) {
                        vote_errors.remove(&id);
                    }
                    FeatureStoreState::Ready {
                        features,
                        error,
                        voting,
                        vote_errors,
                    }
                }
                other => other,
            },

            FeatureIntent::VoteSucceeded(feature) => match state {
                FeatureStoreState::Ready {
                    mut features,
                    error,
                    mut voting,
                    mut vote_errors,
                } => {
                    let id = feature.id;
                    voting.remove(&id);
                    vote_errors.remove(&id);
                    if let Some(existing) = features.iter_mut().find(|f| f.id == id) {
                        *existing = feature;
                    }
                    sort_for_display(&mut features);
                    FeatureStoreState::Ready {
                        features,
                        error,
                        voting,
                        vote_errors,
                    }
                }
                FeatureStoreState::Loading { pending } => buffer_confirmed(pending, feature),
            },

            FeatureIntent::VoteFailed { id, message } => match state {
                FeatureStoreState::Ready {
                    features,
                    error,
                    mut voting,
                    mut vote_errors,
                } => {
                    voting.remove(&id);
                    vote_errors.insert(id, message);
                    FeatureStoreState::Ready {
                        features,
                        error,
                        voting,
                        vote_errors,
                    }
                }
                other => other,
            },
        }
    }
}

/// Holds a server-confirmed feature until the in-flight load lands.
fn buffer_confirmed(mut pending: Vec<Feature>, feature: Feature) -> FeatureStoreState {
    match pending.iter_mut().find(|f| f.id == feature.id) {
        Some(existing) if feature.vote_count >= existing.vote_count => *existing = feature,
        Some(_) => {}
        None => pending.push(feature),
    }
    FeatureStoreState::Loading { pending }
}

/// Merges features confirmed during a load into the loaded collection.
///
/// Missing features are appended like a create; a higher vote count wins
/// over the loaded copy and triggers a re-sort like a vote.
fn apply_pending(mut features: Vec<Feature>, pending: Vec<Feature>) -> Vec<Feature> {
    let mut resort = false;
    for confirmed in pending {
        match features.iter_mut().find(|f| f.id == confirmed.id) {
            Some(existing) => {
                if confirmed.vote_count > existing.vote_count {
                    *existing = confirmed;
                    resort = true;
                }
            }
            None => features.push(confirmed),
        }
    }
    if resort {
        sort_for_display(&mut features);
    }
    features
}
