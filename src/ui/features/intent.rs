use crate::model::Feature;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureIntent {
    /// A (re)load request was issued.
    LoadStarted,
    /// Server returned the full collection.
    Loaded(Vec<Feature>),
    /// Load failed; the collection is cleared.
    LoadFailed(String),
    /// Server created a feature.
    Created(Feature),
    /// A vote request for `id` was issued.
    VoteStarted(i64),
    /// Server returned the voted feature with its authoritative count.
    VoteSucceeded(Feature),
    VoteFailed { id: i64, message: String },
}

impl Intent for FeatureIntent {}
