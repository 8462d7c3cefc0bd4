use std::collections::{BTreeMap, BTreeSet};

use crate::model::Feature;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureStoreState {
    /// Load request in flight.
    Loading {
        /// Created or voted features confirmed by the server during the load,
        /// applied on top of the loaded collection.
        pending: Vec<Feature>,
    },
    Ready {
        /// Display order, except for features created since the last re-sort.
        features: Vec<Feature>,
        /// Set when the last load failed (`features` is then empty).
        error: Option<String>,
        /// Ids with a vote request in flight.
        voting: BTreeSet<i64>,
        /// Last vote failure per id.
        vote_errors: BTreeMap<i64, String>,
    },
}

impl UiState for FeatureStoreState {}

impl Default for FeatureStoreState {
    fn default() -> Self {
        Self::loading()
    }
}

impl FeatureStoreState {
    pub fn loading() -> Self {
        Self::Loading {
            pending: Vec::new(),
        }
    }

    pub fn ready(features: Vec<Feature>) -> Self {
        Self::Ready {
            features,
            error: None,
            voting: BTreeSet::new(),
            vote_errors: BTreeMap::new(),
        }
    }

    pub fn failed(message: String) -> Self {
        Self::Ready {
            features: Vec::new(),
            error: Some(message),
            voting: BTreeSet::new(),
            vote_errors: BTreeMap::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Current collection; empty while loading.
    pub fn features(&self) -> &[Feature] {
        match self {
            Self::Loading { .. } => &[],
            Self::Ready { features, .. } => features,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match self {
            Self::Loading { .. } => None,
            Self::Ready { error, .. } => error.as_deref(),
        }
    }

    pub fn is_voting(&self, id: i64) -> bool {
        match self {
            Self::Loading { .. } => false,
            Self::Ready { voting, .. } => voting.contains(&id),
        }
    }

    pub fn vote_error(&self, id: i64) -> Option<&str> {
        match self {
            Self::Loading { .. } => None,
            Self::Ready { vote_errors, .. } => vote_errors.get(&id).map(String::as_str),
        }
    }

    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.features().iter().position(|feature| feature.id == id)
    }
}
