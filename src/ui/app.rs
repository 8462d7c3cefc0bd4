use crate::api::ApiError;
use crate::config::Config;
use crate::model::Feature;
use crate::ui::events::AppEvent;
use crate::ui::features::{FeatureIntent, FeatureStoreReducer, FeatureStoreState};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::input::handle_key;
use crate::ui::list::ListView;
use crate::ui::mvi::Reducer;
use crate::ui::worker::{UiCommand, UiCommandSender};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    List,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    config: Config,
    /// Feature collection (MVI pattern).
    store: FeatureStoreState,
    /// New-feature form (MVI pattern).
    form: FormState,
    /// Index into the store's collection.
    selection: usize,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Form,
            config,
            store: FeatureStoreState::default(),
            form: FormState::default(),
            selection: 0,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    pub fn store(&self) -> &FeatureStoreState {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn list_view(&self) -> ListView<'_> {
        ListView::derive(&self.store)
    }

    /// Outcome of the most recent load; `None` while one is in flight.
    pub fn last_load_ok(&self) -> Option<bool> {
        if self.store.is_loading() {
            return None;
        }
        Some(self.store.load_error().is_none())
    }

    pub fn selected_feature(&self) -> Option<&Feature> {
        self.store.features().get(self.selection)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.features().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        self.selection = self.selection.saturating_add_signed(delta).min(len - 1);
    }

    // ========================================================================
    // Operations (side effects around reducer dispatch)
    // ========================================================================

    /// (Re)load the collection from the server.
    pub fn load_features(&mut self) {
        self.dispatch_store(FeatureIntent::LoadStarted);
        if let Err(message) = self.send_command(UiCommand::LoadFeatures) {
            self.dispatch_store(FeatureIntent::LoadFailed(message));
        }
    }

    /// Validate the form and, if valid, send the create request.
    ///
    /// Validation failures stay local: no command is sent.
    pub fn submit_form(&mut self) {
        if self.form.is_submitting() {
            return;
        }
        self.dispatch_form(FormIntent::SubmitRequested);
        let Some(request) = self.form.in_flight.clone() else {
            return;
        };
        if let Err(message) = self.send_command(UiCommand::CreateFeature(request)) {
            self.dispatch_form(FormIntent::SubmitFailed(message));
        }
    }

    pub fn vote_selected(&mut self) {
        if let Some(id) = self.selected_feature().map(|feature| feature.id) {
            self.vote(id);
        }
    }

    /// Vote for `id` unless a vote for it is already in flight.
    pub fn vote(&mut self, id: i64) {
        if self.store.is_voting(id) || self.store.position_of(id).is_none() {
            return;
        }
        self.dispatch_store(FeatureIntent::VoteStarted(id));
        if let Err(message) = self.send_command(UiCommand::Vote { id }) {
            self.dispatch_store(FeatureIntent::VoteFailed { id, message });
        }
    }

    // ========================================================================
    // Worker results
    // ========================================================================

    pub fn on_features_loaded(&mut self, result: Result<Vec<Feature>, ApiError>) {
        match result {
            Ok(features) => {
                tracing::info!(count = features.len(), "Features loaded");
                self.dispatch_store(FeatureIntent::Loaded(features));
            }
            Err(err) => self.dispatch_store(FeatureIntent::LoadFailed(err.to_string())),
        }
        self.clamp_selection();
    }

    pub fn on_feature_created(&mut self, result: Result<Feature, ApiError>) {
        match result {
            Ok(feature) => {
                self.dispatch_store(FeatureIntent::Created(feature));
                self.dispatch_form(FormIntent::SubmitSucceeded);
            }
            Err(err) => self.dispatch_form(FormIntent::SubmitFailed(err.to_string())),
        }
    }

    pub fn on_vote_finished(&mut self, id: i64, result: Result<Feature, ApiError>) {
        let selected_id = self.selected_feature().map(|feature| feature.id);
        match result {
            Ok(feature) => self.dispatch_store(FeatureIntent::VoteSucceeded(feature)),
            Err(err) => self.dispatch_store(FeatureIntent::VoteFailed {
                id,
                message: err.to_string(),
            }),
        }
        // Keep the cursor on the same feature across the re-sort.
        if let Some(position) = selected_id.and_then(|sid| self.store.position_of(sid)) {
            self.selection = position;
        }
        self.clamp_selection();
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick | AppEvent::Resize(..) => {}
            AppEvent::Shutdown => self.request_quit(),
            AppEvent::FeaturesLoaded(result) => self.on_features_loaded(result),
            AppEvent::FeatureCreated(result) => self.on_feature_created(result),
            AppEvent::VoteFinished { id, result } => self.on_vote_finished(id, result),
        }
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    pub fn dispatch_store(&mut self, intent: FeatureIntent) {
        dispatch_mvi!(self, store, FeatureStoreReducer, intent);
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("Request worker is not running".to_string());
        };

        sender.try_send(command).map_err(|err| {
            tracing::warn!(error = %err, "Failed to queue request");
            format!("Request not sent: {}", err)
        })
    }

    fn clamp_selection(&mut self) {
        let len = self.store.features().len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
