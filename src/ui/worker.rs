//! Request worker: runs API calls off the UI thread.
//!
//! The UI sends [`UiCommand`]s; each one runs as its own task so requests
//! are independent (two quick votes are two concurrent requests). Results
//! come back as [`AppEvent`]s in completion order.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::FeatureApi;
use crate::model::FeatureCreate;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    LoadFeatures,
    CreateFeature(FeatureCreate),
    Vote { id: i64 },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Spawns the worker on the current tokio runtime.
///
/// The worker stops when `shutdown` fires or every sender is dropped.
/// Requests already in flight are not cancelled.
pub fn spawn_worker(
    api: Arc<dyn FeatureApi>,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) -> UiCommandSender {
    let (sender, mut receiver) = mpsc::channel(COMMAND_BUFFER);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                command = receiver.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    tracing::debug!(?command, "Dispatching request");
                    tokio::spawn(execute(Arc::clone(&api), command, events.clone()));
                }
            }
        }
        tracing::debug!("Request worker stopped");
    });

    sender
}

async fn execute(api: Arc<dyn FeatureApi>, command: UiCommand, events: Sender<AppEvent>) {
    let event = match command {
        UiCommand::LoadFeatures => AppEvent::FeaturesLoaded(api.fetch_features().await),
        UiCommand::CreateFeature(input) => AppEvent::FeatureCreated(api.create_feature(&input).await),
        UiCommand::Vote { id } => AppEvent::VoteFinished {
            id,
            result: api.vote_for_feature(id).await,
        },
    };

    if events.send(event).is_err() {
        tracing::trace!("Request result dropped (UI gone)");
    }
}
