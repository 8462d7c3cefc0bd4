//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use feature_vote::config::Config;
use feature_vote::ui::app::App;
use feature_vote::ui::events::AppEvent;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tempfile::TempDir;

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// JSON for one feature as the server returns it.
pub fn feature_json(id: i64, title: &str, votes: u64, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": null,
        "vote_count": votes,
        "created_at": created_at,
    })
}

pub fn features_body(features: &[serde_json::Value]) -> String {
    serde_json::Value::Array(features.to_vec()).to_string()
}

// -- App helpers --------------------------------------------------------------

pub fn make_app(base_url: &str) -> App {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    App::new(config)
}

/// Block until the next worker result arrives, skipping input noise.
///
/// Uses a blocking receive; call from a multi-thread runtime.
pub fn next_result(events: &Receiver<AppEvent>, timeout: Duration) -> AppEvent {
    let deadline = std::time::Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        match events.recv_timeout(remaining) {
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) | Ok(AppEvent::Key(_)) => continue,
            Ok(event) => return event,
            Err(err) => panic!("no worker result within {:?}: {}", timeout, err),
        }
    }
}
