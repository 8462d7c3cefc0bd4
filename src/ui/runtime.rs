use crate::api::{ApiClient, FeatureApi};
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Grace period for in-flight requests once the UI exits.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

pub fn run(config: Config) -> anyhow::Result<()> {
    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let runtime_guard = async_runtime.enter();

    let shutdown = ShutdownHandle::new();
    spawn_signal_listener(shutdown.clone());

    let api: Arc<dyn FeatureApi> = Arc::new(
        ApiClient::new(config.api.base_url.clone()).context("failed to create API client")?,
    );
    tracing::info!(base_url = %config.api.base_url, "Starting feature-vote");

    let tick_rate = config.ui.tick_rate();
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let mut app = App::new(config);
    app.set_command_sender(spawn_worker(api, events.sender(), shutdown.clone()));
    app.load_features();

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(anyhow::Error::from(err).context("failed to draw frame"));
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    shutdown.signal();
    drop(guard);
    drop(runtime_guard);
    async_runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
    tracing::info!("Exited");
    result
}

/// Raw mode swallows Ctrl+C as a key, so this mostly catches SIGTERM.
fn spawn_signal_listener(shutdown: ShutdownHandle) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                    return;
                }
            };
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = sigterm.recv() => {},
                _ = shutdown.wait() => return,
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = shutdown.wait() => return,
            }
        }

        shutdown.signal();
    });
}
