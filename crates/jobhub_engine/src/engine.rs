use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use jobhub_logging::{jobhub_error, jobhub_info, jobhub_warn};

use crate::fetch::{FetchSettings, ListingFetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, MountId};

enum EngineCommand {
    FetchListings { mount: MountId },
}

/// Handle to the IO thread. Commands go in, [`EngineEvent`]s come out.
///
/// Requests are never cancelled; callers discard results they no longer want.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn ListingFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    jobhub_error!("Failed to start engine runtime: {}", err);
                    refuse_commands(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_listings(&self, mount: MountId) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchListings { mount })
            .is_err()
        {
            jobhub_warn!("Engine thread is gone; fetch for mount {} dropped", mount);
        }
    }

    /// Waits up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn ListingFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchListings { mount } => {
            let result = fetcher.fetch().await;
            match &result {
                Ok(output) => jobhub_info!(
                    "Mount {}: {} records from {}",
                    mount,
                    output.records.len(),
                    output.metadata
                ),
                Err(err) => jobhub_warn!("Mount {}: fetch failed: {}", mount, err),
            }
            let _ = event_tx.send(EngineEvent::ListingsCompleted { mount, result });
        }
    }
}

fn refuse_commands(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::FetchListings { mount }) = cmd_rx.recv() {
        let result = Err(FetchError::new(FailureKind::Network, reason));
        let _ = event_tx.send(EngineEvent::ListingsCompleted { mount, result });
    }
}
