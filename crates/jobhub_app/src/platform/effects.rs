use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use jobhub_core::{Effect, Msg};
use jobhub_engine::{EngineEvent, EngineHandle};
use jobhub_logging::{jobhub_debug, jobhub_info, jobhub_warn};

use super::audio::{CuePlayer, RodioCue, SilentCue};
use super::config::AppConfig;
use super::navigate::{BrowserNavigator, Navigator};

/// Longest single wait on the engine's event channel.
const EVENT_WAIT: Duration = Duration::from_secs(1);

pub(crate) struct EffectRunner {
    engine: EngineHandle,
    cue: Box<dyn CuePlayer>,
    navigator: Box<dyn Navigator>,
    cue_started: bool,
}

impl EffectRunner {
    pub(crate) fn new(config: &AppConfig, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(config.fetch_settings());
        let cue: Box<dyn CuePlayer> = match RodioCue::open(&config.audio_asset) {
            Ok(cue) => Box::new(cue),
            Err(err) => {
                jobhub_warn!("Click cue disabled: {}", err);
                Box::new(SilentCue)
            }
        };

        let runner = Self::with_parts(engine, cue, Box::new(BrowserNavigator));
        runner.spawn_event_loop(msg_tx);
        runner
    }

    fn with_parts(
        engine: EngineHandle,
        cue: Box<dyn CuePlayer>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            engine,
            cue,
            navigator,
            cue_started: false,
        }
    }

    pub(crate) fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListings { mount } => {
                    jobhub_info!("FetchListings mount={}", mount);
                    self.engine.fetch_listings(mount);
                }
                Effect::RestartCue => {
                    if let Err(err) = self.cue.restart() {
                        jobhub_debug!("Click cue failed: {}", err);
                    }
                    // Even a failed start must be reported as finished later.
                    self.cue_started = true;
                }
                Effect::OpenLink { url } => {
                    jobhub_info!("OpenLink url_len={} url={}", url.len(), url);
                    if let Err(err) = self.navigator.open(&url) {
                        jobhub_warn!("Failed to open {}: {}", url, err);
                    }
                }
            }
        }
    }

    /// True exactly once after a started cue has stopped playing.
    pub(crate) fn take_cue_finished(&mut self) -> bool {
        if self.cue_started && !self.cue.is_playing() {
            self.cue_started = false;
            return true;
        }
        false
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            // Blocks on the engine; the timeout only lets the lock go now and then.
            let Some(event) = engine.recv_timeout(EVENT_WAIT) else {
                continue;
            };
            if msg_tx.send(event_to_msg(event)).is_err() {
                break;
            }
        });
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingsCompleted {
            mount,
            result: Ok(output),
        } => Msg::ListingsFetched {
            mount,
            records: output.records,
        },
        EngineEvent::ListingsCompleted {
            mount,
            result: Err(err),
        } => Msg::ListingsFetchFailed {
            mount,
            reason: err.to_string(),
        },
    }
}
