use jobhub_logging::{jobhub_info, jobhub_warn};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ListingsOpened => match state.mount() {
            Some(mount) => vec![Effect::FetchListings { mount }],
            None => Vec::new(),
        },
        Msg::BackClicked => {
            state.unmount();
            Vec::new()
        }
        Msg::ListingsFetched { mount, records } => {
            jobhub_info!("Fetched {} postings for mount {}", records.len(), mount);
            state.apply_fetched(mount, &records);
            Vec::new()
        }
        Msg::ListingsFetchFailed { mount, reason } => {
            // Failures leave the view empty; only the log records them.
            jobhub_warn!("Fetching postings for mount {} failed: {}", mount, reason);
            state.apply_fetch_failed(mount);
            Vec::new()
        }
        Msg::LoadMoreClicked => {
            state.load_more();
            Vec::new()
        }
        Msg::ListClicked { index } => click_effects(&mut state, index),
        Msg::SelectedActivated => match state.selected_index() {
            Some(index) => click_effects(&mut state, Some(index)),
            None => Vec::new(),
        },
        Msg::SelectionMoved { delta } => {
            state.move_selection(delta);
            Vec::new()
        }
        Msg::CueFinished => {
            state.cue_finished();
            Vec::new()
        }
        Msg::SearchChanged(text) => {
            state.set_search(text);
            Vec::new()
        }
        Msg::FilterCycled(slot) => {
            state.cycle_filter(slot);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Clicks in the list always restart the cue; a hit card with a link also navigates.
fn click_effects(state: &mut AppState, index: Option<usize>) -> Vec<Effect> {
    match state.click(index) {
        Some(Some(url)) => vec![Effect::RestartCue, Effect::OpenLink { url }],
        Some(None) => vec![Effect::RestartCue],
        None => Vec::new(),
    }
}
