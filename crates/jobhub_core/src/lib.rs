//! Jobhub core: pure state machine and view-model helpers for the listings view.
mod effect;
mod feedback;
mod filters;
mod msg;
mod posting;
mod reveal;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use feedback::CueState;
pub use filters::{FilterBar, FilterSlot, DATE_OPTIONS, LOCATION_OPTIONS, TITLE_OPTIONS};
pub use msg::Msg;
pub use posting::{normalize, normalize_all, Posting, PostingId};
pub use reveal::{RevealCount, INITIAL_REVEAL, REVEAL_STEP};
pub use state::{AppState, MountId};
pub use update::update;
pub use view_model::{AppViewModel, FilterView, ListingsView, PostingCard, ScreenView};
