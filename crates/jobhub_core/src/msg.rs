use serde_json::Value;

use crate::{FilterSlot, MountId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User opened the listings view from the landing screen.
    ListingsOpened,
    /// User clicked Back on the listings view.
    BackClicked,
    /// Engine returned the raw records fetched for a mount.
    ListingsFetched { mount: MountId, records: Vec<Value> },
    /// Engine gave up on the fetch for a mount.
    ListingsFetchFailed { mount: MountId, reason: String },
    /// User clicked Load More.
    LoadMoreClicked,
    /// Click inside the list region; `index` is the visible card under the pointer.
    ListClicked { index: Option<usize> },
    /// Keyboard activation of the selected card.
    SelectedActivated,
    /// Move the card cursor by `delta` positions.
    SelectionMoved { delta: isize },
    /// Host reports the click cue ran to its end.
    CueFinished,
    /// User edited the search box.
    SearchChanged(String),
    /// User stepped a dropdown to its next option.
    FilterCycled(FilterSlot),
    /// Input the host does not map to anything.
    NoOp,
}
