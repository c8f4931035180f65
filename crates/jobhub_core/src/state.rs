use jobhub_logging::jobhub_debug;
use serde_json::Value;

use crate::feedback::CueState;
use crate::filters::{FilterBar, FilterSlot};
use crate::posting::{normalize_all, Posting};
use crate::reveal::RevealCount;
use crate::view_model::{AppViewModel, FilterView, ListingsView, PostingCard, ScreenView};

/// Identifies one lifetime of the listings view, from open to back.
pub type MountId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    screen: Screen,
    last_mount: MountId,
    dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Screen {
    #[default]
    Landing,
    Listings(ListingView),
}

/// Per-mount state: created when the view opens, dropped on back.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListingView {
    mount: MountId,
    postings: Vec<Posting>,
    fetch_settled: bool,
    reveal: RevealCount,
    cue: CueState,
    filters: FilterBar,
    selected: usize,
}

impl ListingView {
    fn new(mount: MountId) -> Self {
        Self {
            mount,
            postings: Vec::new(),
            fetch_settled: false,
            reveal: RevealCount::new(),
            cue: CueState::Idle,
            filters: FilterBar::default(),
            selected: 0,
        }
    }

    fn visible(&self) -> &[Posting] {
        self.reveal.visible(&self.postings)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match &self.screen {
            Screen::Landing => ScreenView::Landing,
            Screen::Listings(listing) => ScreenView::Listings(listings_view(listing)),
        };
        AppViewModel {
            screen,
            dirty: self.dirty,
        }
    }

    /// Mount id of the open listings view, if any.
    pub fn mounted(&self) -> Option<MountId> {
        match &self.screen {
            Screen::Listings(listing) => Some(listing.mount),
            Screen::Landing => None,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Open a fresh listings view. Returns `None` if one is already open.
    pub(crate) fn mount(&mut self) -> Option<MountId> {
        if self.mounted().is_some() {
            return None;
        }
        self.last_mount += 1;
        let mount = self.last_mount;
        self.screen = Screen::Listings(ListingView::new(mount));
        self.mark_dirty();
        Some(mount)
    }

    pub(crate) fn unmount(&mut self) -> bool {
        if self.mounted().is_none() {
            return false;
        }
        self.screen = Screen::Landing;
        self.mark_dirty();
        true
    }

    /// Replace the collection with the normalized records, once per mount.
    pub(crate) fn apply_fetched(&mut self, mount: MountId, records: &[Value]) {
        let Some(listing) = self.current_mut(mount) else {
            jobhub_debug!(
                "Dropping {} records for stale mount {}",
                records.len(),
                mount
            );
            return;
        };
        if listing.fetch_settled {
            jobhub_debug!("Mount {} already settled; ignoring repeat result", mount);
            return;
        }
        listing.postings = normalize_all(records);
        listing.fetch_settled = true;
        self.mark_dirty();
    }

    pub(crate) fn apply_fetch_failed(&mut self, mount: MountId) {
        let Some(listing) = self.current_mut(mount) else {
            return;
        };
        if listing.fetch_settled {
            return;
        }
        listing.fetch_settled = true;
        self.mark_dirty();
    }

    pub(crate) fn load_more(&mut self) {
        let Some(listing) = self.listing_mut() else {
            return;
        };
        if !listing.reveal.has_more(listing.postings.len()) {
            return;
        }
        listing.reveal.grow();
        self.mark_dirty();
    }

    /// Register a click in the list region; returns the link of the hit card, if any.
    pub(crate) fn click(&mut self, index: Option<usize>) -> Option<Option<String>> {
        let listing = self.listing_mut()?;
        listing.cue.on_click();
        let link = index.and_then(|index| {
            let posting = listing.visible().get(index)?;
            let link = posting.link.clone();
            listing.selected = index;
            link
        });
        self.mark_dirty();
        Some(link)
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        match &self.screen {
            Screen::Listings(listing) if !listing.visible().is_empty() => Some(listing.selected),
            _ => None,
        }
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        let Some(listing) = self.listing_mut() else {
            return;
        };
        let visible = listing.visible().len();
        if visible == 0 {
            return;
        }
        let last = visible as isize - 1;
        let next = (listing.selected as isize).saturating_add(delta).clamp(0, last) as usize;
        if next != listing.selected {
            listing.selected = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn cue_finished(&mut self) {
        let Some(listing) = self.listing_mut() else {
            return;
        };
        if listing.cue.on_finished() {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_search(&mut self, text: String) {
        let Some(listing) = self.listing_mut() else {
            return;
        };
        if listing.filters.set_search(text) {
            self.mark_dirty();
        }
    }

    pub(crate) fn cycle_filter(&mut self, slot: FilterSlot) {
        let Some(listing) = self.listing_mut() else {
            return;
        };
        listing.filters.cycle(slot);
        self.mark_dirty();
    }

    fn listing_mut(&mut self) -> Option<&mut ListingView> {
        match &mut self.screen {
            Screen::Listings(listing) => Some(listing),
            Screen::Landing => None,
        }
    }

    fn current_mut(&mut self, mount: MountId) -> Option<&mut ListingView> {
        self.listing_mut().filter(|listing| listing.mount == mount)
    }
}

fn listings_view(listing: &ListingView) -> ListingsView {
    let cards: Vec<PostingCard> = listing.visible().iter().map(PostingCard::from).collect();
    let selected = (!cards.is_empty()).then_some(listing.selected);
    ListingsView {
        mount: listing.mount,
        loading: !listing.fetch_settled,
        total: listing.postings.len(),
        reveal_count: listing.reveal.get(),
        show_load_more: listing.reveal.has_more(listing.postings.len()),
        selected,
        cards,
        cue: listing.cue,
        search: listing.filters.search().to_string(),
        filters: FilterSlot::ALL
            .iter()
            .map(|&slot| FilterView {
                slot,
                label: listing.filters.selected_label(slot),
                is_placeholder: listing.filters.selected(slot) == 0,
            })
            .collect(),
    }
}
