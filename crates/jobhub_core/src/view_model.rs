use crate::{CueState, FilterSlot, MountId, Posting, PostingId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: ScreenView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenView {
    #[default]
    Landing,
    Listings(ListingsView),
}

impl ScreenView {
    pub fn listings(&self) -> Option<&ListingsView> {
        match self {
            ScreenView::Listings(view) => Some(view),
            ScreenView::Landing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsView {
    pub mount: MountId,
    /// The fetch for this mount has not settled yet.
    pub loading: bool,
    /// Size of the whole fetched collection.
    pub total: usize,
    pub reveal_count: usize,
    pub show_load_more: bool,
    /// Cursor into `cards`; `None` while there are no cards.
    pub selected: Option<usize>,
    /// The visible prefix of the collection.
    pub cards: Vec<PostingCard>,
    pub cue: CueState,
    pub search: String,
    pub filters: Vec<FilterView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub slot: FilterSlot,
    pub label: &'static str,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingCard {
    pub id: Option<PostingId>,
    pub date_head: String,
    pub date_tail: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub link: Option<String>,
}

impl From<&Posting> for PostingCard {
    fn from(posting: &Posting) -> Self {
        let (date_head, date_tail) = posting.date_tokens();
        Self {
            id: posting.id,
            date_head,
            date_tail,
            position: posting.position.clone().unwrap_or_default(),
            company: posting.company.clone().unwrap_or_default(),
            location: posting.location.clone().unwrap_or_default(),
            link: posting.link.clone(),
        }
    }
}
