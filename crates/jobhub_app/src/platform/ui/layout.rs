use jobhub_core::FilterSlot;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

use super::constants::{CARD_HEIGHT, TWO_COLUMN_MIN_WIDTH};

pub struct ListingsLayout {
    pub back: Rect,
    pub title: Rect,
    pub search: Rect,
    pub filters: [Rect; 3],
    pub list: Rect,
    pub load_more: Rect,
    pub help: Rect,
}

pub fn listings_layout(area: Rect) -> ListingsLayout {
    let [back_row, title, filter_row, list, load_more_row, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(CARD_HEIGHT + 2),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [back] = Layout::horizontal([Constraint::Length(12)]).areas(back_row);
    let [search, date, location, job_title] = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Ratio(1, 6),
        Constraint::Ratio(1, 6),
        Constraint::Ratio(1, 6),
    ])
    .areas(filter_row);
    let [load_more] = Layout::horizontal([Constraint::Length(15)])
        .flex(Flex::Center)
        .areas(load_more_row);

    ListingsLayout {
        back,
        title,
        search,
        filters: [date, location, job_title],
        list,
        load_more,
        help,
    }
}

pub struct LandingLayout {
    pub title: Rect,
    pub open_listings: Rect,
    pub help: Rect,
}

pub fn landing_layout(area: Rect) -> LandingLayout {
    let [_, title, _, button_row, _, help] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let [open_listings] = Layout::horizontal([Constraint::Length(25)])
        .flex(Flex::Center)
        .areas(button_row);
    LandingLayout {
        title,
        open_listings,
        help,
    }
}

/// Where each visible card lands inside the list region.
pub struct GridPlacement {
    pub columns: usize,
    pub cards: Vec<(usize, Rect)>,
}

/// Lay cards out row-major, scrolled so the selected card is on screen.
pub fn place_cards(inner: Rect, card_count: usize, selected: Option<usize>) -> GridPlacement {
    let columns = if inner.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    let rows_fit = usize::from((inner.height / CARD_HEIGHT).max(1));
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = selected_row.saturating_sub(rows_fit - 1);

    let column_rects = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
        .spacing(1)
        .split(inner);

    let cards = (first_row * columns..card_count)
        .take(rows_fit * columns)
        .map(|index| {
            let row = (index / columns - first_row) as u16;
            let column = column_rects[index % columns];
            let rect = Rect {
                x: column.x,
                y: inner.y + row * CARD_HEIGHT,
                width: column.width,
                height: CARD_HEIGHT,
            };
            (index, rect.intersection(inner))
        })
        .collect();

    GridPlacement { columns, cards }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    OpenListings,
    Back,
    Search,
    Filter(FilterSlot),
    Card(usize),
    ListRegion,
    LoadMore,
}

/// Screen regions of the last frame, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub columns: usize,
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    /// Regions pushed earlier win over later ones when they overlap.
    pub fn push(&mut self, rect: Rect, target: Target) {
        self.regions.push((rect, target));
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, target)| *target)
    }
}
