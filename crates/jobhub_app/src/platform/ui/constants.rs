use ratatui::style::Color;

pub const COLOR_ORANGE: Color = Color::Rgb(242, 140, 40);
pub const COLOR_BLACK: Color = Color::Rgb(34, 34, 34);
pub const COLOR_WHITE: Color = Color::Rgb(245, 245, 245);
pub const COLOR_MUTED: Color = Color::Rgb(140, 140, 140);
pub const COLOR_BORDER: Color = Color::Rgb(110, 110, 110);

/// Card height in rows, borders included.
pub const CARD_HEIGHT: u16 = 5;
/// Width of the date column inside a card.
pub const DATE_COLUMN_WIDTH: u16 = 8;
/// Narrower list regions fall back to a single column of cards.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 96;

pub const BACK_LABEL: &str = "ᐸ Back";
pub const LOAD_MORE_LABEL: &str = "Load More";
pub const OPEN_LISTINGS_LABEL: &str = "Browse Job Listings";
pub const SEARCH_PLACEHOLDER: &str = "Search";

pub const LANDING_HELP: &str = "Enter: open listings   q: quit";
pub const LISTINGS_HELP: &str =
    "arrows: move  Enter: open  m: load more  /: search  1-3: filters  b: back  q: quit";
pub const SEARCH_HELP: &str = "typing into search   Enter/Esc: done";
