//! Search box and dropdowns of the listings header.
//!
//! They hold what the user typed or picked and are rendered, but nothing
//! here is applied to the postings.

pub const DATE_OPTIONS: &[&str] = &["Date", "< 3 Days", "< 10 Days", "< 20 Days"];
pub const LOCATION_OPTIONS: &[&str] = &["Location", "BC", "ON", "AB"];
pub const TITLE_OPTIONS: &[&str] = &[
    "Job Title",
    "Software Engineer",
    "Software Developer",
    "Data Engineer",
    "Machine Learning",
    "Data Analyst",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSlot {
    Date,
    Location,
    Title,
}

impl FilterSlot {
    pub const ALL: [FilterSlot; 3] = [FilterSlot::Date, FilterSlot::Location, FilterSlot::Title];

    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterSlot::Date => DATE_OPTIONS,
            FilterSlot::Location => LOCATION_OPTIONS,
            FilterSlot::Title => TITLE_OPTIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterBar {
    search: String,
    date: usize,
    location: usize,
    title: usize,
}

impl FilterBar {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub(crate) fn set_search(&mut self, text: String) -> bool {
        if self.search == text {
            return false;
        }
        self.search = text;
        true
    }

    /// Index of the selected option; 0 is the placeholder.
    pub fn selected(&self, slot: FilterSlot) -> usize {
        match slot {
            FilterSlot::Date => self.date,
            FilterSlot::Location => self.location,
            FilterSlot::Title => self.title,
        }
    }

    pub fn selected_label(&self, slot: FilterSlot) -> &'static str {
        slot.options()[self.selected(slot)]
    }

    pub(crate) fn cycle(&mut self, slot: FilterSlot) {
        let count = slot.options().len();
        let current = match slot {
            FilterSlot::Date => &mut self.date,
            FilterSlot::Location => &mut self.location,
            FilterSlot::Title => &mut self.title,
        };
        *current = (*current + 1) % count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_back_to_placeholder() {
        let mut bar = FilterBar::default();
        for _ in 0..LOCATION_OPTIONS.len() - 1 {
            bar.cycle(FilterSlot::Location);
        }
        assert_eq!(bar.selected_label(FilterSlot::Location), "AB");
        bar.cycle(FilterSlot::Location);
        assert_eq!(bar.selected_label(FilterSlot::Location), "Location");
        assert_eq!(bar.selected(FilterSlot::Date), 0);
    }
}
