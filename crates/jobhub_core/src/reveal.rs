/// Postings shown right after mount.
pub const INITIAL_REVEAL: usize = 10;
/// Postings added by each "load more".
pub const REVEAL_STEP: usize = 10;

/// How many postings of the collection are revealed.
///
/// The counter is never clamped to the collection; clamping happens when
/// slicing, so it can safely run past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCount(usize);

impl Default for RevealCount {
    fn default() -> Self {
        Self(INITIAL_REVEAL)
    }
}

impl RevealCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn grow(&mut self) {
        self.0 = self.0.saturating_add(REVEAL_STEP);
    }

    pub fn visible_len(self, total: usize) -> usize {
        self.0.min(total)
    }

    /// Whether the "load more" control should be offered.
    pub fn has_more(self, total: usize) -> bool {
        self.0 < total
    }

    pub fn visible<T>(self, items: &[T]) -> &[T] {
        &items[..self.visible_len(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_runs_past_collection_without_clamping() {
        let mut reveal = RevealCount::new();
        reveal.grow();
        reveal.grow();
        assert_eq!(reveal.get(), 30);
        assert_eq!(reveal.visible_len(14), 14);
        assert!(!reveal.has_more(14));
        assert_eq!(reveal.visible(&[1, 2, 3]), &[1, 2, 3]);
    }
}
