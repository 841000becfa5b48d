//! State of expandable sections: FAQ lists, process steps and tab sets.

use std::collections::BTreeSet;

/// Expanded/collapsed state of a fixed list of sections.
///
/// Opening a section closes the others. `expand_all` is the only way to
/// have more than one section open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion {
    len: usize,
    expanded: BTreeSet<usize>,
}

impl Accordion {
    /// All sections collapsed
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: BTreeSet::new(),
        }
    }

    /// First section expanded
    pub fn with_first_open(len: usize) -> Self {
        let mut accordion = Self::new(len);
        if len > 0 {
            accordion.expanded.insert(0);
        }
        accordion
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn all_expanded(&self) -> bool {
        self.len > 0 && self.expanded.len() == self.len
    }

    /// Out-of-range indices are ignored
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if self.expanded.remove(&index) {
            return;
        }
        self.expanded.clear();
        self.expanded.insert(index);
    }

    pub fn expand_all(&mut self) {
        self.expanded = (0..self.len).collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Collapses everything when all sections are open, expands all otherwise
    pub fn toggle_all(&mut self) {
        if self.all_expanded() {
            self.collapse_all();
        } else {
            self.expand_all();
        }
    }

    // ---- keyboard navigation ----
    //
    // Moves are relative to the first open section and leave exactly one
    // section open. Nothing happens when no section is open.

    fn current(&self) -> Option<usize> {
        self.expanded.iter().next().copied()
    }

    fn open_only(&mut self, index: usize) {
        self.expanded.clear();
        self.expanded.insert(index);
    }

    /// Opens the section after the current one. Stays put on the last one.
    pub fn focus_next(&mut self) -> bool {
        match self.current() {
            Some(index) if index + 1 < self.len => {
                self.open_only(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Opens the section before the current one. Stays put on the first one.
    pub fn focus_prev(&mut self) -> bool {
        match self.current() {
            Some(index) if index > 0 => {
                self.open_only(index - 1);
                true
            }
            _ => false,
        }
    }

    pub fn focus_first(&mut self) -> bool {
        if self.current().is_none() {
            return false;
        }
        self.open_only(0);
        true
    }

    pub fn focus_last(&mut self) -> bool {
        if self.current().is_none() {
            return false;
        }
        self.open_only(self.len - 1);
        true
    }
}

/// A row of tabs with exactly one active tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: usize,
}

impl TabSet {
    /// The first id becomes active
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active_id(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Returns `false` and keeps the current tab for unknown ids
    pub fn select(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|t| t == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_exclusive() {
        let mut faq = Accordion::new(3);
        assert_eq!(faq.expanded_count(), 0);

        faq.toggle(0);
        faq.toggle(2);
        assert!(!faq.is_expanded(0));
        assert!(faq.is_expanded(2));
        assert_eq!(faq.expanded_count(), 1);

        faq.toggle(2);
        assert_eq!(faq.expanded_count(), 0);
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut faq = Accordion::with_first_open(2);
        faq.toggle(5);
        assert!(faq.is_expanded(0));
        assert_eq!(faq.expanded_count(), 1);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut steps = Accordion::with_first_open(4);
        assert!(steps.is_expanded(0));
        assert!(!steps.all_expanded());

        steps.toggle_all();
        assert!(steps.all_expanded());

        // closing one section leaves the others open, reopening it closes them
        steps.toggle(1);
        assert!(!steps.is_expanded(1));
        assert_eq!(steps.expanded_count(), 3);
        steps.toggle(1);
        assert_eq!(steps.expanded_count(), 1);

        steps.expand_all();
        steps.toggle_all();
        assert_eq!(steps.expanded_count(), 0);
    }

    #[test]
    fn test_empty_accordion() {
        let mut empty = Accordion::with_first_open(0);
        assert!(empty.is_empty());
        assert!(!empty.all_expanded());
        empty.toggle_all();
        assert_eq!(empty.expanded_count(), 0);
    }

    #[test]
    fn test_focus_moves_forward_and_back() {
        let mut steps = Accordion::with_first_open(5);

        assert!(steps.focus_next());
        assert!(steps.focus_next());
        assert!(steps.is_expanded(2));
        assert_eq!(steps.expanded_count(), 1);

        assert!(steps.focus_prev());
        assert!(steps.is_expanded(1));
        assert_eq!(steps.expanded_count(), 1);
    }

    #[test]
    fn test_focus_first_and_last() {
        let mut steps = Accordion::new(5);
        steps.toggle(2);

        assert!(steps.focus_last());
        assert!(steps.is_expanded(4));
        assert_eq!(steps.expanded_count(), 1);

        assert!(steps.focus_first());
        assert!(steps.is_expanded(0));
        assert_eq!(steps.expanded_count(), 1);
    }

    #[test]
    fn test_focus_stops_at_edges() {
        let mut steps = Accordion::with_first_open(3);
        assert!(!steps.focus_prev());
        assert!(steps.is_expanded(0));

        steps.focus_last();
        assert!(!steps.focus_next());
        assert!(steps.is_expanded(2));
        assert_eq!(steps.expanded_count(), 1);
    }

    #[test]
    fn test_focus_needs_an_open_section() {
        let mut steps = Accordion::new(3);
        assert!(!steps.focus_next());
        assert!(!steps.focus_prev());
        assert!(!steps.focus_first());
        assert!(!steps.focus_last());
        assert_eq!(steps.expanded_count(), 0);

        let mut empty = Accordion::new(0);
        assert!(!empty.focus_last());
    }

    #[test]
    fn test_focus_after_expand_all_leaves_one_open() {
        let mut steps = Accordion::new(4);
        steps.expand_all();
        assert!(steps.focus_next());
        assert!(steps.is_expanded(1));
        assert_eq!(steps.expanded_count(), 1);
    }

    #[test]
    fn test_tab_set() {
        let mut tabs = TabSet::new(["residential", "commercial", "healthcare"]);
        assert_eq!(tabs.active_id(), Some("residential"));

        assert!(tabs.select("healthcare"));
        assert!(tabs.is_active("healthcare"));

        assert!(!tabs.select("industrial"));
        assert_eq!(tabs.active_id(), Some("healthcare"));

        let none = TabSet::new(Vec::<String>::new());
        assert_eq!(none.active_id(), None);
    }
}
