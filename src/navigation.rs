//! Keyboard and pointer navigation over the rendered entries
//!
//! Tracks a single "current" entry by position. The current entry is always
//! either absent or a rendered, non-disabled entry. Directional moves skip
//! disabled entries and scroll the viewport just enough to keep the new
//! current entry fully visible.

use crate::model::{Entry, Item, same_value};
use crate::viewport::Viewport;

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Option<usize>,
    select_on_hover: bool,
    /// Set after a programmatic scroll: the pointer now rests over a
    /// different row and the hover event that follows must be ignored
    skip_hover: bool,
}

impl Navigator {
    pub fn new(select_on_hover: bool) -> Self {
        Self {
            current: None,
            select_on_hover,
            skip_hover: false,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The current entry, if it is still rendered
    pub fn current_entry<'a, T>(&self, entries: &'a [Entry<T>]) -> Option<&'a Entry<T>> {
        self.current.and_then(|i| entries.get(i))
    }

    pub fn select_on_hover(&self) -> bool {
        self.select_on_hover
    }

    /// Forget the current entry (the list was replaced)
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Move to the next navigable entry.
    ///
    /// With no current entry this lands on the first navigable entry.
    /// Returns true if the current entry changed.
    pub fn advance<T: Item>(&mut self, entries: &[Entry<T>], viewport: &mut Viewport) -> bool {
        let start = self.current.map_or(0, |i| i + 1);
        let Some(next) = (start..entries.len()).find(|&i| !entries[i].is_disabled()) else {
            return false;
        };
        self.current = Some(next);
        if viewport.reveal_bottom(next) {
            self.skip_hover = true;
        }
        true
    }

    /// Move to the previous navigable entry.
    ///
    /// With no current entry this lands on the last navigable entry.
    /// Returns true if the current entry changed.
    pub fn retreat<T: Item>(&mut self, entries: &[Entry<T>], viewport: &mut Viewport) -> bool {
        let end = self.current.unwrap_or(entries.len()).min(entries.len());
        let Some(prev) = (0..end).rev().find(|&i| !entries[i].is_disabled()) else {
            return false;
        };
        self.current = Some(prev);
        if viewport.reveal_top(prev) {
            self.skip_hover = true;
        }
        true
    }

    /// Make `index` current. No-op for disabled or missing entries.
    pub fn set_current<T: Item>(&mut self, entries: &[Entry<T>], index: usize) -> bool {
        match entries.get(index) {
            Some(entry) if !entry.is_disabled() => {
                let changed = self.current != Some(index);
                self.current = Some(index);
                changed
            }
            _ => false,
        }
    }

    /// Pointer moved over `index`.
    ///
    /// The first hover after a programmatic scroll is swallowed.
    pub fn hover<T: Item>(&mut self, entries: &[Entry<T>], index: usize) -> bool {
        if std::mem::take(&mut self.skip_hover) {
            return false;
        }
        self.select_on_hover && self.set_current(entries, index)
    }

    /// Seed the current entry if there is no usable one (none, out of range
    /// or disabled): the entry matching the selected item's value, else the
    /// first navigable entry.
    pub fn ensure_current<T: Item>(&mut self, entries: &[Entry<T>], selected: Option<&T>) {
        if self
            .current
            .and_then(|i| entries.get(i))
            .is_some_and(|e| !e.is_disabled())
        {
            return;
        }
        self.current = selected
            .and_then(|sel| {
                entries
                    .iter()
                    .position(|e| !e.is_disabled() && same_value(&e.item, sel))
            })
            .or_else(|| entries.iter().position(|e| !e.is_disabled()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Choice;

    fn entries(rows: &[(&str, bool)]) -> Vec<Entry<Choice>> {
        rows.iter()
            .map(|(label, disabled)| {
                let c = Choice::new(*label);
                Entry::new(if *disabled { c.disabled() } else { c }, "")
            })
            .collect()
    }

    fn plain(n: usize) -> Vec<Entry<Choice>> {
        (0..n)
            .map(|i| Entry::new(Choice::new(format!("item{i}")), ""))
            .collect()
    }

    #[test]
    fn test_advance_skips_disabled() {
        let list = entries(&[("a", false), ("b", true), ("c", true), ("d", false)]);
        let mut nav = Navigator::new(true);
        let mut vp = Viewport::new(10);

        nav.ensure_current(&list, None);
        assert_eq!(nav.current(), Some(0));
        assert!(nav.advance(&list, &mut vp));
        assert_eq!(nav.current(), Some(3));
        // At the last navigable entry
        assert!(!nav.advance(&list, &mut vp));
        assert_eq!(nav.current(), Some(3));
    }

    #[test]
    fn test_retreat_skips_disabled() {
        let list = entries(&[("a", true), ("b", false), ("c", true), ("d", false)]);
        let mut nav = Navigator::new(true);
        let mut vp = Viewport::new(10);

        assert!(nav.set_current(&list, 3));
        assert!(nav.retreat(&list, &mut vp));
        assert_eq!(nav.current(), Some(1));
        // Disabled entry above is not a destination
        assert!(!nav.retreat(&list, &mut vp));
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn test_never_leaves_navigable_span() {
        let list = entries(&[
            ("a", true),
            ("b", false),
            ("c", true),
            ("d", false),
            ("e", false),
            ("f", true),
        ]);
        let mut nav = Navigator::new(false);
        let mut vp = Viewport::new(2);
        nav.ensure_current(&list, None);

        for step in 0..40 {
            if step % 3 == 0 {
                nav.retreat(&list, &mut vp);
            } else {
                nav.advance(&list, &mut vp);
            }
            let i = nav.current().unwrap();
            assert!(!list[i].is_disabled());
            assert!((1..=4).contains(&i));
        }
    }

    #[test]
    fn test_empty_list_is_noop() {
        let list: Vec<Entry<Choice>> = Vec::new();
        let mut nav = Navigator::new(true);
        let mut vp = Viewport::new(5);

        assert!(!nav.advance(&list, &mut vp));
        assert!(!nav.retreat(&list, &mut vp));
        nav.ensure_current(&list, None);
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn test_advance_scrolls_bottom_into_view() {
        let list = plain(10);
        let mut nav = Navigator::new(true);
        let mut vp = Viewport::new(3);
        nav.ensure_current(&list, None);

        nav.advance(&list, &mut vp);
        nav.advance(&list, &mut vp);
        assert_eq!(vp.offset, 0);
        nav.advance(&list, &mut vp);
        assert_eq!(nav.current(), Some(3));
        assert_eq!(vp.offset, 1);
    }

    #[test]
    fn test_retreat_scrolls_top_into_view() {
        let list = plain(10);
        let mut nav = Navigator::new(true);
        let mut vp = Viewport {
            height: 3,
            offset: 5,
        };
        nav.set_current(&list, 5);

        nav.retreat(&list, &mut vp);
        assert_eq!(nav.current(), Some(4));
        assert_eq!(vp.offset, 4);
    }

    #[test]
    fn test_hover_after_programmatic_scroll_is_skipped_once() {
        let list = plain(10);
        let mut nav = Navigator::new(true);
        let mut vp = Viewport::new(2);
        nav.ensure_current(&list, None);

        nav.advance(&list, &mut vp);
        nav.advance(&list, &mut vp); // scrolls
        assert_eq!(nav.current(), Some(2));

        assert!(!nav.hover(&list, 1));
        assert_eq!(nav.current(), Some(2));
        assert!(nav.hover(&list, 1));
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn test_hover_without_hover_selection() {
        let list = plain(3);
        let mut nav = Navigator::new(false);

        assert!(!nav.hover(&list, 1));
        assert_eq!(nav.current(), None);
        // Clicks still select
        assert!(nav.set_current(&list, 1));
    }

    #[test]
    fn test_set_current_ignores_disabled() {
        let list = entries(&[("a", false), ("b", true)]);
        let mut nav = Navigator::new(true);
        nav.set_current(&list, 0);

        assert!(!nav.set_current(&list, 1));
        assert!(!nav.set_current(&list, 7));
        assert_eq!(nav.current(), Some(0));
    }

    #[test]
    fn test_ensure_current_prefers_selected() {
        let list = entries(&[("a", false), ("b", false), ("c", false)]);
        let mut nav = Navigator::new(true);

        nav.ensure_current(&list, Some(&Choice::new("c")));
        assert_eq!(nav.current(), Some(2));
    }

    #[test]
    fn test_ensure_current_falls_back_to_first_navigable() {
        let list = entries(&[("a", true), ("b", false), ("c", false)]);
        let mut nav = Navigator::new(true);

        nav.ensure_current(&list, Some(&Choice::new("zzz")));
        assert_eq!(nav.current(), Some(1));

        // A selected item without a value never matches
        let mut nav = Navigator::new(true);
        let mut valueless = Choice::new("c");
        valueless.value = None;
        nav.ensure_current(&list, Some(&valueless));
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn test_ensure_current_skips_disabled_match() {
        let list = entries(&[("a", false), ("b", true)]);
        let mut nav = Navigator::new(true);

        nav.ensure_current(&list, Some(&Choice::new("b")));
        assert_eq!(nav.current(), Some(0));
    }

    #[test]
    fn test_ensure_current_keeps_existing() {
        let list = plain(4);
        let mut nav = Navigator::new(true);
        nav.set_current(&list, 2);

        nav.ensure_current(&list, Some(&Choice::new("item0")));
        assert_eq!(nav.current(), Some(2));

        nav.clear();
        nav.ensure_current(&list, Some(&Choice::new("item0")));
        assert_eq!(nav.current(), Some(0));
    }

    #[test]
    fn test_ensure_current_reseeds_disabled_current() {
        let mut list = entries(&[("a", false), ("b", false), ("c", false)]);
        let mut nav = Navigator::new(true);
        nav.set_current(&list, 1);

        list[1].item = Choice::new("b").disabled();
        nav.ensure_current(&list, Some(&Choice::new("c")));
        assert_eq!(nav.current(), Some(2));
    }
}
