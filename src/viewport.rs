//! Scrollable list viewport geometry
//!
//! Every entry occupies exactly one row. Positions are in rows, measured from
//! the top of the list content.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Number of visible rows
    pub height: usize,
    /// Index of the first visible row
    pub offset: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self { height, offset: 0 }
    }

    /// Top edge of the row at `index`, relative to the visible window.
    /// Negative when the row is scrolled above the window.
    pub fn relative_top(&self, index: usize) -> isize {
        index as isize - self.offset as isize
    }

    /// Last visible row (exclusive)
    pub fn bottom(&self) -> usize {
        self.offset + self.height
    }

    pub fn is_row_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.bottom()
    }

    /// Scroll so the top edge of `index` is visible when it sits above the
    /// window. Returns true if the offset changed.
    pub fn reveal_top(&mut self, index: usize) -> bool {
        if self.offset > index {
            self.offset = index;
            return true;
        }
        false
    }

    /// Scroll so the bottom edge of `index` is visible when it sits below
    /// the window. Returns true if the offset changed.
    pub fn reveal_bottom(&mut self, index: usize) -> bool {
        let item_bottom = index + 1;
        if item_bottom > self.bottom() {
            self.offset = item_bottom.saturating_sub(self.height);
            return true;
        }
        false
    }

    /// Scroll by `delta` rows, clamped to the content length.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: isize, len: usize) -> bool {
        let max_offset = len.saturating_sub(self.height);
        let target = self.offset.saturating_add_signed(delta).min(max_offset);
        let changed = target != self.offset;
        self.offset = target;
        changed
    }

    /// Resize the window, keeping the offset
    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }

    /// Back to the top (list replaced)
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
