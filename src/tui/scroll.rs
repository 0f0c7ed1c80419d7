// Scroll state for overlay content
//
// Owns the offset, content height, and viewport height for one scrollable
// area. Render updates the dimensions each frame; input only moves the offset.

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Line index at the top of the viewport
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Content extends past the viewport
    pub fn is_scrollable(&self) -> bool {
        self.total > self.viewport
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = (self.offset + 1).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Back to the top, dimensions forgotten
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_clamped_to_content() {
        let mut s = ScrollState::new();
        s.update_dimensions(30, 10);
        for _ in 0..50 {
            s.scroll_down();
        }
        assert_eq!(s.offset(), 20);
        s.page_up();
        assert_eq!(s.offset(), 10);
        s.scroll_to_top();
        s.scroll_up();
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut s = ScrollState::new();
        s.update_dimensions(100, 10);
        s.scroll_to_bottom();
        assert_eq!(s.offset(), 90);
        s.update_dimensions(15, 10);
        assert_eq!(s.offset(), 5);
    }

    #[test]
    fn short_content_does_not_scroll() {
        let mut s = ScrollState::new();
        s.update_dimensions(5, 10);
        s.page_down();
        assert_eq!(s.offset(), 0);
        assert!(!s.is_scrollable());
    }
}
