use crate::Viewport;

/// Vertical scroll position over a document of known height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u32,
    content_height: u32,
    viewport_height: u16,
}

impl ScrollState {
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn max_offset(&self) -> u32 {
        self.content_height
            .saturating_sub(u32::from(self.viewport_height))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.offset, self.viewport_height)
    }

    /// Update the measured geometry after a layout pass, keeping the offset in range.
    pub fn set_bounds(&mut self, content_height: u32, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i64::from(self.offset) + i64::from(delta);
        let clamped = next.clamp(0, i64::from(self.max_offset()));
        self.offset = u32::try_from(clamped).unwrap_or(0);
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.page_step()));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.page_step()));
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn page_step(&self) -> u16 {
        self.viewport_height.saturating_sub(2).max(1)
    }
}
