//! Reader layout state management.

/// State for reader presentation settings persisted across sessions.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Body text size in points
    font_size: f32,
    /// Maximum width of the reading column in pixels
    page_width: f32,
}

impl LayoutState {
    pub const DEFAULT_FONT_SIZE: f32 = 16.0;
    pub const DEFAULT_PAGE_WIDTH: f32 = 720.0;

    const MIN_FONT_SIZE: f32 = 10.0;
    const MAX_FONT_SIZE: f32 = 28.0;

    pub fn new() -> Self {
        Self {
            font_size: Self::DEFAULT_FONT_SIZE,
            page_width: Self::DEFAULT_PAGE_WIDTH,
        }
    }

    pub fn with_settings(font_size: f32, page_width: f32) -> Self {
        let mut layout = Self::new();
        layout.set_font_size(font_size);
        layout.set_page_width(page_width);
        layout
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
    }

    pub fn set_page_width(&mut self, width: f32) {
        self.page_width = width.clamp(320.0, 1200.0);
    }

    pub fn adjust_font_size(&mut self, delta: f32) {
        self.set_font_size(self.font_size + delta);
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}
