//! # Viewport
//!
//! A height-bounded window over a taller buffer of lines. The only state is
//! the vertical offset of the first visible line, kept within
//! `0..=max_offset()` by every operation.
//!
//! ```text
//!   lines[0]
//!   lines[1]
//! ┌─lines[2]──┐ ← y_offset = 2
//! │ lines[3]  │   height = 3
//! └─lines[4]──┘
//!   lines[5]    max_offset = 6 - 3 = 3
//! ```
//!
//! Generic over the line type so the core can store composed rows while
//! tests use plain strings.

#[derive(Debug, Clone)]
pub struct Viewport<T> {
    pub width: u16,
    pub height: u16,
    y_offset: usize,
    lines: Vec<T>,
}

impl<T> Default for Viewport<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T> Viewport<T> {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            y_offset: 0,
            lines: Vec::new(),
        }
    }

    pub fn offset(&self) -> usize {
        self.y_offset
    }

    pub fn lines(&self) -> &[T] {
        &self.lines
    }

    /// Largest valid offset: `max(0, total_lines - height)`.
    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    /// Replace the buffer. A now out-of-range offset is clipped to the bottom.
    pub fn set_content(&mut self, lines: Vec<T>) {
        self.lines = lines;
        self.clamp();
    }

    /// Resize the window; the offset is re-clamped against the new height.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_add(n).min(self.max_offset());
    }

    pub fn jump_to_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.y_offset = self.max_offset();
    }

    /// Lines currently inside the window.
    pub fn visible(&self) -> &[T] {
        let end = (self.y_offset + self.height as usize).min(self.lines.len());
        &self.lines[self.y_offset.min(end)..end]
    }

    fn clamp(&mut self) {
        self.y_offset = self.y_offset.min(self.max_offset());
    }
}
