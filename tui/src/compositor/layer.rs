//! Compositor layer
//!
//! One z-ordered drawing surface. A layer's buffer may be taller than its
//! on-screen bounds; `scroll` selects which window of the buffer is shown,
//! which is how the page document scrolls under the fixed overlays.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// A single compositor layer.
pub struct Layer {
    /// On-screen position and size
    pub bounds: Rect,
    /// Z-order; higher renders on top
    pub z_index: i32,
    /// Hidden layers are skipped entirely
    pub visible: bool,
    /// Vertical offset into the backing buffer
    pub scroll: u16,
    /// Backing buffer, origin-based; height may exceed `bounds.height`
    pub buffer: Buffer,
}

impl Layer {
    /// Create a layer backed by a document buffer at least as tall as its
    /// bounds.
    pub fn with_document_height(bounds: Rect, z_index: i32, doc_height: u16) -> Self {
        Self {
            bounds,
            z_index,
            visible: true,
            scroll: 0,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, doc_height.max(bounds.height))),
        }
    }

    /// Largest valid scroll offset for the current buffer.
    pub fn max_scroll(&self) -> u16 {
        self.buffer.area.height.saturating_sub(self.bounds.height)
    }
}
