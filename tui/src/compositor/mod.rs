//! Layered Compositor
//!
//! The page is assembled from independent layers: the particle backdrop,
//! the scrollable page document, the navigation bar, the menu overlay and
//! the loading screen. Each layer draws into its own buffer; `composite`
//! blits them into the frame in z order. Cells that were never touched
//! (space with reset colors) are transparent, so lower layers show
//! through, while painted spaces cover what is beneath them.

mod layer;

pub use layer::Layer;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Handle to a compositor layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerId(usize);

/// Owns the layer stack and the blit order.
#[derive(Default)]
pub struct Compositor {
    layers: Vec<Layer>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer whose buffer matches its on-screen bounds.
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        self.create_document_layer(bounds, z_index, bounds.height)
    }

    /// Add a layer backed by a buffer taller than its bounds; the visible
    /// window is selected by the layer's scroll offset.
    pub fn create_document_layer(
        &mut self,
        bounds: Rect,
        z_index: i32,
        doc_height: u16,
    ) -> LayerId {
        self.layers
            .push(Layer::with_document_height(bounds, z_index, doc_height));
        LayerId(self.layers.len() - 1)
    }

    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.0]
    }

    /// The layer's backing buffer, for drawing.
    pub fn buffer_mut(&mut self, id: LayerId) -> &mut Buffer {
        &mut self.layers[id.0].buffer
    }

    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        self.layers[id.0].visible = visible;
    }

    /// Scroll a document layer, clamped to its buffer.
    pub fn set_scroll(&mut self, id: LayerId, scroll: u16) {
        let layer = &mut self.layers[id.0];
        layer.scroll = scroll.min(layer.max_scroll());
    }

    /// Blit every visible layer into `frame` in ascending z order.
    pub fn composite(&self, frame: &mut Buffer) {
        let mut order: Vec<&Layer> = self.layers.iter().filter(|l| l.visible).collect();
        order.sort_by_key(|l| l.z_index);

        let frame_area = frame.area;
        for layer in order {
            let bounds = layer.bounds.intersection(frame_area);
            for y in 0..bounds.height {
                let src_y = y + layer.scroll;
                if src_y >= layer.buffer.area.height {
                    break;
                }
                for x in 0..bounds.width {
                    let Some(cell) = layer.buffer.cell((x, src_y)) else {
                        continue;
                    };
                    if cell.symbol() == " "
                        && cell.fg == Color::Reset
                        && cell.bg == Color::Reset
                    {
                        continue;
                    }
                    if let Some(dst) = frame.cell_mut((bounds.x + x, bounds.y + y)) {
                        *dst = cell.clone();
                    }
                }
            }
        }
    }
}
