//! Reveal Text Helpers
//!
//! The terminal has no opacity or sub-cell translation, so entrance
//! effects are emulated: fades mix the foreground toward the page
//! background, slides shift whole rows, and per-character cascades pop
//! glyphs in at their own staggered progress. These helpers keep that
//! emulation in one place so every section renders entrances the same way.

use ratatui::buffer::Buffer;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthChar;

use crate::theme::Palette;

/// Draw `text` at (x, y) with per-character progress from `progress`.
///
/// A character with zero progress is not drawn at all; partial progress
/// renders it faded. Double-width glyphs advance the cursor accordingly.
pub fn cascade_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    color: Color,
    palette: &Palette,
    progress: impl Fn(usize) -> f32,
) {
    let mut col = x;
    for (index, ch) in text.chars().enumerate() {
        let width = ch.width().unwrap_or(0) as u16;
        if width == 0 {
            continue;
        }
        let p = progress(index);
        if p > 0.0 {
            let style = Style::new().fg(palette.faded(color, p.min(1.0)));
            buf.set_string(col, y, ch.to_string(), style);
        }
        col = col.saturating_add(width);
    }
}

/// Draw a whole string at a single opacity.
pub fn faded_string(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    color: Color,
    palette: &Palette,
    opacity: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    buf.set_string(x, y, text, Style::new().fg(palette.faded(color, opacity)));
}

/// Row offset and opacity for a slide-up entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideReveal {
    /// Extra rows below the resting position
    pub offset_rows: u16,
    /// Fade opacity, 0.0..=1.0
    pub opacity: f32,
}

/// Map entrance progress to a slide-up from `travel` rows below.
pub fn slide_up(progress: f32, travel: u16) -> SlideReveal {
    let p = progress.clamp(0.0, 1.0);
    SlideReveal {
        offset_rows: ((1.0 - p) * travel as f32).round() as u16,
        opacity: p,
    }
}
