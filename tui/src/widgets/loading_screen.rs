//! Loading Screen
//!
//! Full-screen boot overlay shown until the loading sequencer completes:
//! accumulated status lines with a blinking cursor on the newest one, and
//! an indeterminate sweep bar underneath. The overlay paints every cell,
//! fully covering the page while it is up.

use std::time::Duration;

use folio_core::LoadingSequencer;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::Palette;

const CURSOR_PERIOD_MS: u128 = 1_000;
const SWEEP_CELLS_PER_SEC: f32 = 24.0;
/// Sweep segment as a fraction of the bar.
const SWEEP_FRACTION: f32 = 0.4;

pub fn render(
    buf: &mut Buffer,
    area: Rect,
    sequencer: &LoadingSequencer,
    palette: &Palette,
    elapsed: Duration,
) {
    let bg = Style::new().bg(palette.darker_bg);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_style(bg);
            }
        }
    }
    if area.width < 10 || area.height < 6 {
        return;
    }

    let lines = sequencer.visible_lines();
    let block_height = lines.len() as u16 + 3;
    let top = area.y + (area.height.saturating_sub(block_height)) / 2;
    let x = area.x + (area.width / 2).saturating_sub(16);

    let text_style = Style::new().fg(palette.text_secondary).bg(palette.darker_bg);
    let accent = Style::new().fg(palette.accent).bg(palette.darker_bg);
    for (i, line) in lines.iter().enumerate() {
        let y = top + i as u16;
        buf.set_string(x, y, "$", accent);
        buf.set_string(x + 2, y, &line.text, text_style);
    }

    // Blinking cursor trails the newest line while the sequence runs
    let cursor_on = (elapsed.as_millis() % CURSOR_PERIOD_MS) < CURSOR_PERIOD_MS / 2;
    if cursor_on && !sequencer.is_complete() {
        if let Some(last) = lines.last() {
            let y = top + lines.len() as u16 - 1;
            let col = x + 2 + last.text.chars().count() as u16 + 1;
            buf.set_string(col, y, "█", accent);
        } else {
            buf.set_string(x, top, "█", accent);
        }
    }

    render_sweep(buf, area, palette, elapsed, top + lines.len() as u16 + 2);
}

fn render_sweep(buf: &mut Buffer, area: Rect, palette: &Palette, elapsed: Duration, y: u16) {
    let bar_width = area.width.saturating_sub(8).min(40);
    if bar_width < 4 || y >= area.bottom() {
        return;
    }
    let x = area.x + (area.width.saturating_sub(bar_width)) / 2;

    let track = Style::new().fg(palette.dim).bg(palette.darker_bg);
    buf.set_string(x, y, "─".repeat(bar_width as usize), track);

    let segment = ((bar_width as f32 * SWEEP_FRACTION) as u16).max(1);
    let span = (bar_width + segment) as f32;
    let head = (elapsed.as_secs_f32() * SWEEP_CELLS_PER_SEC) % span;
    let accent = Style::new().fg(palette.accent).bg(palette.darker_bg);
    for i in 0..segment {
        let pos = head as i32 - i as i32;
        if (0..bar_width as i32).contains(&pos) {
            buf.set_string(x + pos as u16, y, "━", accent);
        }
    }
}
