//! Navigation
//!
//! A fixed two-row bar across the top of the page: the logo on the left
//! and the section links with their hotkeys on the right, with the active
//! section highlighted. On narrow screens the links collapse into a
//! toggleable full-menu overlay, mirroring a hamburger menu.

use folio_core::ContentStore;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;
use crate::viewport::SectionId;

/// Rows the bar occupies.
pub const BAR_HEIGHT: u16 = 2;

/// Below this width the link row collapses into the menu overlay.
pub const NARROW_WIDTH: u16 = 80;

pub fn is_narrow(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Open/closed state of the narrow-screen menu.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Draw the bar into the top rows of `width`-wide layer buffer.
pub fn render_bar(
    buf: &mut Buffer,
    width: u16,
    content: &ContentStore,
    palette: &Palette,
    active: SectionId,
) {
    // Painted background makes the bar opaque over the scrolling page
    let bg = Style::new().bg(palette.darker_bg);
    for y in 0..BAR_HEIGHT {
        for x in 0..width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_style(bg);
            }
        }
    }

    let logo = format!(">_ {}", content.personal().name.to_uppercase());
    buf.set_string(
        1,
        0,
        &logo,
        Style::new()
            .fg(palette.accent)
            .bg(palette.darker_bg)
            .add_modifier(Modifier::BOLD),
    );

    if is_narrow(width) {
        let hint = "[m] menu";
        let x = width.saturating_sub(hint.width() as u16 + 1);
        buf.set_string(x, 0, hint, Style::new().fg(palette.dim).bg(palette.darker_bg));
    } else {
        let mut links = String::new();
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            links.push_str(&format!("[{}] {}   ", i + 1, section.label()));
        }
        let mut x = width.saturating_sub(links.width() as u16 + 1);
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            let label = format!("[{}] {}", i + 1, section.label());
            let style = if section == active {
                Style::new()
                    .fg(palette.accent)
                    .bg(palette.darker_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(palette.dim).bg(palette.darker_bg)
            };
            buf.set_string(x, 0, &label, style);
            x += label.width() as u16 + 3;
        }
    }

    let rule = "─".repeat(width as usize);
    buf.set_string(0, 1, rule, Style::new().fg(palette.dim).bg(palette.darker_bg));

    // Profile links ride the rule row, verbatim from the document
    if !is_narrow(width) {
        let personal = content.personal();
        let urls: Vec<&str> = [personal.github.as_str(), personal.linkedin.as_str()]
            .into_iter()
            .filter(|url| !url.is_empty())
            .collect();
        if !urls.is_empty() {
            let line = format!(" {} ", urls.join("  ·  "));
            let x = width.saturating_sub(line.width() as u16 + 1);
            buf.set_string(x, 1, line, Style::new().fg(palette.dim).bg(palette.darker_bg));
        }
    }
}

/// Draw the narrow-screen menu overlay centered in `area`.
pub fn render_menu(
    buf: &mut Buffer,
    area: Rect,
    content: &ContentStore,
    palette: &Palette,
    active: SectionId,
) {
    let personal = content.personal();
    let urls: Vec<&str> = [personal.github.as_str(), personal.linkedin.as_str()]
        .into_iter()
        .filter(|url| !url.is_empty())
        .collect();

    let width = area.width.saturating_sub(4).min(44).max(20.min(area.width));
    let rows = SectionId::ALL.len() + if urls.is_empty() { 0 } else { urls.len() + 1 };
    let height = (rows as u16 + 2).min(area.height);
    let menu = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    Clear.render(menu, buf);
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette.accent).bg(palette.dark_bg))
        .style(Style::new().bg(palette.dark_bg))
        .title(" menu ")
        .render(menu, buf);

    for (i, section) in SectionId::ALL.into_iter().enumerate() {
        let y = menu.y + 1 + i as u16;
        if y >= menu.y + menu.height - 1 {
            break;
        }
        let style = if section == active {
            Style::new()
                .fg(palette.accent)
                .bg(palette.dark_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(palette.text_primary).bg(palette.dark_bg)
        };
        buf.set_string(
            menu.x + 2,
            y,
            format!("[{}] {}", i + 1, section.label()),
            style,
        );
    }

    let dim = Style::new().fg(palette.dim).bg(palette.dark_bg);
    for (i, url) in urls.iter().enumerate() {
        let y = menu.y + 2 + SectionId::ALL.len() as u16 + i as u16;
        if y >= menu.y + menu.height - 1 {
            break;
        }
        buf.set_stringn(menu.x + 2, y, url, menu.width.saturating_sub(4) as usize, dim);
    }
}
