//! Projects Section
//!
//! Bordered project cards stacked down the page. A card reveals only once
//! it is almost fully in view, giving the stronger entrance the gallery
//! had. An empty project list still renders the section heading.

use folio_core::{ContentStore, Project, ScrollReveals};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::sections::{heading, HEADING_ROWS};
use crate::theme::Palette;
use crate::widgets::slide_up;

const SLIDE_TRAVEL: u16 = 2;

fn card_width(width: u16) -> u16 {
    width.saturating_sub(4)
}

fn description_lines(project: &Project, width: u16) -> usize {
    if project.description.is_empty() {
        return 0;
    }
    textwrap::wrap(
        &project.description,
        card_width(width).saturating_sub(4).max(10) as usize,
    )
    .len()
}

fn card_height(project: &Project, width: u16) -> u16 {
    let mut rows = 2 + 1; // borders + title
    if !project.image.is_empty() {
        rows += 1;
    }
    rows += description_lines(project, width) as u16;
    if !project.tech.is_empty() {
        rows += 1;
    }
    if !project.demo.is_empty() || !project.github.is_empty() {
        rows += 1;
    }
    rows
}

pub fn height(content: &ContentStore, width: u16) -> u16 {
    let cards: u16 = content
        .projects()
        .iter()
        .map(|p| card_height(p, width) + 1)
        .sum();
    HEADING_ROWS + cards + 1
}

/// Document rects of the cards, for reveal tracking.
pub fn card_rects<'a>(
    content: &'a ContentStore,
    section: Rect,
) -> impl Iterator<Item = Rect> + 'a {
    let mut y = section.y + HEADING_ROWS;
    content.projects().iter().map(move |project| {
        let h = card_height(project, section.width);
        let rect = Rect::new(section.x + 2, y, card_width(section.width), h);
        y += h + 1;
        rect
    })
}

pub fn render(
    buf: &mut Buffer,
    area: Rect,
    content: &ContentStore,
    palette: &Palette,
    reveals: &ScrollReveals,
) {
    heading(buf, area, "Projects", palette);

    for (i, (project, rect)) in content
        .projects()
        .iter()
        .zip(card_rects(content, area))
        .enumerate()
    {
        let progress = reveals.progress(&format!("project-{i}"));
        if progress <= 0.0 {
            continue;
        }
        render_card(buf, rect, project, palette, progress);
    }
}

fn render_card(
    buf: &mut Buffer,
    rect: Rect,
    project: &Project,
    palette: &Palette,
    progress: f32,
) {
    let slide = slide_up(progress, SLIDE_TRAVEL);
    // The slide may dip into the separator row but never past it
    let top = rect.y + slide.offset_rows;
    let height = rect.height.min(rect.y + rect.height + 1 - top);
    if height < 2 {
        return;
    }
    let card = Rect::new(rect.x, top, rect.width, height);

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette.faded(palette.dim, slide.opacity)))
        .render(card, buf);

    let x = card.x + 2;
    let bottom = card.y + card.height - 1;
    let mut y = card.y + 1;
    let mut line = |buf: &mut Buffer, y: &mut u16, text: &str, style: Style| {
        if *y < bottom {
            buf.set_string(x, *y, text, style);
        }
        *y += 1;
    };

    line(
        buf,
        &mut y,
        &project.title,
        Style::new()
            .fg(palette.faded(palette.accent, slide.opacity))
            .add_modifier(Modifier::BOLD),
    );

    let dim = Style::new().fg(palette.faded(palette.dim, slide.opacity));
    if !project.image.is_empty() {
        line(buf, &mut y, &format!("░░ {}", project.image), dim);
    }

    let body = Style::new().fg(palette.faded(palette.text_primary, slide.opacity));
    if !project.description.is_empty() {
        let wrap_width = rect.width.saturating_sub(4).max(10) as usize;
        for wrapped in textwrap::wrap(&project.description, wrap_width) {
            line(buf, &mut y, &wrapped, body);
        }
    }

    if !project.tech.is_empty() {
        line(
            buf,
            &mut y,
            &format!("tech: {}", project.tech.join(" · ")),
            Style::new().fg(palette.faded(palette.text_secondary, slide.opacity)),
        );
    }

    let mut links = Vec::new();
    if !project.demo.is_empty() {
        links.push(format!("demo: {}", project.demo));
    }
    if !project.github.is_empty() {
        links.push(format!("code: {}", project.github));
    }
    if !links.is_empty() {
        line(buf, &mut y, &links.join("   "), dim);
    }
}
