//! Experience Section
//!
//! The work-history timeline. Entries stay in document order; each one
//! slides up and fades in the first time half of it scrolls into view,
//! and stays put afterwards.

use folio_core::{ContentStore, ExperienceEntry, ScrollReveals};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::sections::{heading, HEADING_ROWS};
use crate::theme::Palette;
use crate::widgets::slide_up;

/// Rows an entry slides up from.
const SLIDE_TRAVEL: u16 = 2;

fn description_lines(entry: &ExperienceEntry, width: u16) -> usize {
    if entry.description.is_empty() {
        return 0;
    }
    textwrap::wrap(&entry.description, width.saturating_sub(6).max(10) as usize).len()
}

fn entry_height(entry: &ExperienceEntry, width: u16) -> u16 {
    2 + description_lines(entry, width) as u16 + entry.highlights.len() as u16 + 1
}

pub fn height(content: &ContentStore, width: u16) -> u16 {
    let entries: u16 = content
        .experience()
        .iter()
        .map(|e| entry_height(e, width))
        .sum();
    HEADING_ROWS + entries + 1
}

/// Document rects of the entries, for reveal tracking.
pub fn entry_rects<'a>(
    content: &'a ContentStore,
    section: Rect,
) -> impl Iterator<Item = Rect> + 'a {
    let mut y = section.y + HEADING_ROWS;
    content.experience().iter().map(move |entry| {
        let h = entry_height(entry, section.width);
        let rect = Rect::new(section.x, y, section.width, h);
        y += h;
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
    heading(buf, area, "Experience", palette);

    for (i, (entry, rect)) in content
        .experience()
        .iter()
        .zip(entry_rects(content, area))
        .enumerate()
    {
        let progress = reveals.progress(&format!("experience-{i}"));
        if progress <= 0.0 {
            continue;
        }
        render_entry(buf, rect, entry, palette, progress);
    }
}

fn render_entry(
    buf: &mut Buffer,
    rect: Rect,
    entry: &ExperienceEntry,
    palette: &Palette,
    progress: f32,
) {
    let slide = slide_up(progress, SLIDE_TRAVEL);
    let x = rect.x + 2;
    let bottom = rect.y + rect.height;
    let mut y = rect.y + slide.offset_rows;

    let mut line = |buf: &mut Buffer, y: &mut u16, text: &str, style: Style| {
        if *y < bottom {
            buf.set_string(x, *y, text, style);
        }
        *y += 1;
    };

    let year_style = Style::new()
        .fg(palette.faded(palette.accent, slide.opacity))
        .add_modifier(Modifier::BOLD);
    line(
        buf,
        &mut y,
        &format!("▸ {}  {}", entry.year, entry.company),
        year_style,
    );

    let role = if entry.duration.is_empty() {
        entry.role.clone()
    } else {
        format!("{} · {}", entry.role, entry.duration)
    };
    line(
        buf,
        &mut y,
        &format!("  {role}"),
        Style::new().fg(palette.faded(palette.text_secondary, slide.opacity)),
    );

    let body = Style::new().fg(palette.faded(palette.text_primary, slide.opacity));
    if !entry.description.is_empty() {
        let wrap_width = rect.width.saturating_sub(6).max(10) as usize;
        for wrapped in textwrap::wrap(&entry.description, wrap_width) {
            line(buf, &mut y, &format!("  {wrapped}"), body);
        }
    }

    let dim = Style::new().fg(palette.faded(palette.dim, slide.opacity));
    for highlight in &entry.highlights {
        line(buf, &mut y, &format!("  • {highlight}"), dim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content() -> ContentStore {
        ContentStore::from_json(
            r#"{
                "personal": {},
                "skills": {},
                "experience": [
                    {
                        "year": "2024",
                        "company": "Tech Innovations Inc.",
                        "role": "Senior Developer",
                        "duration": "2022 - Present",
                        "description": "Leading frontend work.",
                        "highlights": ["Cut load times", "Mentored juniors"]
                    },
                    { "year": "2023", "company": "DataViz Solutions" }
                ],
                "projects": []
            }"#,
        )
        .unwrap()
    }

    fn buffer_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn entries_stack_in_document_order() {
        let content = content();
        let area = Rect::new(0, 0, 80, height(&content, 80));
        let rects: Vec<Rect> = entry_rects(&content, area).collect();
        assert_eq!(rects.len(), 2);
        assert!(rects[0].y < rects[1].y);
        assert_eq!(rects[1].y, rects[0].y + rects[0].height);
    }

    #[test]
    fn unrevealed_entries_are_hidden() {
        let content = content();
        let area = Rect::new(0, 0, 80, height(&content, 80));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &content, &Palette::default(), &ScrollReveals::new());
        let text = buffer_text(&buf);

        assert!(text.contains("Experience"));
        assert!(!text.contains("Tech Innovations"));
    }

    #[test]
    fn revealed_entry_shows_all_fields() {
        let content = content();
        let mut reveals = ScrollReveals::new();
        reveals.observe("experience-0", 1.0, 0.5);
        reveals.tick(std::time::Duration::from_secs(2));

        let area = Rect::new(0, 0, 80, height(&content, 80));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &content, &Palette::default(), &reveals);
        let text = buffer_text(&buf);

        assert!(text.contains("▸ 2024  Tech Innovations Inc."));
        assert!(text.contains("Senior Developer · 2022 - Present"));
        assert!(text.contains("Leading frontend work."));
        assert!(text.contains("• Cut load times"));
        // The second entry has not fired
        assert!(!text.contains("DataViz"));
    }
}
