//! Contact Section
//!
//! Closing section: an invitation line, the contact channels from the
//! content document and the footer. Channels with no value in the
//! document are left out rather than rendered empty.

use folio_core::ContentStore;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::sections::{heading, HEADING_ROWS};
use crate::theme::Palette;

const INVITE: &str =
    "I'm always open to discussing new projects, creative ideas or opportunities.";

fn invite_lines(width: u16) -> usize {
    textwrap::wrap(INVITE, width.saturating_sub(4).max(10) as usize).len()
}

fn channels(content: &ContentStore) -> Vec<(&'static str, &str)> {
    let personal = content.personal();
    [
        ("email", personal.email.as_str()),
        ("github", personal.github.as_str()),
        ("linkedin", personal.linkedin.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect()
}

pub fn height(content: &ContentStore, width: u16) -> u16 {
    HEADING_ROWS + invite_lines(width) as u16 + 1 + channels(content).len() as u16 + 2 + 1
}

pub fn render(buf: &mut Buffer, area: Rect, content: &ContentStore, palette: &Palette) {
    heading(buf, area, "Get In Touch", palette);

    let x = area.x + 2;
    let mut y = area.y + HEADING_ROWS;
    let wrap_width = area.width.saturating_sub(4).max(10) as usize;
    for line in textwrap::wrap(INVITE, wrap_width) {
        buf.set_string(x, y, line, Style::new().fg(palette.text_primary));
        y += 1;
    }
    y += 1;

    for (label, value) in channels(content) {
        buf.set_string(x, y, format!("{label:<9}"), Style::new().fg(palette.dim));
        buf.set_string(x + 9, y, value, Style::new().fg(palette.accent));
        y += 1;
    }
    y += 1;

    let name = &content.personal().name;
    if !name.is_empty() {
        buf.set_string(
            x,
            y,
            format!("Made with ♥ by {name}"),
            Style::new().fg(palette.dim),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

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
    fn shows_all_channels_and_footer() {
        let content = ContentStore::from_json(
            r#"{
                "personal": {
                    "name": "Ada",
                    "email": "ada@example.dev",
                    "github": "https://github.com/ada",
                    "linkedin": "https://www.linkedin.com/in/ada"
                },
                "skills": {}, "experience": [], "projects": []
            }"#,
        )
        .unwrap();
        let area = Rect::new(0, 0, 90, height(&content, 90));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &content, &Palette::default());
        let text = buffer_text(&buf);

        assert!(text.contains("Get In Touch"));
        assert!(text.contains("ada@example.dev"));
        assert!(text.contains("https://github.com/ada"));
        assert!(text.contains("Made with ♥ by Ada"));
    }

    #[test]
    fn empty_channels_shrink_the_section() {
        let full = ContentStore::from_json(
            r#"{
                "personal": { "email": "a@b.c", "github": "g", "linkedin": "l" },
                "skills": {}, "experience": [], "projects": []
            }"#,
        )
        .unwrap();
        let bare = ContentStore::from_json(
            r#"{ "personal": {}, "skills": {}, "experience": [], "projects": [] }"#,
        )
        .unwrap();
        assert_eq!(height(&full, 80), height(&bare, 80) + 3);
    }
}
