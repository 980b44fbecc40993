//! Hero Section
//!
//! The opening screen: greeting title and subtitle cascading in character
//! by character, a simulated terminal typing three `profile` commands and
//! printing their responses, then the call-to-action buttons. Everything
//! is driven by the hero timeline; until the sequence begins the section
//! renders nothing (the loading overlay covers it anyway).
//!
//! Once the timeline is gone (torn down mid-sequence) the section settles
//! into its fully-revealed state instead of replaying.

use folio_core::{hero_title, targets, ContentStore, HeroReveal, Timeline};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::theme::Palette;
use crate::widgets::{cascade_text, faded_string};

/// Commands the terminal block types, in order.
pub const COMMANDS: [&str; 3] = ["profile --summary", "profile --skills", "profile --focus"];

const TITLE_ROW: u16 = 3;
const SUBTITLE_ROW: u16 = 5;
const TERMINAL_ROW: u16 = 7;
const TERMINAL_MAX_WIDTH: u16 = 64;

/// Rows the hero occupies: at least one full view, more if the terminal
/// block needs the room.
pub fn height(content: &ContentStore, width: u16, view_height: u16) -> u16 {
    let needed = TERMINAL_ROW + terminal_height(content, width) + 5;
    view_height.max(needed)
}

fn terminal_width(width: u16) -> u16 {
    width.saturating_sub(4).min(TERMINAL_MAX_WIDTH)
}

/// Response lines for the three commands, wrapped to the terminal interior.
fn response_lines(content: &ContentStore, inner_width: u16) -> [Vec<String>; 3] {
    let wrap_width = inner_width.max(8) as usize;

    let summary = textwrap::wrap(&content.personal().summary, wrap_width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    let skills = content
        .skills()
        .categories()
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(name, items)| format!("{name:<12} : {}", items.join(", ")))
        .collect();

    let focus = content
        .focus()
        .iter()
        .map(|item| format!("- {item}"))
        .collect();

    [summary, skills, focus]
}

fn terminal_height(content: &ContentStore, width: u16) -> u16 {
    let inner = terminal_width(width).saturating_sub(4);
    let responses = response_lines(content, inner);
    let lines: usize = 3 + responses.iter().map(Vec::len).sum::<usize>();
    lines as u16 + 2
}

/// How a target renders right now.
enum View<'a> {
    Animated(&'a Timeline),
    /// Timeline released; everything shows at rest
    Settled,
}

impl View<'_> {
    fn started(&self, target: &str) -> bool {
        match self {
            View::Animated(tl) => tl.stage(target).is_some_and(|s| s.started),
            View::Settled => true,
        }
    }

    fn finished(&self, target: &str) -> bool {
        match self {
            View::Animated(tl) => tl.stage(target).is_some_and(|s| s.finished),
            View::Settled => true,
        }
    }

    fn opacity(&self, target: &str) -> f32 {
        match self {
            View::Animated(tl) => tl.stage(target).map_or(0.0, |s| s.progress),
            View::Settled => 1.0,
        }
    }

    fn char_progress(&self, target: &str, index: usize) -> f32 {
        match self {
            View::Animated(tl) => tl.char_progress(target, index),
            View::Settled => 1.0,
        }
    }

    fn typed(&self, target: &str, full: &str) -> String {
        match self {
            View::Animated(tl) => tl.typed_prefix(target).unwrap_or_default(),
            View::Settled => full.to_string(),
        }
    }
}

pub fn render(
    buf: &mut Buffer,
    area: Rect,
    content: &ContentStore,
    palette: &Palette,
    hero: &HeroReveal,
    cursor_on: bool,
) {
    if !hero.has_begun() || area.width < 12 {
        return;
    }
    let view = match hero.timeline() {
        Some(tl) => View::Animated(tl),
        None => View::Settled,
    };
    let hero_op = view.opacity(targets::HERO);
    let x = area.x + 2;

    // Greeting, character by character with an overshooting pop
    if view.started(targets::TITLE) {
        let title = hero_title(content);
        cascade_text(buf, x, area.y + TITLE_ROW, &title, palette.accent, palette, |i| {
            hero_op * view.char_progress(targets::TITLE, i)
        });
    }
    if view.started(targets::SUBTITLE) {
        let subtitle = &content.personal().title;
        cascade_text(
            buf,
            x,
            area.y + SUBTITLE_ROW,
            subtitle,
            palette.text_secondary,
            palette,
            |i| hero_op * view.char_progress(targets::SUBTITLE, i),
        );
    }

    let term_bottom = if view.started(targets::TERMINAL) {
        render_terminal(buf, area, content, palette, &view, hero_op, cursor_on)
    } else {
        area.y + TERMINAL_ROW + terminal_height(content, area.width)
    };

    let buttons_op = hero_op * view.opacity(targets::BUTTONS);
    if buttons_op > 0.0 && area.width >= 42 {
        faded_string(
            buf,
            x,
            term_bottom + 1,
            "[ View Projects → ]   [ Contact Me → ]",
            palette.accent,
            palette,
            buttons_op,
        );
    }

    if view.finished(targets::BUTTONS) {
        faded_string(
            buf,
            x,
            area.y + area.height.saturating_sub(2),
            "↓ scroll",
            palette.dim,
            palette,
            1.0,
        );
    }
}

/// Draw the terminal block; returns the row just below it.
fn render_terminal(
    buf: &mut Buffer,
    area: Rect,
    content: &ContentStore,
    palette: &Palette,
    view: &View,
    hero_op: f32,
    cursor_on: bool,
) -> u16 {
    let width = terminal_width(area.width);
    let height = terminal_height(content, area.width);
    let term = Rect::new(area.x + 2, area.y + TERMINAL_ROW, width, height);

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette.faded(palette.dim, hero_op)))
        .title(" ~/portfolio ")
        .title_style(Style::new().fg(palette.faded(palette.dim, hero_op)))
        .render(term, buf);

    let inner_x = term.x + 2;
    let inner_width = width.saturating_sub(4);
    let responses = response_lines(content, inner_width);
    let pairs = [
        (targets::COMMAND_1, targets::RESPONSE_1),
        (targets::COMMAND_2, targets::RESPONSE_2),
        (targets::COMMAND_3, targets::RESPONSE_3),
    ];

    let mut y = term.y + 1;
    for (i, (command, response)) in pairs.into_iter().enumerate() {
        if !view.started(command) {
            break;
        }
        let typed = view.typed(command, COMMANDS[i]);
        faded_string(buf, inner_x, y, "$", palette.accent, palette, hero_op);
        faded_string(
            buf,
            inner_x + 2,
            y,
            &typed,
            palette.text_primary,
            palette,
            hero_op,
        );
        if cursor_on && !view.finished(command) {
            let col = inner_x + 2 + typed.chars().count() as u16;
            buf.set_string(
                col,
                y,
                "█",
                Style::new().fg(palette.faded(palette.accent, hero_op)),
            );
        }
        y += 1;

        let response_op = hero_op * view.opacity(response);
        for line in &responses[i] {
            if response_op > 0.0 {
                let style = if i == 1 {
                    // Skill category labels lead each line
                    Style::new()
                        .fg(palette.faded(palette.text_secondary, response_op))
                        .add_modifier(Modifier::DIM)
                } else {
                    Style::new().fg(palette.faded(palette.text_secondary, response_op))
                };
                buf.set_string(inner_x, y, line, style);
            }
            y += 1;
        }
    }

    term.y + height
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn content() -> ContentStore {
        ContentStore::from_json(
            r#"{
                "personal": {
                    "name": "Ada",
                    "title": "Engineer",
                    "summary": "Builds reliable systems."
                },
                "skills": { "frontend": ["React", "Vue"], "backend": ["Rust"] },
                "focus": ["Compilers"],
                "experience": [],
                "projects": []
            }"#,
        )
        .unwrap()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn buffer_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn nothing_renders_before_the_sequence_begins() {
        let content = content();
        let hero = HeroReveal::new();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &content, &Palette::default(), &hero, false);
        assert_eq!(buffer_text(&buf).trim(), "");
    }

    #[test]
    fn settled_hero_shows_everything() {
        let content = content();
        let mut hero = HeroReveal::new();
        hero.begin(&content);
        hero.tick(Duration::from_secs(60));

        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &content, &Palette::default(), &hero, false);
        let text = buffer_text(&buf);

        assert!(text.contains("Hey, I'm Ada"));
        assert!(text.contains("Engineer"));
        assert!(text.contains("$ profile --summary"));
        assert!(text.contains("React, Vue"));
        assert!(text.contains("- Compilers"));
        assert!(text.contains("[ View Projects → ]"));
        assert!(text.contains("↓ scroll"));
    }

    #[test]
    fn later_stages_stay_hidden_early() {
        let content = content();
        let mut hero = HeroReveal::new();
        hero.begin(&content);
        hero.tick(Duration::from_millis(600)); // title cascading, terminal idle

        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &content, &Palette::default(), &hero, false);
        let text = buffer_text(&buf);

        assert!(!text.contains("profile --skills"));
        assert!(!text.contains("[ View Projects"));
    }

    #[test]
    fn cancelled_timeline_settles_without_replaying() {
        let content = content();
        let mut hero = HeroReveal::new();
        hero.begin(&content);
        hero.tick(Duration::from_millis(700));
        hero.cancel();

        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &content, &Palette::default(), &hero, false);
        assert!(buffer_text(&buf).contains("Hey, I'm Ada"));
    }

    #[test]
    fn height_covers_the_terminal_on_short_views() {
        let content = content();
        let h = height(&content, 80, 10);
        assert!(h > 10);
        assert_eq!(height(&content, 80, 50), 50);
    }
}
