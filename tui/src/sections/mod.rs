//! Page Sections
//!
//! The four sections of the page, stacked vertically into one tall
//! document buffer: hero, experience timeline, project cards and contact.
//! Each section exposes a height function (content + width -> rows) and a
//! renderer that draws into its slice of the document. `PageLayout` runs
//! the height pass, and `register` feeds the resulting geometry to the
//! viewport for navigation anchors and scroll-reveal tracking.

pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;

use folio_core::ContentStore;
use ratatui::layout::Rect;

use crate::viewport::{SectionId, Viewport};

/// Threshold for experience rows (half visible).
pub const EXPERIENCE_THRESHOLD: f32 = 0.5;
/// Threshold for project cards (almost fully visible).
pub const PROJECT_THRESHOLD: f32 = 0.85;

/// Resolved document geometry for one width/height combination.
#[derive(Clone, Copy, Debug)]
pub struct PageLayout {
    pub hero: Rect,
    pub experience: Rect,
    pub projects: Rect,
    pub contact: Rect,
    pub total_height: u16,
}

impl PageLayout {
    /// Stack the sections for the given page width and view height.
    pub fn compute(content: &ContentStore, width: u16, view_height: u16) -> Self {
        let hero_h = hero::height(content, width, view_height);
        let experience_h = experience::height(content, width);
        let projects_h = projects::height(content, width);
        let contact_h = contact::height(content, width);

        let mut y = 0;
        let mut next = |h: u16| {
            let rect = Rect::new(0, y, width, h);
            y += h;
            rect
        };

        Self {
            hero: next(hero_h),
            experience: next(experience_h),
            projects: next(projects_h),
            contact: next(contact_h),
            total_height: hero_h + experience_h + projects_h + contact_h,
        }
    }

    /// Register navigation anchors and reveal-tracked elements.
    pub fn register(&self, content: &ContentStore, viewport: &mut Viewport) {
        viewport.set_anchor(SectionId::Hero, self.hero.y);
        viewport.set_anchor(SectionId::Experience, self.experience.y);
        viewport.set_anchor(SectionId::Projects, self.projects.y);
        viewport.set_anchor(SectionId::Contact, self.contact.y);

        for (i, rect) in experience::entry_rects(content, self.experience).enumerate() {
            viewport.track(
                format!("experience-{i}"),
                rect.y,
                rect.height,
                EXPERIENCE_THRESHOLD,
            );
        }
        for (i, rect) in projects::card_rects(content, self.projects).enumerate() {
            viewport.track(format!("project-{i}"), rect.y, rect.height, PROJECT_THRESHOLD);
        }
    }
}

/// Draw a section heading: accent title with an underline rule.
pub(crate) fn heading(
    buf: &mut ratatui::buffer::Buffer,
    area: Rect,
    title: &str,
    palette: &crate::theme::Palette,
) {
    use ratatui::style::{Modifier, Style};
    use unicode_width::UnicodeWidthStr;

    let x = area.x + 2;
    buf.set_string(
        x,
        area.y + 1,
        title,
        Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
    );
    let rule = "─".repeat(UnicodeWidthStr::width(title));
    buf.set_string(x, area.y + 2, rule, Style::new().fg(palette.accent));
}

/// Rows a heading occupies, including surrounding padding.
pub(crate) const HEADING_ROWS: u16 = 4;
