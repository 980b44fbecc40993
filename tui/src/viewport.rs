//! Viewport
//!
//! Scroll model for the page document: the current offset, the section
//! anchors the navigation jumps to, and the tracked elements whose visible
//! fraction feeds the once-only scroll reveals. Layout is registered by
//! the section renderers each time the document is (re)built, so tracked
//! positions always match what is on screen.

use std::collections::HashMap;

use folio_core::ScrollReveals;

/// The four page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

/// An element watched for scroll-triggered entrance.
#[derive(Clone, Debug)]
struct TrackedElement {
    id: String,
    y: u16,
    height: u16,
    threshold: f32,
}

/// Scroll state over a document taller than the screen.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    offset: u16,
    view_height: u16,
    doc_height: u16,
    anchors: HashMap<SectionId, u16>,
    elements: Vec<TrackedElement>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset layout for a (re)built document. Anchors and tracked elements
    /// are re-registered by the renderers; the offset is clamped to the new
    /// extent so a resize never scrolls past the end.
    pub fn begin_layout(&mut self, doc_height: u16, view_height: u16) {
        self.doc_height = doc_height;
        self.view_height = view_height;
        self.anchors.clear();
        self.elements.clear();
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_anchor(&mut self, section: SectionId, y: u16) {
        self.anchors.insert(section, y);
    }

    /// Watch an element at document row `y` for its entrance reveal.
    pub fn track(&mut self, id: impl Into<String>, y: u16, height: u16, threshold: f32) {
        self.elements.push(TrackedElement {
            id: id.into(),
            y,
            height,
            threshold,
        });
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max_offset(&self) -> u16 {
        self.doc_height.saturating_sub(self.view_height)
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = self.offset as i32 + delta;
        self.scroll_to(target.max(0) as u16);
    }

    /// Jump so the section's anchor sits at the top of the view.
    pub fn jump_to(&mut self, section: SectionId) {
        if let Some(&y) = self.anchors.get(&section) {
            self.scroll_to(y);
        }
    }

    /// Section the view is currently inside, for the navigation highlight.
    /// A section becomes active once its anchor crosses the middle of the
    /// view.
    pub fn active_section(&self) -> SectionId {
        let midline = self.offset + self.view_height / 2;
        let mut active = SectionId::Hero;
        for section in SectionId::ALL {
            if let Some(&y) = self.anchors.get(&section) {
                if y <= midline {
                    active = section;
                }
            }
        }
        active
    }

    /// Fraction of the element inside the visible window, measured against
    /// the smaller of the element and the view. An element taller than the
    /// view can still reach 1.0 once it fills the screen, so no threshold
    /// is unreachable on a short terminal.
    fn visible_fraction(&self, element: &TrackedElement) -> f32 {
        if element.height == 0 || self.view_height == 0 {
            return 0.0;
        }
        let view_top = self.offset;
        let view_bottom = self.offset + self.view_height;
        let top = element.y.max(view_top);
        let bottom = (element.y + element.height).min(view_bottom);
        let span = element.height.min(self.view_height);
        bottom.saturating_sub(top) as f32 / span as f32
    }

    /// Report every tracked element's visibility to the reveal set.
    /// Returns how many reveals fired this pass.
    pub fn observe_all(&self, reveals: &mut ScrollReveals) -> usize {
        let mut fired = 0;
        for element in &self.elements {
            if reveals.observe(&element.id, self.visible_fraction(element), element.threshold) {
                fired += 1;
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn viewport(doc: u16, view: u16) -> Viewport {
        let mut vp = Viewport::new();
        vp.begin_layout(doc, view);
        vp
    }

    #[test]
    fn scroll_clamps_to_document() {
        let mut vp = viewport(100, 30);
        vp.scroll_by(-10);
        assert_eq!(vp.offset(), 0);
        vp.scroll_by(500);
        assert_eq!(vp.offset(), 70);
    }

    #[test]
    fn short_document_never_scrolls() {
        let mut vp = viewport(20, 30);
        vp.scroll_by(5);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn jump_lands_on_anchor() {
        let mut vp = viewport(200, 40);
        vp.set_anchor(SectionId::Projects, 90);
        vp.jump_to(SectionId::Projects);
        assert_eq!(vp.offset(), 90);

        // An anchor past the scrollable extent clamps to the end
        vp.set_anchor(SectionId::Contact, 190);
        vp.jump_to(SectionId::Contact);
        assert_eq!(vp.offset(), 160);
    }

    #[test]
    fn visibility_feeds_reveals_once() {
        let mut vp = viewport(200, 40);
        vp.track("experience-0", 60, 8, 0.5);
        let mut reveals = ScrollReveals::new();

        // Element entirely below the view
        assert_eq!(vp.observe_all(&mut reveals), 0);

        // Half in view fires the 0.5 threshold
        vp.scroll_to(24); // view 24..64, element 60..68 -> 4/8 visible
        assert_eq!(vp.observe_all(&mut reveals), 1);
        assert!(reveals.has_fired("experience-0"));

        // Scrolling away and back never re-fires
        vp.scroll_to(0);
        vp.scroll_to(60);
        assert_eq!(vp.observe_all(&mut reveals), 0);
    }

    #[test]
    fn high_threshold_needs_most_of_the_element() {
        let mut vp = viewport(200, 40);
        vp.track("project-0", 50, 10, 0.85);
        let mut reveals = ScrollReveals::new();

        vp.scroll_to(18); // view 18..58, element 50..60 -> 8/10 visible
        assert_eq!(vp.observe_all(&mut reveals), 0);
        vp.scroll_to(25); // fully visible
        assert_eq!(vp.observe_all(&mut reveals), 1);
    }

    #[test]
    fn active_section_follows_the_scroll() {
        let mut vp = viewport(200, 40);
        vp.set_anchor(SectionId::Hero, 0);
        vp.set_anchor(SectionId::Experience, 40);
        vp.set_anchor(SectionId::Projects, 100);
        vp.set_anchor(SectionId::Contact, 160);

        assert_eq!(vp.active_section(), SectionId::Hero);
        vp.scroll_to(30); // midline 50, past the experience anchor
        assert_eq!(vp.active_section(), SectionId::Experience);
        vp.scroll_to(160);
        assert_eq!(vp.active_section(), SectionId::Contact);
    }

    #[test]
    fn element_taller_than_the_view_still_fires() {
        // A 12-row card in a 10-row view fills the screen at best; the
        // 0.85 threshold must still be reachable
        let mut vp = viewport(60, 10);
        vp.track("project-0", 20, 12, 0.85);
        let mut reveals = ScrollReveals::new();

        let mut fired = 0;
        for offset in 0..=vp.max_offset() {
            vp.scroll_to(offset);
            fired += vp.observe_all(&mut reveals);
        }
        assert_eq!(fired, 1);
        assert!(reveals.has_fired("project-0"));
    }

    #[test]
    fn relayout_clamps_offset() {
        let mut vp = viewport(200, 40);
        vp.scroll_to(160);
        vp.begin_layout(100, 40);
        assert_eq!(vp.offset(), 60);
    }
}
