//! Reveal Animators
//!
//! Two kinds of one-time entrance animation:
//!
//! - [`HeroReveal`]: the ordered hero sequence (container fade, title and
//!   subtitle character cascades, terminal typewriter block, call-to-action
//!   fade), built at most once per session and only after the loading
//!   sequencer's completion edge.
//! - [`ScrollReveals`]: independent per-element entrance animations fired
//!   the first time an element becomes sufficiently visible in the
//!   viewport. An element that has fired never rearms, no matter how it is
//!   scrolled afterwards.

use std::collections::HashMap;
use std::time::Duration;

use crate::content::ContentStore;
use crate::easing::EasingFunction;
use crate::timeline::{Effect, Timeline, TimelineStep};

/// Target names the hero section renderer and the hero timeline agree on.
pub mod targets {
    pub const HERO: &str = "hero";
    pub const TITLE: &str = "title";
    pub const SUBTITLE: &str = "subtitle";
    pub const TERMINAL: &str = "terminal";
    pub const COMMAND_1: &str = "command-1";
    pub const RESPONSE_1: &str = "response-1";
    pub const COMMAND_2: &str = "command-2";
    pub const RESPONSE_2: &str = "response-2";
    pub const COMMAND_3: &str = "command-3";
    pub const RESPONSE_3: &str = "response-3";
    pub const BUTTONS: &str = "buttons";
}

/// Title text for a given content store, shared by the timeline builder
/// (for the character count) and the hero renderer.
pub fn hero_title(content: &ContentStore) -> String {
    format!("Hey, I'm {}", content.personal().name)
}

/// Build the hero entrance timeline for the given content.
///
/// Stage order and the shipped timing constants follow the reference
/// sequence; callers that want different pacing can assemble their own
/// [`Timeline`] from the same step primitives.
pub fn hero_timeline(content: &ContentStore) -> Timeline {
    let stagger = Duration::from_millis(20);
    let title_chars = hero_title(content).chars().count();
    let subtitle_chars = content.personal().title.chars().count();

    Timeline::new()
        // Container fades in first
        .step(
            TimelineStep::new(targets::HERO, Effect::FadeIn, Duration::from_millis(500))
                .with_easing(EasingFunction::EaseOut),
        )
        // Title/subtitle/terminal become eligible before their animations
        .step(TimelineStep::show(targets::TITLE))
        .step(TimelineStep::show(targets::SUBTITLE))
        .step(TimelineStep::show(targets::TERMINAL))
        // Per-character cascades, subtitle overlapping the title's tail
        .step(
            TimelineStep::char_cascade(
                targets::TITLE,
                title_chars,
                stagger,
                Duration::from_millis(800),
            )
            .with_easing(EasingFunction::EaseOutBack),
        )
        .step(
            TimelineStep::char_cascade(
                targets::SUBTITLE,
                subtitle_chars,
                stagger,
                Duration::from_millis(400),
            )
            .with_easing(EasingFunction::EaseOutQuad)
            .overlapping(Duration::from_millis(300)),
        )
        // Terminal block: three commands type out, each revealing its
        // response; fixed pauses simulate think-time before 2 and 3
        .step(TimelineStep::type_text(
            targets::COMMAND_1,
            "profile --summary",
            Duration::from_secs(1),
        ))
        .step(TimelineStep::new(
            targets::RESPONSE_1,
            Effect::Reveal,
            Duration::from_millis(100),
        ))
        .step(
            TimelineStep::type_text(
                targets::COMMAND_2,
                "profile --skills",
                Duration::from_secs(1),
            )
            .after_gap(Duration::from_millis(1500)),
        )
        .step(TimelineStep::new(
            targets::RESPONSE_2,
            Effect::Reveal,
            Duration::from_millis(100),
        ))
        .step(
            TimelineStep::type_text(
                targets::COMMAND_3,
                "profile --focus",
                Duration::from_secs(1),
            )
            .after_gap(Duration::from_secs(2)),
        )
        .step(TimelineStep::new(
            targets::RESPONSE_3,
            Effect::Reveal,
            Duration::from_millis(100),
        ))
        // Call-to-action controls last
        .step(
            TimelineStep::new(targets::BUTTONS, Effect::FadeIn, Duration::from_millis(500))
                .with_easing(EasingFunction::EaseOut),
        )
}

/// The hero entrance sequence, gated on loading completion.
///
/// `begin` builds the timeline at most once for the whole session; further
/// calls (re-renders, spurious edges) are no-ops. Dropping the value, or
/// calling [`HeroReveal::cancel`], releases the in-flight timeline.
#[derive(Clone, Debug, Default)]
pub struct HeroReveal {
    timeline: Option<Timeline>,
    begun: bool,
}

impl HeroReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence. Call only from the loading sequencer's
    /// edge-triggered completion.
    pub fn begin(&mut self, content: &ContentStore) {
        if self.begun {
            return;
        }
        self.begun = true;
        self.timeline = Some(hero_timeline(content));
        tracing::debug!("hero reveal started");
    }

    pub fn has_begun(&self) -> bool {
        self.begun
    }

    pub fn tick(&mut self, delta: Duration) {
        if let Some(timeline) = &mut self.timeline {
            timeline.tick(delta);
        }
    }

    /// The running timeline, if the sequence has begun and not been
    /// cancelled.
    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref().filter(|t| !t.is_cancelled())
    }

    pub fn is_finished(&self) -> bool {
        self.timeline.as_ref().is_some_and(|t| t.is_finished())
    }

    /// Release the in-flight timeline (hero region torn down mid-sequence).
    /// The sequence still counts as begun: it will not restart.
    pub fn cancel(&mut self) {
        if let Some(timeline) = &mut self.timeline {
            timeline.cancel();
        }
    }
}

/// Per-element playback state for a fired scroll reveal.
#[derive(Clone, Debug)]
struct Playback {
    elapsed: Duration,
}

/// Scroll-triggered once-per-element entrance animations.
///
/// Elements are watched by id; the first time an element's visible
/// fraction meets its threshold, a fixed fade/translate playback starts.
/// The fired set is never cleared, so scrolling an element out of view and
/// back never replays its entrance.
#[derive(Clone, Debug)]
pub struct ScrollReveals {
    fired: HashMap<String, Playback>,
    duration: Duration,
    easing: EasingFunction,
}

impl Default for ScrollReveals {
    fn default() -> Self {
        // Reference entrance: 0.6s ease-out
        Self::with_duration(Duration::from_millis(600))
    }
}

impl ScrollReveals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            fired: HashMap::new(),
            duration,
            easing: EasingFunction::EaseOutCubic,
        }
    }

    /// Report an element's current visible fraction (0.0..=1.0). Returns
    /// `true` if this observation fired the element's reveal.
    pub fn observe(&mut self, id: &str, visible_fraction: f32, threshold: f32) -> bool {
        if visible_fraction < threshold || self.fired.contains_key(id) {
            return false;
        }
        tracing::debug!(id, "scroll reveal fired");
        self.fired.insert(
            id.to_string(),
            Playback {
                elapsed: Duration::ZERO,
            },
        );
        true
    }

    /// Advance all in-flight playbacks.
    pub fn tick(&mut self, delta: Duration) {
        for playback in self.fired.values_mut() {
            if playback.elapsed < self.duration {
                playback.elapsed += delta;
            }
        }
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.fired.contains_key(id)
    }

    /// Eased entrance progress for an element: 0.0 if it never fired,
    /// 1.0 once its playback has finished.
    pub fn progress(&self, id: &str) -> f32 {
        let Some(playback) = self.fired.get(id) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let raw = (playback.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.easing.apply(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn content() -> ContentStore {
        ContentStore::from_json(
            r#"{
                "personal": { "name": "Ada", "title": "Engineer" },
                "skills": {},
                "experience": [],
                "projects": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn hero_sequence_orders_stages() {
        let store = content();
        let mut reveal = HeroReveal::new();
        reveal.begin(&store);
        let tl = reveal.timeline().unwrap();

        // Container first, buttons last
        assert!(!tl.stage(targets::TITLE).unwrap().started);
        assert!(!tl.stage(targets::BUTTONS).unwrap().started);

        reveal.tick(ms(500));
        let tl = reveal.timeline().unwrap();
        assert!(tl.stage(targets::HERO).unwrap().finished);
        assert!(tl.stage(targets::TITLE).unwrap().started);

        // Play everything out
        reveal.tick(Duration::from_secs(60));
        let tl = reveal.timeline().unwrap();
        assert!(tl.stage(targets::BUTTONS).unwrap().finished);
        assert_eq!(tl.typed_prefix(targets::COMMAND_3).unwrap(), "profile --focus");
        assert!(reveal.is_finished());
    }

    #[test]
    fn hero_begins_at_most_once() {
        let store = content();
        let mut reveal = HeroReveal::new();
        reveal.begin(&store);
        reveal.tick(Duration::from_secs(5));
        let before = reveal.timeline().unwrap().stage(targets::HERO).unwrap();

        // A second begin must not rebuild or rewind the timeline
        reveal.begin(&store);
        let after = reveal.timeline().unwrap().stage(targets::HERO).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn cancel_releases_but_does_not_rearm() {
        let store = content();
        let mut reveal = HeroReveal::new();
        reveal.begin(&store);
        reveal.tick(ms(300));
        reveal.cancel();
        assert!(reveal.timeline().is_none());
        assert!(reveal.has_begun());

        reveal.begin(&store);
        assert!(reveal.timeline().is_none());
    }

    #[test]
    fn scroll_reveal_fires_once() {
        let mut reveals = ScrollReveals::new();
        assert!(!reveals.observe("card-0", 0.3, 0.85));
        assert!(reveals.observe("card-0", 0.9, 0.85));
        // Scrolling out and back never rearms
        assert!(!reveals.observe("card-0", 0.0, 0.85));
        assert!(!reveals.observe("card-0", 1.0, 0.85));
        assert!(reveals.has_fired("card-0"));
    }

    #[test]
    fn scroll_reveal_progress_reaches_one() {
        let mut reveals = ScrollReveals::with_duration(ms(600));
        assert_eq!(reveals.progress("item"), 0.0);
        reveals.observe("item", 1.0, 0.5);
        reveals.tick(ms(300));
        let mid = reveals.progress("item");
        assert!(mid > 0.0 && mid < 1.0);
        reveals.tick(ms(600));
        assert!((reveals.progress("item") - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn elements_are_independent() {
        let mut reveals = ScrollReveals::new();
        reveals.observe("a", 1.0, 0.5);
        reveals.tick(ms(100));
        reveals.observe("b", 1.0, 0.5);
        assert!(reveals.progress("a") > reveals.progress("b"));
    }
}
