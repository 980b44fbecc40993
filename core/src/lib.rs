//! folio-core - Headless portfolio content and animation state
//!
//! This crate holds everything about the portfolio that is independent of a
//! rendering surface:
//!
//! - **Content store**: the immutable portfolio document (personal info,
//!   skills, experience, projects, theme tokens), loaded once at startup.
//! - **Loading sequencer**: the state machine that plays the boot-style
//!   status lines before the hero content is revealed.
//! - **Timeline engine**: declarative ordered animation steps (fades,
//!   character cascades, typewriter text) with easing, resolved to absolute
//!   start times and driven by explicit `tick` calls.
//! - **Reveal animators**: the once-per-session hero entrance sequence and
//!   the once-per-element scroll-triggered reveals.
//!
//! Nothing here touches a terminal, a clock or an async runtime. All
//! sequencing is advanced by the caller passing elapsed `Duration`s, which
//! keeps every state machine deterministic and testable.

pub mod content;
pub mod easing;
pub mod loading;
pub mod reveal;
pub mod timeline;

pub use content::{ContentError, ContentStore, ExperienceEntry, Personal, Project, Skills, Theme};
pub use easing::EasingFunction;
pub use loading::{LoadingPhase, LoadingSequencer, LoadingStep};
pub use reveal::{hero_timeline, hero_title, targets, HeroReveal, ScrollReveals};
pub use timeline::{Effect, Offset, StageState, Timeline, TimelineStep};
