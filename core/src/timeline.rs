//! Timeline Engine
//!
//! A declarative, surface-agnostic description of an ordered entrance
//! animation: a list of steps, each naming a target, an effect (fade,
//! slide, per-character cascade, typewriter text), a duration, an easing
//! curve and a position offset relative to the previous step. Offsets may
//! overlap the previous step's tail or insert a gap, matching the original
//! timeline's `-=0.3` / `+=1.5` position parameters.
//!
//! Start times are resolved once when the timeline is built; playback is a
//! single monotonically growing clock advanced by `tick`. Renderers query
//! the state of the targets they know about each frame; querying a target
//! the timeline does not know yields `None` and the caller skips that
//! visual - a missing animation target is never an error.
//!
//! `cancel()` releases every step. After cancellation all queries report
//! nothing, so no stage can fire against a torn-down view.

use std::time::Duration;

use crate::easing::EasingFunction;

/// What a step does to its target.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Opacity 0 -> 1 over the step duration
    FadeIn,
    /// Fade in while translating from an offset to rest
    SlideIn { dx: i16, dy: i16 },
    /// Characters animate in one by one with a staggered start.
    ///
    /// The step's total duration is `char_duration + stagger * (chars - 1)`;
    /// use [`TimelineStep::char_cascade`] to get that arithmetic for free.
    CharCascade {
        stagger: Duration,
        char_duration: Duration,
        char_count: usize,
    },
    /// Text types out character by character (simulated terminal input)
    TypeText { text: String },
    /// Target snaps visible at the end of a short step
    Reveal,
    /// Target becomes eligible for rendering immediately (zero duration)
    Show,
}

/// Position of a step relative to the end of the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Offset {
    /// Start when the previous step ends
    #[default]
    AfterPrevious,
    /// Start before the previous step ends, overlapping its tail
    Overlap(Duration),
    /// Start after an extra pause past the previous step's end
    Gap(Duration),
}

/// One step of a timeline.
#[derive(Clone, Debug)]
pub struct TimelineStep {
    pub target: String,
    pub effect: Effect,
    pub duration: Duration,
    pub easing: EasingFunction,
    pub offset: Offset,
}

impl TimelineStep {
    pub fn new(target: impl Into<String>, effect: Effect, duration: Duration) -> Self {
        Self {
            target: target.into(),
            effect,
            duration,
            easing: EasingFunction::default(),
            offset: Offset::default(),
        }
    }

    /// A zero-duration visibility flip.
    pub fn show(target: impl Into<String>) -> Self {
        Self::new(target, Effect::Show, Duration::ZERO)
    }

    /// A per-character cascade; total duration derived from the char count.
    pub fn char_cascade(
        target: impl Into<String>,
        char_count: usize,
        stagger: Duration,
        char_duration: Duration,
    ) -> Self {
        let total = char_duration + stagger * char_count.saturating_sub(1) as u32;
        Self::new(
            target,
            Effect::CharCascade {
                stagger,
                char_duration,
                char_count,
            },
            total,
        )
    }

    /// A typewriter step over the given text.
    pub fn type_text(target: impl Into<String>, text: impl Into<String>, duration: Duration) -> Self {
        Self::new(target, Effect::TypeText { text: text.into() }, duration)
    }

    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Start this step before the previous one finishes.
    #[must_use]
    pub fn overlapping(mut self, by: Duration) -> Self {
        self.offset = Offset::Overlap(by);
        self
    }

    /// Insert a pause before this step.
    #[must_use]
    pub fn after_gap(mut self, gap: Duration) -> Self {
        self.offset = Offset::Gap(gap);
        self
    }
}

/// Queried state of a single target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageState {
    /// Whether the step's start time has been reached
    pub started: bool,
    /// Whether the step has fully played out
    pub finished: bool,
    /// Eased progress, 0.0 before start, 1.0 at/after finish.
    ///
    /// For `CharCascade` this is the raw step progress; per-character
    /// easing comes from [`Timeline::char_progress`].
    pub progress: f32,
}

impl StageState {
    const HIDDEN: Self = Self {
        started: false,
        finished: false,
        progress: 0.0,
    };
}

#[derive(Clone, Debug)]
struct Scheduled {
    start: Duration,
    step: TimelineStep,
}

/// An ordered entrance animation with a single playback clock.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    steps: Vec<Scheduled>,
    elapsed: Duration,
    cancelled: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step, resolving its absolute start from its offset.
    #[must_use]
    pub fn step(mut self, step: TimelineStep) -> Self {
        let prev_end = self
            .steps
            .last()
            .map(|s| s.start + s.step.duration)
            .unwrap_or(Duration::ZERO);
        let start = match step.offset {
            Offset::AfterPrevious => prev_end,
            Offset::Overlap(by) => prev_end.saturating_sub(by),
            Offset::Gap(gap) => prev_end + gap,
        };
        self.steps.push(Scheduled { start, step });
        self
    }

    /// Advance the playback clock.
    pub fn tick(&mut self, delta: Duration) {
        if !self.cancelled {
            self.elapsed += delta;
        }
    }

    /// Total scheduled duration (end of the last-finishing step).
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| s.start + s.step.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.elapsed >= self.duration()
    }

    /// Release every step. Queries afterwards report nothing; the clock
    /// stops. Used when the hosting region is torn down mid-sequence.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            tracing::debug!("timeline cancelled with {} steps in flight", self.steps.len());
        }
        self.steps.clear();
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn find(&self, target: &str) -> Option<&Scheduled> {
        self.steps.iter().find(|s| s.step.target == target)
    }

    /// A target may carry several steps (a `Show` flip plus its animation);
    /// effect-specific queries must not stop at the first name match.
    fn find_where(
        &self,
        target: &str,
        pred: impl Fn(&Effect) -> bool,
    ) -> Option<&Scheduled> {
        self.steps
            .iter()
            .find(|s| s.step.target == target && pred(&s.step.effect))
    }

    fn raw_progress(&self, scheduled: &Scheduled) -> f32 {
        if self.elapsed < scheduled.start {
            return 0.0;
        }
        if scheduled.step.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed - scheduled.start).as_secs_f32() / scheduled.step.duration.as_secs_f32()
    }

    /// State of the named target, or `None` if the timeline has no step for
    /// it (or has been cancelled) - the caller skips that visual silently.
    pub fn stage(&self, target: &str) -> Option<StageState> {
        let scheduled = self.find(target)?;
        if self.elapsed < scheduled.start {
            return Some(StageState::HIDDEN);
        }
        let raw = self.raw_progress(scheduled).min(1.0);
        Some(StageState {
            started: true,
            finished: self.elapsed >= scheduled.start + scheduled.step.duration,
            progress: scheduled.step.easing.apply(raw),
        })
    }

    /// The visible prefix of a `TypeText` target, advancing linearly in
    /// character count.
    pub fn typed_prefix(&self, target: &str) -> Option<String> {
        let scheduled = self.find_where(target, |e| matches!(e, Effect::TypeText { .. }))?;
        let Effect::TypeText { text } = &scheduled.step.effect else {
            return None;
        };
        let chars = text.chars().count();
        let visible = (self.raw_progress(scheduled).clamp(0.0, 1.0) * chars as f32) as usize;
        Some(text.chars().take(visible.min(chars)).collect())
    }

    /// Eased progress of character `index` within a `CharCascade` target.
    /// 0.0 before the character's staggered start, 1.0 once settled.
    pub fn char_progress(&self, target: &str, index: usize) -> f32 {
        let Some(scheduled) = self.find_where(target, |e| matches!(e, Effect::CharCascade { .. }))
        else {
            return 0.0;
        };
        let Effect::CharCascade {
            stagger,
            char_duration,
            ..
        } = scheduled.step.effect
        else {
            return 0.0;
        };
        let char_start = scheduled.start + stagger * index as u32;
        if self.elapsed < char_start {
            return 0.0;
        }
        if char_duration.is_zero() {
            return 1.0;
        }
        let raw = (self.elapsed - char_start).as_secs_f32() / char_duration.as_secs_f32();
        scheduled.step.easing.apply(raw.min(1.0))
    }
}
