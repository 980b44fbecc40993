//! Loading Sequencer
//!
//! Plays a fixed script of boot-style status lines before the hero content
//! is revealed. Modeled as an explicit state machine rather than chained
//! timers so that cancellation (drop the value) and testing (tick with
//! synthetic deltas) are trivial.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --start()--> Showing(0) --...--> Showing(N-1) --> Draining --> Complete
//! ```
//!
//! Each `Showing(i)` lasts its step's configured duration; `Draining` is a
//! fixed grace delay with every line visible. `Complete` is terminal and the
//! machine never resets within a session. Overflow time from one phase
//! carries into the next, i.e. transitions are scheduled relative to the
//! previous firing, not wall-clock corrected.

use std::time::Duration;

/// One status line and how long it stays the newest line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingStep {
    pub text: String,
    pub duration: Duration,
}

impl LoadingStep {
    pub fn new(text: impl Into<String>, millis: u64) -> Self {
        Self {
            text: text.into(),
            duration: Duration::from_millis(millis),
        }
    }
}

/// Phase of the loading sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Created but not started; no line is visible yet
    Idle,
    /// Step `i` is the newest visible line
    Showing(usize),
    /// All lines visible, grace delay before completion
    Draining,
    /// Terminal; fires the completion edge exactly once
    Complete,
}

/// Timer-driven state machine for the loading screen.
#[derive(Clone, Debug)]
pub struct LoadingSequencer {
    steps: Vec<LoadingStep>,
    drain: Duration,
    phase: LoadingPhase,
    /// Time spent in the current phase
    elapsed: Duration,
    completion_taken: bool,
}

impl LoadingSequencer {
    pub fn new(steps: Vec<LoadingStep>, drain: Duration) -> Self {
        Self {
            steps,
            drain,
            phase: LoadingPhase::Idle,
            elapsed: Duration::ZERO,
            completion_taken: false,
        }
    }

    /// The reference boot script.
    pub fn standard() -> Self {
        Self::new(
            vec![
                LoadingStep::new("Initializing system...", 500),
                LoadingStep::new("Loading dependencies...", 800),
                LoadingStep::new("Compiling components...", 600),
                LoadingStep::new("Optimizing render pipeline...", 700),
                LoadingStep::new("Starting application...", 400),
            ],
            Duration::from_millis(500),
        )
    }

    /// Begin the sequence. A no-op unless the machine is still `Idle`, so
    /// re-renders cannot restart a running or finished sequence.
    pub fn start(&mut self) {
        if self.phase == LoadingPhase::Idle {
            self.phase = if self.steps.is_empty() {
                LoadingPhase::Draining
            } else {
                LoadingPhase::Showing(0)
            };
            self.elapsed = Duration::ZERO;
            tracing::debug!("loading sequence started");
        }
    }

    /// Advance the sequence by `delta`. Returns `true` if the phase changed.
    ///
    /// A large delta can cross several phases in one call; the remainder is
    /// carried forward each time.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if matches!(self.phase, LoadingPhase::Idle | LoadingPhase::Complete) {
            return false;
        }

        self.elapsed += delta;
        let mut changed = false;

        loop {
            let budget = match self.phase {
                LoadingPhase::Showing(i) => self.steps[i].duration,
                LoadingPhase::Draining => self.drain,
                LoadingPhase::Idle | LoadingPhase::Complete => break,
            };

            if self.elapsed < budget {
                break;
            }
            self.elapsed -= budget;

            self.phase = match self.phase {
                LoadingPhase::Showing(i) if i + 1 < self.steps.len() => {
                    LoadingPhase::Showing(i + 1)
                }
                LoadingPhase::Showing(_) => LoadingPhase::Draining,
                LoadingPhase::Draining => LoadingPhase::Complete,
                phase => phase,
            };
            changed = true;

            if self.phase == LoadingPhase::Complete {
                tracing::debug!("loading sequence complete");
                break;
            }
        }

        changed
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// Index of the newest visible step, or `None` before the first one.
    /// Monotonically increasing.
    pub fn current_step(&self) -> Option<usize> {
        match self.phase {
            LoadingPhase::Idle => None,
            LoadingPhase::Showing(i) => Some(i),
            LoadingPhase::Draining | LoadingPhase::Complete => {
                self.steps.len().checked_sub(1)
            }
        }
    }

    /// Status lines shown so far. Lines accumulate: step `i` being current
    /// means steps `0..=i` are on screen.
    pub fn visible_lines(&self) -> &[LoadingStep] {
        match self.current_step() {
            None => &[],
            Some(i) => &self.steps[..=i],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == LoadingPhase::Complete
    }

    /// Edge-triggered completion event: `true` exactly once per session,
    /// on or after the transition into `Complete`. This is the gate the
    /// hero reveal consumes.
    pub fn take_completion(&mut self) -> bool {
        if self.is_complete() && !self.completion_taken {
            self.completion_taken = true;
            true
        } else {
            false
        }
    }
}
