//! Easing Functions
//!
//! Maps linear animation progress to eased progress. The set covers what
//! the portfolio's timelines actually use: linear typewriter text, quad/
//! cubic settles for fades and slides, and the overshoot-then-settle curve
//! for the title character cascade.

/// Easing applied to a 0.0..=1.0 progress value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// No easing (constant speed)
    #[default]
    Linear,

    /// Slow start, fast end
    EaseIn,

    /// Fast start, slow end
    EaseOut,

    /// Slow start and end
    EaseInOut,

    /// Quadratic ease out
    EaseOutQuad,

    /// Cubic ease out
    EaseOutCubic,

    /// Overshoot then settle
    EaseOutBack,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseOutBack => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                let t_minus_1 = t - 1.0;
                1.0 + c3 * t_minus_1.powi(3) + c1 * t_minus_1.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        assert!((EasingFunction::Linear.apply(0.0)).abs() < f32::EPSILON);
        assert!((EasingFunction::Linear.apply(0.5) - 0.5).abs() < f32::EPSILON);
        assert!((EasingFunction::Linear.apply(1.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn all_easings_hit_boundaries() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::EaseOutQuad,
            EasingFunction::EaseOutCubic,
            EasingFunction::EaseOutBack,
        ] {
            assert!(
                easing.apply(0.0).abs() < 0.001,
                "{easing:?} at 0.0 = {}",
                easing.apply(0.0)
            );
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 0.001,
                "{easing:?} at 1.0 = {}",
                easing.apply(1.0)
            );
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert!((EasingFunction::EaseOutBack.apply(-2.0)).abs() < 0.001);
        assert!((EasingFunction::EaseOutBack.apply(2.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn ease_out_back_overshoots() {
        // The signature of the curve: it passes above 1.0 before settling
        let peak = (0..100)
            .map(|i| EasingFunction::EaseOutBack.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }
}
