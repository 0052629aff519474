//! Animation drive for the easing sample.
//!
//! The sample moves a rectangle between two offsets. Each invocation builds
//! an [`AnimationRun`] from the current offset and toggles toward the other
//! extreme, so repeated runs alternate `0 -> 200 -> 0`. Runs hold no state
//! beyond their own fields; the caller feeds the finished run's `to` back in
//! as the next `current_offset`.

use crate::core::easing::EasingCurve;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The far extreme of the toggle (the near one is 0).
pub const TOGGLE_EXTENT: f64 = 200.0;

/// Duration used by the gallery's easing page.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// One interpolation from `from` to `to` along `curve`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRun {
    pub curve: EasingCurve,
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

/// A sampled point of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Time since the run started
    pub at: Duration,
    pub value: f64,
}

impl AnimationRun {
    pub const fn new(curve: EasingCurve, from: f64, to: f64, duration: Duration) -> Self {
        Self {
            curve,
            from,
            to,
            duration,
        }
    }

    /// Builds the next run of the toggle.
    ///
    /// A positive offset animates back to 0; anything else (0, negative)
    /// animates out to [`TOGGLE_EXTENT`].
    pub fn toggle(curve: EasingCurve, current_offset: f64, duration: Duration) -> Self {
        let to = if current_offset > 0.0 {
            0.0
        } else {
            TOGGLE_EXTENT
        };
        Self::new(curve, current_offset, to, duration)
    }

    /// Normalized time for `elapsed`, clamped to `[0, 1]`.
    ///
    /// A zero-length run is complete immediately.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Interpolated value after `elapsed`.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let eased = self.curve.evaluate(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Samples `count + 1` evenly spaced frames, both endpoints included.
    ///
    /// `count == 0` yields the final frame only.
    pub fn frames(&self, count: u32) -> Vec<Frame> {
        if count == 0 {
            return vec![Frame {
                at: self.duration,
                value: self.to,
            }];
        }

        (0..=count)
            .map(|i| {
                let at = self.duration.mul_f64(f64::from(i) / f64::from(count));
                Frame {
                    at,
                    // Pin the last frame so it lands on `to` despite rounding in `at`
                    value: if i == count {
                        self.to
                    } else {
                        self.value_at(at)
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::easing::{Direction, EasingFamily};

    fn cubic_out() -> EasingCurve {
        EasingCurve::new(EasingFamily::Cubic, Direction::Out)
    }

    #[test]
    fn test_toggle_from_rest_goes_out() {
        let run = AnimationRun::toggle(cubic_out(), 0.0, DEFAULT_DURATION);
        assert_eq!(run.from, 0.0);
        assert_eq!(run.to, TOGGLE_EXTENT);
    }

    #[test]
    fn test_toggle_from_extent_comes_back() {
        let run = AnimationRun::toggle(cubic_out(), 200.0, DEFAULT_DURATION);
        assert_eq!(run.from, 200.0);
        assert_eq!(run.to, 0.0);
    }

    #[test]
    fn test_toggle_mid_flight_uses_current_offset() {
        // Interrupted run: positive offsets always head back to 0
        let run = AnimationRun::toggle(cubic_out(), 73.5, DEFAULT_DURATION);
        assert_eq!(run.from, 73.5);
        assert_eq!(run.to, 0.0);

        let run = AnimationRun::toggle(cubic_out(), -10.0, DEFAULT_DURATION);
        assert_eq!(run.to, TOGGLE_EXTENT);
    }

    #[test]
    fn test_repeated_runs_alternate() {
        let mut offset = 0.0;
        let mut targets = Vec::new();
        for _ in 0..4 {
            let run = AnimationRun::toggle(cubic_out(), offset, DEFAULT_DURATION);
            offset = run.value_at(run.duration);
            targets.push(offset);
        }
        assert_eq!(targets, vec![200.0, 0.0, 200.0, 0.0]);
    }

    #[test]
    fn test_value_at_endpoints() {
        let run = AnimationRun::new(cubic_out(), 200.0, 0.0, Duration::from_secs(2));
        assert_eq!(run.value_at(Duration::ZERO), 200.0);
        assert_eq!(run.value_at(Duration::from_secs(2)), 0.0);
        assert_eq!(run.value_at(Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn test_value_at_follows_curve() {
        let run = AnimationRun::new(cubic_out(), 0.0, 200.0, Duration::from_secs(1));
        let half = run.value_at(Duration::from_millis(500));
        // Cubic out at t=0.5 is 1 - 0.125
        assert!((half - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let run = AnimationRun::new(cubic_out(), 0.0, 200.0, Duration::ZERO);
        assert_eq!(run.value_at(Duration::ZERO), 200.0);
        assert!(run.is_finished(Duration::ZERO));
    }

    #[test]
    fn test_is_finished() {
        let run = AnimationRun::toggle(cubic_out(), 0.0, DEFAULT_DURATION);
        assert!(!run.is_finished(Duration::from_millis(499)));
        assert!(run.is_finished(Duration::from_millis(500)));
    }

    #[test]
    fn test_frames_cover_run() {
        let run = AnimationRun::toggle(cubic_out(), 0.0, DEFAULT_DURATION);
        let frames = run.frames(10);
        assert_eq!(frames.len(), 11);
        assert_eq!(frames[0].at, Duration::ZERO);
        assert_eq!(frames[0].value, 0.0);
        assert_eq!(frames[10].at, DEFAULT_DURATION);
        assert_eq!(frames[10].value, TOGGLE_EXTENT);
        assert!(frames.windows(2).all(|w| w[0].at < w[1].at));
    }

    #[test]
    fn test_zero_frames_is_final_state() {
        let run = AnimationRun::toggle(cubic_out(), 200.0, DEFAULT_DURATION);
        assert_eq!(
            run.frames(0),
            vec![Frame {
                at: DEFAULT_DURATION,
                value: 0.0
            }]
        );
    }
}
