// src/animation/state.rs
//
// Per-node fill/unfill progress.
// Scale walks from the last committed extreme toward the other one in
// fixed steps, then snaps and commits once it overshoots.

use tracing::trace;

/// Progress added (times `dir`) on every advance.
pub const SCALE_STEP: f64 = 0.1;

/// Result of a single advance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Animating,
    Completed,
}

impl Progress {
    pub fn is_completed(self) -> bool {
        self == Progress::Completed
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    scale: f64,
    dir: i8,
    prev_scale: f64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step the scale by `dir * SCALE_STEP`.
    /// Once it has moved more than a full unit away from the baseline it is
    /// clamped to `prev_scale + dir` and committed as the new baseline.
    pub fn advance(&mut self) -> Progress {
        self.scale += f64::from(self.dir) * SCALE_STEP;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + f64::from(self.dir);
            self.dir = 0;
            self.prev_scale = self.scale;
            trace!(scale = self.scale, "animation committed");
            return Progress::Completed;
        }
        Progress::Animating
    }

    /// Start animating away from the committed extreme.
    /// Returns false (and does nothing) while an animation is in flight.
    pub fn begin_if_idle(&mut self) -> bool {
        if self.dir != 0 {
            return false;
        }
        // prev_scale is always a committed extreme: 0 -> +1, 1 -> -1
        self.dir = (1.0 - 2.0 * self.prev_scale).round() as i8;
        true
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn dir(&self) -> i8 {
        self.dir
    }

    pub fn prev_scale(&self) -> f64 {
        self.prev_scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0
    }

    /// Rung length factor: stays at 0 for the first half of the rails,
    /// then grows to 1 as the rails complete.
    pub fn rung_scale(&self) -> f64 {
        (self.scale - 0.5).clamp(0.0, 0.5) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fresh_state_is_idle() {
        let state = AnimationState::new();
        assert_eq!(state.scale(), 0.0);
        assert_eq!(state.dir(), 0);
        assert_eq!(state.prev_scale(), 0.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_begin_sign_rule() {
        let mut state = AnimationState::new();
        assert!(state.begin_if_idle());
        assert_eq!(state.dir(), 1);
        // second trigger while running is ignored
        assert!(!state.begin_if_idle());
        assert_eq!(state.dir(), 1);

        let mut filled = AnimationState {
            scale: 1.0,
            dir: 0,
            prev_scale: 1.0,
        };
        assert!(filled.begin_if_idle());
        assert_eq!(filled.dir(), -1);
    }

    #[test]
    fn test_fill_commits_after_overshoot() {
        let mut state = AnimationState::new();
        state.begin_if_idle();

        for _ in 0..10 {
            assert_eq!(state.advance(), Progress::Animating);
        }
        assert!((state.scale() - 1.0).abs() < EPS);
        assert_eq!(state.dir(), 1);

        assert_eq!(state.advance(), Progress::Completed);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.prev_scale(), 1.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_unfill_returns_to_zero() {
        let mut state = AnimationState::new();
        state.begin_if_idle();
        while state.advance() == Progress::Animating {}

        assert!(state.begin_if_idle());
        assert_eq!(state.dir(), -1);
        let mut steps = 1;
        while state.advance() == Progress::Animating {
            steps += 1;
        }
        assert_eq!(steps, 11);
        assert_eq!(state.scale(), 0.0);
        assert_eq!(state.prev_scale(), 0.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_idle_advance_is_stationary() {
        let mut state = AnimationState::new();
        assert_eq!(state.advance(), Progress::Animating);
        assert_eq!(state.scale(), 0.0);
    }

    #[test]
    fn test_rung_scale() {
        let mut state = AnimationState::new();
        assert_eq!(state.rung_scale(), 0.0);
        state.scale = 0.4;
        assert_eq!(state.rung_scale(), 0.0);
        state.scale = 0.75;
        assert!((state.rung_scale() - 0.5).abs() < EPS);
        state.scale = 1.1;
        assert_eq!(state.rung_scale(), 1.0);
    }
}
