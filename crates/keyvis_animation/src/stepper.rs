//! Fixed-increment phase stepper
//!
//! Drives a progress value from 0 to 1 in constant per-tick increments,
//! one tick per [`TICK_MS`] of real time. The final tick clamps progress
//! to exactly 1.0 so downstream interpolation never sees an overshoot,
//! and completion is reported exactly once; further steps are no-ops.

use crate::easing::Easing;

/// Milliseconds of real time per animation tick.
pub const TICK_MS: f32 = 16.0;

/// A single phase's progress counter.
#[derive(Clone, Debug)]
pub struct Stepper {
    increment: f32,
    easing: Easing,
    progress: f32,
    finished: bool,
}

impl Stepper {
    pub fn new(increment: f32, easing: Easing) -> Self {
        Self {
            increment,
            easing,
            progress: 0.0,
            finished: false,
        }
    }

    /// Advance one tick. Returns `true` on the tick that first reaches 1.0.
    pub fn step(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.progress += self.increment;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.finished = true;
            return true;
        }
        false
    }

    /// Raw progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current progress through this stepper's easing function.
    pub fn eased(&self) -> f32 {
        self.easing.apply(self.progress)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_final_tick_to_one() {
        // 0.3 per tick overshoots on the fourth tick
        let mut s = Stepper::new(0.3, Easing::Linear);
        for _ in 0..3 {
            assert!(!s.step());
        }
        assert!(s.step());
        assert_eq!(s.progress(), 1.0);
        assert_eq!(s.eased(), 1.0);
    }

    #[test]
    fn completion_fires_once() {
        let mut s = Stepper::new(0.5, Easing::EaseOutQuad);
        assert!(!s.step());
        assert!(s.step());
        assert!(s.is_finished());
        // already finished: no further ticks fire
        assert!(!s.step());
        assert_eq!(s.progress(), 1.0);
    }

    #[test]
    fn progress_is_monotone() {
        let mut s = Stepper::new(0.045, Easing::EaseOutQuad);
        let mut prev = 0.0;
        while !s.is_finished() {
            s.step();
            assert!(s.progress() >= prev);
            prev = s.progress();
        }
    }
}
