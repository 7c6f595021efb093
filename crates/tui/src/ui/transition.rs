//! Time-based interpolation between two values.
//!
//! Transitions advance by explicit time deltas supplied by the runtime's tick,
//! which keeps them deterministic under test.

use std::time::Duration;

/// A scalar animating from one value toward a target with the CSS `ease` curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl Transition {
    /// A transition already resting at `value`.
    pub fn settled(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
        }
    }

    /// Starts moving toward `target` from wherever the value currently is.
    pub fn retarget(&mut self, target: f32) {
        if target == self.to {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.duration);
    }

    /// Jumps straight to the target.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    pub fn is_running(&self) -> bool {
        self.elapsed < self.duration && self.from != self.to
    }

    pub fn value(&self) -> f32 {
        if self.duration.is_zero() || !self.is_running() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease(progress)
    }
}

/// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
pub fn ease(progress: f32) -> f32 {
    cubic_bezier(0.25, 0.1, 0.25, 1.0, progress)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    // x(s) is monotonic on [0, 1] for valid easing curves, so bisect for s.
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    let mut s = t;
    for _ in 0..32 {
        let x = bezier(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    bezier(y1, y2, s)
}
