//! Animated open/closed transition of the details panel.
//!
//! The panel height eases between collapsed and expanded along a CSS-style
//! cubic Bézier curve. Progress is kept as a fraction so the target height
//! may change mid-animation (for example when the selection moves).

use std::time::Duration;

use crate::constants::{DETAILS_EASING, DETAILS_TRANSITION};

// ============================================================================
// CubicBezier
// ============================================================================

/// Timing function equivalent to CSS `cubic-bezier(x1, y1, x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    const EPSILON: f64 = 1e-6;
    const NEWTON_ITERATIONS: usize = 8;

    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t` in `[0, 1]`.
    #[must_use]
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_curve_x(t))
    }

    /// One coordinate of the curve at parameter `s`; endpoints are (0,0) and (1,1).
    fn sample(p1: f64, p2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn sample_derivative(p1: f64, p2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Finds the curve parameter whose x equals `x`.
    fn solve_curve_x(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, s) - x;
            if error.abs() < Self::EPSILON {
                return s;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, s);
            if slope.abs() < Self::EPSILON {
                break;
            }
            s -= error / slope;
        }

        // Newton did not converge; fall back to bisection.
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        while hi - lo > Self::EPSILON {
            let sampled = Self::sample(self.x1, self.x2, s);
            if (sampled - x).abs() < Self::EPSILON {
                break;
            }
            if sampled < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        let (x1, y1, x2, y2) = DETAILS_EASING;
        Self::new(x1, y1, x2, y2)
    }
}

// ============================================================================
// HeightTransition
// ============================================================================

/// Eased progress between collapsed (0.0) and expanded (1.0).
#[derive(Debug, Clone, PartialEq)]
pub struct HeightTransition {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
    curve: CubicBezier,
}

impl HeightTransition {
    /// A settled transition, already at its end state.
    #[must_use]
    pub fn settled(open: bool) -> Self {
        let end = if open { 1.0 } else { 0.0 };
        Self {
            from: end,
            to: end,
            elapsed: DETAILS_TRANSITION,
            duration: DETAILS_TRANSITION,
            curve: CubicBezier::default(),
        }
    }

    /// Starts animating toward open or closed from the current position.
    pub fn animate_to(&mut self, open: bool) {
        let target = if open { 1.0 } else { 0.0 };
        if (self.to - target).abs() < f64::EPSILON {
            return;
        }
        self.from = self.fraction();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    /// Advances the animation clock.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Current progress, 0.0 collapsed to 1.0 expanded.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.curve.ease(t)
    }

    /// Rows to draw for content that is `full` rows tall when expanded.
    #[must_use]
    pub fn height(&self, full: u16) -> u16 {
        let rows = (f64::from(full) * self.fraction()).round();
        (rows.max(0.0) as u16).min(full)
    }
}

// ============================================================================
// Tests
// ============================================================================
