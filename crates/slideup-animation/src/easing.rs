use std::f32::consts::PI;

/// Time-to-progress curves applied to a linear fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Starts fast and slows down towards the end (`1 - (1 - t)^2`).
    #[default]
    Decelerate,
    /// Starts slow and speeds up (`t^2`).
    Accelerate,
    /// Cosine ease in and out.
    AccelerateDecelerate,
    /// Material standard curve.
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinearIn,
    /// Custom cubic bezier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Apply the easing function to a linear fraction.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => fraction,
            Easing::Decelerate => 1.0 - (1.0 - fraction) * (1.0 - fraction),
            Easing::Accelerate => fraction * fraction,
            Easing::AccelerateDecelerate => ((fraction + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// Easing through a unit cubic bezier with control points `(x1, y1)` and
/// `(x2, y2)`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 || fraction >= 1.0 {
        return fraction.clamp(0.0, 1.0);
    }
    let x = BezierAxis::new(x1, x2);
    let y = BezierAxis::new(y1, y2);
    y.at(x.solve(fraction))
}

const BEZIER_EPSILON: f32 = 1e-6;

/// One coordinate of a bezier from 0 to 1, in polynomial form `((a t + b) t + c) t`.
#[derive(Clone, Copy)]
struct BezierAxis {
    a: f32,
    b: f32,
    c: f32,
}

impl BezierAxis {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn at(self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }

    /// Parameter `t` at which this axis reaches `value`, for `value` in `[0, 1]`.
    fn solve(self, value: f32) -> f32 {
        let mut t = value;
        for _ in 0..8 {
            let error = self.at(t) - value;
            if error.abs() < BEZIER_EPSILON {
                return t;
            }
            let slope = self.slope(t);
            if slope.abs() < BEZIER_EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // Flat spots stall Newton steps; bisect instead.
        let (mut low, mut high) = (0.0f32, 1.0f32);
        for _ in 0..24 {
            let mid = 0.5 * (low + high);
            if self.at(mid) < value {
                low = mid;
            } else {
                high = mid;
            }
        }
        0.5 * (low + high)
    }
}

/// Duration and curve of a settle animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds. Zero settles synchronously.
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Spec that jumps straight to the target.
    pub fn immediate() -> Self {
        Self::tween(0, Easing::Linear)
    }

    pub fn is_immediate(&self) -> bool {
        self.duration_millis == 0
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::Decelerate)
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
