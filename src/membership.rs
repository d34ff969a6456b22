//! Trapezoidal membership functions.
//!
//! Every fuzzy set in the system is a four-breakpoint trapezoid: ramp up,
//! plateau at 1, ramp down. Evaluation is pure arithmetic with no state and
//! no failure modes; degenerate zero-width ramps are valid shapes used at
//! universe edges.

use serde::{Deserialize, Serialize};

/// A trapezoidal membership function over ordered breakpoints
/// `a <= b <= c <= d`: zero below `a`, linear ramp on `(a, b)`, plateau at 1
/// on `[b, c]`, linear ramp on `(c, d)`, zero above `d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Trapezoid {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Membership degree of `x`, always in [0, 1]. `x` may lie anywhere,
    /// including outside `[a, d]`.
    ///
    /// The plateau test runs first so that a zero-width ramp (`a == b` or
    /// `c == d`) yields 1 at the shared breakpoint instead of dividing by
    /// zero. The ramp branches are only reachable when the ramp has nonzero
    /// width.
    pub fn degree(&self, x: f64) -> f64 {
        if x >= self.b && x <= self.c {
            1.0
        } else if x <= self.a || x >= self.d {
            0.0
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.d - x) / (self.d - self.c)
        }
    }

    /// Membership degree clipped at `height`: the Mamdani implication used
    /// when projecting an aggregate rule strength onto the output universe.
    pub fn clipped_degree(&self, x: f64, height: f64) -> f64 {
        self.degree(x).min(height)
    }
}
