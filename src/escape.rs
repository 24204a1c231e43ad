//! Escape-time evaluation of `z <- z^2 + c` starting from `z = 0`.

use crate::complex::Complex;
use crate::config::{EscapeParams, ESCAPE_RADIUS_SQ, MAX_ITERATIONS};
use crate::error::Result;

/// Number of iterations the orbit of `c + d·i` completes before its squared
/// magnitude reaches 4, capped at 32.
///
/// The escape test is applied to the previous iterate before each step, so
/// the first step always runs. The result is always in `[0, 32]`. NaN and
/// infinite inputs are accepted and follow IEEE-754 propagation; a NaN
/// magnitude fails the escape test and ends the loop.
pub fn evaluate(c: f64, d: f64) -> u32 {
    let mut iterations = 0;
    let (mut a, mut b) = (0.0f64, 0.0f64);
    while a * a + b * b < ESCAPE_RADIUS_SQ && iterations < MAX_ITERATIONS {
        let a_new = a * a - b * b + c;
        b = 2.0 * a * b + d;
        a = a_new;
        iterations += 1;
    }
    iterations
}

/// How an evaluation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The orbit left the escape radius after this many iterations.
    Escaped(u32),
    /// The iteration cap was reached first.
    Capped,
}

impl Outcome {
    pub fn iterations(&self, max_iterations: u32) -> u32 {
        match *self {
            Outcome::Escaped(n) => n,
            Outcome::Capped => max_iterations,
        }
    }
}

/// Escape-time evaluator with configurable cap and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EscapeTime {
    params: EscapeParams,
}

impl EscapeTime {
    pub fn new(params: EscapeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EscapeParams {
        &self.params
    }

    pub fn max_iterations(&self) -> u32 {
        self.params.max_iterations
    }

    pub fn evaluate(&self, c: f64, d: f64) -> u32 {
        Complex::new(c, d)
            .escape_time(self.params.max_iterations, self.params.escape_radius_sq())
    }

    pub fn classify(&self, c: f64, d: f64) -> Outcome {
        let (iterations, z) = Complex::new(c, d)
            .last_iterate(self.params.max_iterations, self.params.escape_radius_sq());
        if z.norm() < self.params.escape_radius_sq() {
            Outcome::Capped
        } else {
            Outcome::Escaped(iterations)
        }
    }
}
