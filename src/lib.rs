//! Escape-time iteration counts for points of the Mandelbrot set.
//!
//! [`evaluate`] is the fixed kernel: at most 32 iterations, escape radius 2.
//! [`EscapeTime`] runs the same loop with configurable [`EscapeParams`], and
//! [`Worker`] / [`evaluate_batch`] answer per-pixel [`PointRequest`]s.

pub mod batch;
pub mod complex;
pub mod config;
pub mod error;
pub mod escape;
pub mod message;
pub mod worker;

pub use batch::evaluate_batch;
pub use complex::Complex;
pub use config::{EscapeParams, ESCAPE_RADIUS, ESCAPE_RADIUS_SQ, MAX_ITERATIONS};
pub use error::{Error, Result};
pub use escape::{evaluate, EscapeTime, Outcome};
pub use message::{PointRequest, PointResult};
pub use worker::{handle_message, Worker};
