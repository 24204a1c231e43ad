//! Evaluation parameters.
//!
//! The defaults reproduce the fixed constants of [`crate::evaluate`]: at most
//! 32 iterations and an escape radius of 2.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MAX_ITERATIONS: u32 = 32;
pub const ESCAPE_RADIUS: f64 = 2.0;
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EscapeParams {
    /// Iteration cap. Zero is allowed and makes every point evaluate to 0.
    pub max_iterations: u32,
    /// Orbits whose magnitude reaches this value are considered escaped.
    pub escape_radius: f64,
}

impl Default for EscapeParams {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            escape_radius: ESCAPE_RADIUS,
        }
    }
}

impl EscapeParams {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self> {
        let params = Self {
            max_iterations,
            escape_radius,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let params = Self::from_json(&json)?;
        log::debug!("Loaded escape params from {}: {:?}", path.display(), params);
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let radius_sq = self.escape_radius_sq();
        if self.escape_radius <= 0.0 || !radius_sq.is_finite() || radius_sq <= 0.0 {
            return Err(Error::InvalidEscapeRadius(self.escape_radius));
        }
        Ok(())
    }

    pub fn escape_radius_sq(&self) -> f64 {
        self.escape_radius * self.escape_radius
    }
}
