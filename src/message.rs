//! Per-pixel request and response messages.
//!
//! On the wire a request is the JSON array `[c, d, x, y]` and a response is
//! `[x, y, iterations]`. The pixel coordinates are opaque to the evaluator and
//! are echoed back so callers can match results to pixels. JSON has no NaN or
//! infinity, so requests with non-finite coordinates can be evaluated but not
//! encoded.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::escape::EscapeTime;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "(f64, f64, u32, u32)", into = "(f64, f64, u32, u32)")]
pub struct PointRequest {
    pub c: f64,
    pub d: f64,
    pub x: u32,
    pub y: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "(u32, u32, u32)", into = "(u32, u32, u32)")]
pub struct PointResult {
    pub x: u32,
    pub y: u32,
    pub iterations: u32,
}

impl PointRequest {
    pub fn new(c: f64, d: f64, x: u32, y: u32) -> Self {
        Self { c, d, x, y }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        if !self.c.is_finite() || !self.d.is_finite() {
            return Err(Error::NonFiniteCoordinate(self.c, self.d));
        }
        Ok(serde_json::to_string(self)?)
    }

    pub fn evaluate(&self, evaluator: &EscapeTime) -> PointResult {
        PointResult {
            x: self.x,
            y: self.y,
            iterations: evaluator.evaluate(self.c, self.d),
        }
    }
}

impl PointResult {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<(f64, f64, u32, u32)> for PointRequest {
    fn from((c, d, x, y): (f64, f64, u32, u32)) -> Self {
        Self { c, d, x, y }
    }
}

impl From<PointRequest> for (f64, f64, u32, u32) {
    fn from(request: PointRequest) -> Self {
        (request.c, request.d, request.x, request.y)
    }
}

impl From<(u32, u32, u32)> for PointResult {
    fn from((x, y, iterations): (u32, u32, u32)) -> Self {
        Self { x, y, iterations }
    }
}

impl From<PointResult> for (u32, u32, u32) {
    fn from(result: PointResult) -> Self {
        (result.x, result.y, result.iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_a_json_array() {
        let request = PointRequest::from_json("[-0.75, 0.1, 12, 34]").unwrap();
        assert_eq!(request, PointRequest::new(-0.75, 0.1, 12, 34));
        assert_eq!(request.to_json().unwrap(), "[-0.75,0.1,12,34]");
    }

    #[test]
    fn result_is_a_json_array() {
        let result = PointResult { x: 3, y: 4, iterations: 32 };
        assert_eq!(result.to_json().unwrap(), "[3,4,32]");
        assert_eq!(PointResult::from_json("[3, 4, 32]").unwrap(), result);
    }

    #[test]
    fn encoded_request_decodes_to_itself() {
        let request = PointRequest::new(-1.75, 0.125, 640, 480);
        let json = request.to_json().unwrap();
        assert_eq!(PointRequest::from_json(&json).unwrap(), request);
    }

    #[test]
    fn non_finite_request_is_not_encoded() {
        let points = [
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, f64::NAN),
        ];
        for (c, d) in points {
            assert!(matches!(
                PointRequest::new(c, d, 1, 2).to_json(),
                Err(Error::NonFiniteCoordinate(_, _))
            ));
        }
        // still evaluable without going through JSON
        let request = PointRequest::new(f64::NAN, 0.0, 1, 2);
        let result = request.evaluate(&EscapeTime::default());
        assert_eq!(result, PointResult { x: 1, y: 2, iterations: 1 });
    }

    #[test]
    fn evaluation_echoes_pixel() {
        let request = PointRequest::new(2.0, 2.0, 7, 9);
        let result = request.evaluate(&EscapeTime::default());
        assert_eq!(result, PointResult { x: 7, y: 9, iterations: 1 });
    }

    #[test]
    fn rejects_wrong_arity_and_types() {
        let malformed = ["[1.0, 2.0, 3]", "{\"c\": 1.0}", "[1.0, 2.0, -1, 0]", "not json"];
        for json in malformed {
            assert!(
                matches!(PointRequest::from_json(json), Err(Error::Codec(_))),
                "{json}"
            );
        }
    }
}
