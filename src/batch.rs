use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use crate::escape::EscapeTime;
use crate::message::{PointRequest, PointResult};

/// Evaluates every request on the rayon pool. Results keep the input order.
pub fn evaluate_batch(evaluator: &EscapeTime, requests: &[PointRequest]) -> Vec<PointResult> {
    requests
        .par_iter()
        .map(|request| request.evaluate(evaluator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch() {
        assert!(evaluate_batch(&EscapeTime::default(), &[]).is_empty());
    }

    #[test]
    fn matches_sequential_evaluation_in_order() {
        let evaluator = EscapeTime::default();
        let requests: Vec<PointRequest> = (0..64u32)
            .flat_map(|y| (0..64u32).map(move |x| (x, y)))
            .map(|(x, y)| {
                let c = -2.0 + x as f64 * 2.5 / 64.0;
                let d = -1.25 + y as f64 * 2.5 / 64.0;
                PointRequest::new(c, d, x, y)
            })
            .collect();

        let results = evaluate_batch(&evaluator, &requests);
        assert_eq!(results.len(), requests.len());
        for (request, result) in requests.iter().zip(&results) {
            assert_eq!((result.x, result.y), (request.x, request.y));
            assert_eq!(result.iterations, crate::evaluate(request.c, request.d));
        }
    }
}
