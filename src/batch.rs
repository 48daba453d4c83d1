use serde::Serialize;

use crate::fingerprint::round1;
use crate::scoring::Band;
use crate::AnalysisResult;

/// Aggregate view over several analyzed documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub documents: usize,
    pub average_originality: f64,
    pub lowest_originality: f64,
    pub highest_originality: f64,
    pub band: Band,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        if results.is_empty() {
            return Self {
                documents: 0,
                average_originality: 0.0,
                lowest_originality: 0.0,
                highest_originality: 0.0,
                band: Band::for_score(0.0),
            };
        }

        let scores = results.iter().map(|r| r.originality_score);
        let total: f64 = scores.clone().sum();
        let lowest = scores.clone().fold(f64::INFINITY, f64::min);
        let highest = scores.fold(f64::NEG_INFINITY, f64::max);
        let average = round1(total / results.len() as f64);

        Self {
            documents: results.len(),
            average_originality: average,
            lowest_originality: lowest,
            highest_originality: highest,
            band: Band::for_score(average),
        }
    }
}
