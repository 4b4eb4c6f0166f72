use serde::{Deserialize, Serialize};

use crate::config::RECOMMEND_LENGTH_SCALE;
use crate::kpath::errors::KPathError;
use crate::kpath::segments::check_lengths;

/// Budget suggestion for a path: totals of the form `base * n + 1`.
///
/// With such a total the proportional split is exact (up to the 1/100 length
/// resolution), so no residual correction is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedBudget {
    /// Reduced integer weight of every segment
    pub weights: Vec<u64>,
    /// Sum of the reduced weights
    pub base: u64,
}

impl RecommendedBudget {
    /// Recommended total number of k-points for the given multiple
    pub fn total_points(&self, multiple: u64) -> u64 {
        self.base * multiple + 1
    }

    /// Smallest recommended total that is at least `minimum`
    pub fn at_least(&self, minimum: u64) -> u64 {
        let multiple = minimum.saturating_sub(1).div_ceil(self.base).max(1);
        self.total_points(multiple)
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Recommend k-point budgets for the given segment lengths
pub fn recommend_budget(lengths: &[f64]) -> Result<RecommendedBudget, KPathError> {
    check_lengths(lengths)?;

    let raw: Vec<u64> = lengths
        .iter()
        .map(|l| (l * RECOMMEND_LENGTH_SCALE).round_ties_even() as u64)
        .collect();

    let divisor = raw.iter().copied().fold(0, gcd);
    if divisor == 0 {
        // Every segment is shorter than the weighting resolution
        return Err(KPathError::DegenerateSegment { index: 0 });
    }

    let weights: Vec<u64> = raw.iter().map(|w| w / divisor).collect();
    let base = weights.iter().sum();

    Ok(RecommendedBudget { weights, base })
}
