// Proportional point allocation: apportions an exact k-point budget over the
// segments of a path so that the sampling density stays as uniform as possible.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_TOTAL_POINTS, SCORE_TIE_TOLERANCE};
use crate::kpath::errors::KPathError;
use crate::kpath::segments::check_lengths;

/// Direction of a single-unit correction step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Result of apportioning a k-point budget over path segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Points per segment from proportional rounding, before correction
    pub initial: Vec<usize>,
    /// Budget minus the rounded total (positive: points were missing)
    pub residual: i64,
    /// Final points per segment, summing to `total_points - 1`
    pub partition: Vec<usize>,
    /// Uniformity score after each correction step
    pub score_trace: Vec<f64>,
}

impl Allocation {
    /// Number of k-points described by the partition, including the final end point
    pub fn total_points(&self) -> usize {
        self.partition.iter().sum::<usize>() + 1
    }

    /// Number of single-unit corrections applied after rounding
    pub fn corrections(&self) -> usize {
        self.residual.unsigned_abs() as usize
    }
}

/// Points per unit length for every segment
pub fn density_vector(partition: &[usize], lengths: &[f64]) -> Vec<f64> {
    partition
        .iter()
        .zip(lengths)
        .map(|(&p, &l)| p as f64 / l)
        .collect()
}

/// Population standard deviation of the segment densities (lower is more uniform)
pub fn uniformity_score(partition: &[usize], lengths: &[f64]) -> f64 {
    let densities = density_vector(partition, lengths);
    let n = densities.len() as f64;
    let mean = densities.iter().sum::<f64>() / n;
    let variance = densities.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Make sure the budget leaves room for every segment plus the shared end point,
/// and stays small enough for the point counts to be computed exactly
pub fn check_budget(total_points: usize, segments: usize) -> Result<(), KPathError> {
    if total_points > MAX_TOTAL_POINTS {
        return Err(KPathError::BudgetTooLarge {
            total_points,
            limit: MAX_TOTAL_POINTS,
        });
    }
    if total_points < segments.saturating_add(1) {
        return Err(KPathError::InsufficientBudget {
            total_points,
            segments,
        });
    }
    Ok(())
}

/// Proportional first guess: `round((total_points - 1) * l_i / sum(l))`.
///
/// Halves round to even, so the rounded total may miss the budget by up to one
/// point per segment in either direction.
pub fn initial_estimate(lengths: &[f64], total_points: usize) -> Vec<usize> {
    let slots = total_points.saturating_sub(1) as f64;
    let total_length: f64 = lengths.iter().sum();

    lengths
        .iter()
        .map(|&l| (slots * (l / total_length)).round_ties_even() as usize)
        .collect()
}

/// The partition with segment `j` moved by one point, or `None` if that would go negative
fn adjust(partition: &[usize], j: usize, direction: Direction) -> Option<Vec<usize>> {
    let mut candidate = partition.to_vec();
    candidate[j] = match direction {
        Direction::Increase => candidate[j] + 1,
        Direction::Decrease => candidate[j].checked_sub(1)?,
    };
    Some(candidate)
}

/// Apply the single-unit move that leaves the densities most uniform.
///
/// Every segment is tried in turn. Scores within [`SCORE_TIE_TOLERANCE`] of the
/// best one count as equal, and the lowest segment index wins among them.
/// Returns the index of the adjusted segment and the new score.
pub fn correction_step(
    partition: &mut Vec<usize>,
    lengths: &[f64],
    direction: Direction,
) -> Result<(usize, f64), KPathError> {
    let scored: Vec<(usize, Vec<usize>, f64)> = (0..partition.len())
        .filter_map(|j| {
            adjust(partition, j, direction).map(|candidate| {
                let score = uniformity_score(&candidate, lengths);
                (j, candidate, score)
            })
        })
        .collect();

    // Only reachable from a partition that already violates the budget precondition
    let Some(best) = scored.iter().map(|(_, _, s)| *s).reduce(f64::min) else {
        return Err(KPathError::InsufficientBudget {
            total_points: partition.iter().sum::<usize>() + 1,
            segments: partition.len(),
        });
    };

    let threshold = best + SCORE_TIE_TOLERANCE * best.max(1.0);
    let (index, candidate, score) = scored
        .into_iter()
        .find(|(_, _, s)| *s <= threshold)
        .ok_or_else(|| KPathError::InvalidPath("uniformity score is not a number".to_string()))?;

    *partition = candidate;
    Ok((index, score))
}

/// Apportion `total_points` k-points over segments of the given lengths.
///
/// The returned partition holds the points of each segment excluding its end point,
/// so it sums to `total_points - 1`; the final high symmetry point is the extra one.
pub fn allocate(lengths: &[f64], total_points: usize) -> Result<Allocation, KPathError> {
    check_lengths(lengths)?;
    check_budget(total_points, lengths.len())?;

    let initial = initial_estimate(lengths, total_points);
    let too_large = KPathError::BudgetTooLarge {
        total_points,
        limit: MAX_TOTAL_POINTS,
    };
    let assigned = initial
        .iter()
        .try_fold(0usize, |acc, &p| acc.checked_add(p))
        .ok_or_else(|| too_large.clone())?;
    let slots = i64::try_from(total_points - 1).map_err(|_| too_large.clone())?;
    let assigned = i64::try_from(assigned).map_err(|_| too_large)?;
    let residual = slots - assigned;

    debug!(
        "Initial estimate {:?} for {} k-points, residual {}",
        initial, total_points, residual
    );

    let direction = if residual > 0 {
        Direction::Increase
    } else {
        Direction::Decrease
    };

    let mut partition = initial.clone();
    let mut score_trace = Vec::with_capacity(residual.unsigned_abs() as usize);

    for step in 0..residual.unsigned_abs() {
        let (index, score) = correction_step(&mut partition, lengths, direction)?;
        debug!(
            "Correction {}: {:?} segment {} -> {:?} (score {:.6e})",
            step + 1,
            direction,
            index,
            partition,
            score
        );
        score_trace.push(score);
    }

    Ok(Allocation {
        initial,
        residual,
        partition,
        score_trace,
    })
}
