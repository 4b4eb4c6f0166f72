//! K-path module: segment lengths, proportional k-point allocation and path assembly.
//!
//! Quick reference
//! - Entry point: [`discretize_path`], [`discretize_path_with_allocation`]
//! - Segments: [`Segment`], [`segment_lengths`]
//! - Allocation: [`allocate`], [`Allocation`], [`uniformity_score`]
//! - Assembly: [`assemble_path`], [`DiscretizedPath`], [`LabelMarker`]
//! - Budgets: [`recommend_budget`], [`RecommendedBudget`]

// ======================== MODULE DECLARATIONS ========================
pub mod assembly;
pub mod errors;
pub mod partition;
pub mod recommend;
pub mod segments;

mod _tests_partition;

// ======================== RE-EXPORTED PUBLIC API ========================
pub use assembly::{DiscretizedPath, LabelMarker, assemble_path};
pub use errors::KPathError;
pub use partition::{
    Allocation, Direction, allocate, check_budget, correction_step, density_vector,
    initial_estimate, uniformity_score,
};
pub use recommend::{RecommendedBudget, recommend_budget};
pub use segments::{Segment, build_segments, check_lengths, segment_lengths};

use nalgebra::Vector3;

/// Discretize a labelled path into exactly `total_points` k-points
pub fn discretize_path(
    labels: &[String],
    coordinates: &[Vector3<f64>],
    total_points: usize,
) -> Result<DiscretizedPath, KPathError> {
    discretize_path_with_allocation(labels, coordinates, total_points).map(|(_, path)| path)
}

/// Same as [`discretize_path`], also returning the allocation the path was built from
pub fn discretize_path_with_allocation(
    labels: &[String],
    coordinates: &[Vector3<f64>],
    total_points: usize,
) -> Result<(Allocation, DiscretizedPath), KPathError> {
    if labels.len() != coordinates.len() {
        return Err(KPathError::InvalidPath(format!(
            "{} labels for {} points",
            labels.len(),
            coordinates.len()
        )));
    }

    let lengths = segment_lengths(coordinates)?;
    let allocation = allocate(&lengths, total_points)?;
    let path = assemble_path(labels, coordinates, &allocation.partition)?;

    Ok((allocation, path))
}
