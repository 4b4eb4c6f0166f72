use thiserror::Error;

/// Errors raised while discretizing a k-path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KPathError {
    /// Two consecutive path points coincide, so the segment has no length
    #[error("segment {index} has zero length (consecutive points coincide)")]
    DegenerateSegment { index: usize },

    /// The point budget cannot cover every segment plus the shared end point
    #[error("{total_points} k-points cannot cover {segments} segments plus the end point")]
    InsufficientBudget { total_points: usize, segments: usize },

    /// The budget is too large to apportion exactly
    #[error("{total_points} k-points exceed the supported maximum of {limit}")]
    BudgetTooLarge { total_points: usize, limit: usize },

    #[error("invalid path: {0}")]
    InvalidPath(String),
}
