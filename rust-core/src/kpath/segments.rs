use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::LENGTH_TOLERANCE;
use crate::kpath::errors::KPathError;

/// Straight piece of a k-path between two consecutive high symmetry points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
}

impl Segment {
    pub fn new(start: Vector3<f64>, end: Vector3<f64>) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    pub fn point_at(&self, t: f64) -> Vector3<f64> {
        self.start + (self.end - self.start) * t
    }
}

/// Check that a coordinate list describes a usable path.
///
/// A path needs at least two points and every component has to be finite.
pub fn validate_coordinates(coordinates: &[Vector3<f64>]) -> Result<(), KPathError> {
    if coordinates.len() < 2 {
        return Err(KPathError::InvalidPath(format!(
            "a path needs at least two points, got {}",
            coordinates.len()
        )));
    }

    if let Some(index) = coordinates
        .iter()
        .position(|k| k.iter().any(|c| !c.is_finite()))
    {
        return Err(KPathError::InvalidPath(format!(
            "point {} has a non-finite coordinate",
            index
        )));
    }

    Ok(())
}

/// Build the segments between consecutive coordinates.
///
/// N coordinates give N-1 segments. Fails when fewer than two coordinates are supplied.
pub fn build_segments(coordinates: &[Vector3<f64>]) -> Result<Vec<Segment>, KPathError> {
    validate_coordinates(coordinates)?;

    Ok(coordinates
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect())
}

/// Lengths of all segments of a path, rejecting zero-length segments
pub fn segment_lengths(coordinates: &[Vector3<f64>]) -> Result<Vec<f64>, KPathError> {
    let lengths: Vec<f64> = build_segments(coordinates)?
        .iter()
        .map(Segment::length)
        .collect();

    check_lengths(&lengths)?;
    Ok(lengths)
}

/// Reject any length that is zero (or too small to divide by) or not finite
pub fn check_lengths(lengths: &[f64]) -> Result<(), KPathError> {
    if lengths.is_empty() {
        return Err(KPathError::InvalidPath("no segments to allocate".to_string()));
    }

    match lengths
        .iter()
        .position(|&l| !l.is_finite() || l <= LENGTH_TOLERANCE)
    {
        Some(index) => Err(KPathError::DegenerateSegment { index }),
        None => Ok(()),
    }
}
