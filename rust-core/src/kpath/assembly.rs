use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::kpath::errors::KPathError;
use crate::kpath::segments::build_segments;

/// Position of a high symmetry label inside the discretized path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMarker {
    pub label: String,
    pub index: usize,
}

/// A k-path sampled with a fixed number of points.
///
/// Holds the k-points in path order and one marker per high symmetry label. Markers
/// of consecutive labels may share an index when a segment received no points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizedPath {
    points: Vec<Vector3<f64>>,
    markers: Vec<LabelMarker>,
}

impl DiscretizedPath {
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    pub fn markers(&self) -> &[LabelMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Marker indices in path order
    pub fn marker_indices(&self) -> Vec<usize> {
        self.markers.iter().map(|m| m.index).collect()
    }

    /// All labels that land on the k-point with the given index
    pub fn labels_at(&self, index: usize) -> Vec<&str> {
        self.markers
            .iter()
            .filter(|m| m.index == index)
            .map(|m| m.label.as_str())
            .collect()
    }
}

/// Interpolate the k-points of a path from its per-segment point counts.
///
/// Segment `i` contributes `partition[i]` evenly spaced points, starting on its start
/// point and stopping short of its end point. The last high symmetry point is appended
/// as given, so the path ends exactly on it.
pub fn assemble_path(
    labels: &[String],
    coordinates: &[Vector3<f64>],
    partition: &[usize],
) -> Result<DiscretizedPath, KPathError> {
    if labels.len() != coordinates.len() {
        return Err(KPathError::InvalidPath(format!(
            "{} labels for {} points",
            labels.len(),
            coordinates.len()
        )));
    }

    let segments = build_segments(coordinates)?;
    if partition.len() != segments.len() {
        return Err(KPathError::InvalidPath(format!(
            "partition has {} entries for {} segments",
            partition.len(),
            segments.len()
        )));
    }

    let total_points = partition.iter().sum::<usize>() + 1;
    let mut points = Vec::with_capacity(total_points);
    let mut markers = Vec::with_capacity(labels.len());

    for ((segment, &p), label) in segments.iter().zip(partition).zip(labels) {
        markers.push(LabelMarker {
            label: label.clone(),
            index: points.len(),
        });

        for j in 0..p {
            points.push(segment.point_at(j as f64 / p as f64));
        }
    }

    // Exact copy, no interpolation drift on the end point
    if let (Some(last_label), Some(last_point)) = (labels.last(), coordinates.last()) {
        markers.push(LabelMarker {
            label: last_label.clone(),
            index: total_points - 1,
        });
        points.push(*last_point);
    }

    Ok(DiscretizedPath { points, markers })
}
