use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::kpath::{
    Allocation, DiscretizedPath, KPathError, discretize_path_with_allocation, segment_lengths,
};
use crate::symmetries::errors::LibraryError;

/// A high symmetry point in the Brillouin zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighSymmetryPoint {
    /// Label for the point (G, K, M, etc.)
    pub label: String,
    /// Position in reciprocal space
    pub position: Vector3<f64>,
}

impl HighSymmetryPoint {
    /// Create a new high symmetry point
    pub fn new(label: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// A path through high symmetry points for band structure calculations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KPath {
    /// Ordered list of point labels defining the path
    pub labels: Vec<String>,
}

impl KPath {
    /// Create a new path from a list of labels
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a path from user input.
    ///
    /// `GXMG` is read one label per character, while `G X M G`, `G,X,M,G` or
    /// `G-X-M-G` keep every token as a whole label (for labels like `K1`).
    pub fn parse(input: &str) -> Result<Self, LibraryError> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',' || c == '-')
            .filter(|t| !t.is_empty())
            .collect();

        let labels: Vec<String> = match tokens.as_slice() {
            [] => return Err(LibraryError::EmptyPath),
            [single] => single.chars().map(String::from).collect(),
            many => many.iter().map(|t| t.to_string()).collect(),
        };

        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of segments between consecutive labels
    pub fn segment_count(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    /// Compact string form, as accepted by [`KPath::parse`]
    pub fn to_path_string(&self) -> String {
        if self.labels.iter().all(|l| l.chars().count() == 1) {
            self.labels.concat()
        } else {
            self.labels.join("-")
        }
    }
}

/// High symmetry points of one lattice type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeEntry {
    pub name: String,
    /// Points in library order
    pub points: Vec<HighSymmetryPoint>,
    /// Standard path for band structure, if known
    pub standard_path: Option<KPath>,
}

impl LatticeEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            standard_path: None,
        }
    }

    /// Add a high symmetry point, replacing an earlier point with the same label
    pub fn add_point(&mut self, point: HighSymmetryPoint) {
        match self.points.iter_mut().find(|p| p.label == point.label) {
            Some(existing) => *existing = point,
            None => self.points.push(point),
        }
    }

    /// Set the standard path
    pub fn set_standard_path(&mut self, path: KPath) {
        self.standard_path = Some(path);
    }

    /// Get a point by label
    pub fn get_point(&self, label: &str) -> Option<&HighSymmetryPoint> {
        self.points.iter().find(|p| p.label == label)
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }
}

/// Lookup table lattice type -> high symmetry points.
///
/// Built once per request (from a file or [`LatticeLibrary::builtin`]) and passed
/// explicitly to whoever resolves paths; it is never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatticeLibrary {
    lattices: Vec<LatticeEntry>,
}

impl LatticeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lattice type, replacing an earlier one with the same name
    pub fn add_lattice(&mut self, entry: LatticeEntry) {
        match self.lattices.iter_mut().find(|l| l.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.lattices.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&LatticeEntry> {
        self.lattices.iter().find(|l| l.name == name)
    }

    pub fn lattices(&self) -> &[LatticeEntry] {
        &self.lattices
    }

    /// Lattice type names in library order
    pub fn lattice_types(&self) -> Vec<String> {
        self.lattices.iter().map(|l| l.name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lattices.is_empty()
    }

    /// Look up a lattice type, failing with the list of known types
    pub fn lattice(&self, name: &str) -> Result<&LatticeEntry, LibraryError> {
        self.get(name).ok_or_else(|| LibraryError::UnknownLattice {
            name: name.to_string(),
            available: self.lattice_types(),
        })
    }

    /// Replace every label of `path` with its coordinates in the given lattice.
    ///
    /// All missing labels are reported at once, in path order.
    pub fn resolve(&self, lattice: &str, path: &KPath) -> Result<ResolvedPath, LibraryError> {
        if path.is_empty() {
            return Err(LibraryError::EmptyPath);
        }

        let entry = self.lattice(lattice)?;

        let mut missing: Vec<String> = Vec::new();
        let mut coordinates = Vec::with_capacity(path.len());
        for label in &path.labels {
            match entry.get_point(label) {
                Some(point) => coordinates.push(point.position),
                None if !missing.contains(label) => missing.push(label.clone()),
                None => {}
            }
        }

        if !missing.is_empty() {
            return Err(LibraryError::UnknownLabels {
                lattice: lattice.to_string(),
                missing,
                available: entry.labels(),
            });
        }

        Ok(ResolvedPath {
            lattice_type: entry.name.clone(),
            labels: path.labels.clone(),
            coordinates,
        })
    }

    /// Small library of common 2D and 3D lattices with their standard paths
    pub fn builtin() -> Self {
        // (lattice type, points, standard path); G is the zone centre
        let tables: [(&str, &[(&str, [f64; 3])], &str); 6] = [
            (
                "square",
                &[("G", [0.0, 0.0, 0.0]), ("X", [0.5, 0.0, 0.0]), ("M", [0.5, 0.5, 0.0])],
                "GXMG",
            ),
            (
                "rectangular",
                &[
                    ("G", [0.0, 0.0, 0.0]),
                    ("X", [0.5, 0.0, 0.0]),
                    ("Y", [0.0, 0.5, 0.0]),
                    ("M", [0.5, 0.5, 0.0]),
                ],
                "GXMYG",
            ),
            (
                "hexagonal2d",
                &[
                    ("G", [0.0, 0.0, 0.0]),
                    ("M", [0.5, 0.0, 0.0]),
                    ("K", [1.0 / 3.0, 1.0 / 3.0, 0.0]),
                ],
                "GMKG",
            ),
            (
                "cubic",
                &[
                    ("G", [0.0, 0.0, 0.0]),
                    ("X", [0.5, 0.0, 0.0]),
                    ("M", [0.5, 0.5, 0.0]),
                    ("R", [0.5, 0.5, 0.5]),
                ],
                "GXMGRX",
            ),
            (
                "hexagonal",
                &[
                    ("G", [0.0, 0.0, 0.0]),
                    ("M", [0.5, 0.0, 0.0]),
                    ("K", [1.0 / 3.0, 1.0 / 3.0, 0.0]),
                    ("A", [0.0, 0.0, 0.5]),
                    ("L", [0.5, 0.0, 0.5]),
                    ("H", [1.0 / 3.0, 1.0 / 3.0, 0.5]),
                ],
                "GMKGALHA",
            ),
            (
                "tetragonal",
                &[
                    ("G", [0.0, 0.0, 0.0]),
                    ("X", [0.5, 0.0, 0.0]),
                    ("M", [0.5, 0.5, 0.0]),
                    ("Z", [0.0, 0.0, 0.5]),
                    ("R", [0.5, 0.5, 0.5]),
                    ("A", [0.5, 0.0, 0.5]),
                ],
                "GXMGZRAZ",
            ),
        ];

        let mut library = Self::new();
        for (name, points, path) in tables {
            let mut entry = LatticeEntry::new(name);
            for &(label, [x, y, z]) in points {
                entry.add_point(HighSymmetryPoint::new(label, Vector3::new(x, y, z)));
            }
            entry.set_standard_path(KPath::new(path.chars().map(String::from)));
            library.add_lattice(entry);
        }
        library
    }
}

/// A path whose labels have been replaced by coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPath {
    pub lattice_type: String,
    pub labels: Vec<String>,
    pub coordinates: Vec<Vector3<f64>>,
}

impl ResolvedPath {
    pub fn segment_count(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// Lengths of the segments between consecutive points
    pub fn lengths(&self) -> Result<Vec<f64>, KPathError> {
        segment_lengths(&self.coordinates)
    }

    /// Discretize the path into exactly `total_points` k-points
    pub fn discretize(&self, total_points: usize) -> Result<(Allocation, DiscretizedPath), KPathError> {
        discretize_path_with_allocation(&self.labels, &self.coordinates, total_points)
    }
}
