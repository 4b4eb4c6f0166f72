// Symmetries module: high symmetry points, k-paths and the lattice library they are looked up in
// The library is an explicit value handed to path resolution; nothing is cached globally

// ======================== MODULE DECLARATIONS ========================
pub mod errors;
pub mod high_symmetry_points;


// ======================== HIGH SYMMETRY POINTS & PATHS ========================
pub use errors::LibraryError; // enum - library loading and path resolution failures

pub use high_symmetry_points::{
    HighSymmetryPoint, // struct - label and position in reciprocal space
    KPath,             // struct - ordered labels of a band structure path
    LatticeEntry,      // struct - points and standard path of one lattice type
    LatticeLibrary,    // struct - lookup table lattice type -> points
    ResolvedPath,      // struct - path labels with their coordinates
};

// KPath impl methods:
//   new(labels) -> Self                                           - creates path from labels
//   parse(input: &str) -> Result<Self, LibraryError>              - "GXMG" or "G-X-M-G" style input
//   segment_count(&self) -> usize                                 - number of segments

// LatticeLibrary impl methods:
//   builtin() -> Self                                             - common 2D/3D lattices
//   add_lattice(&mut self, entry: LatticeEntry)                   - adds or replaces a lattice type
//   lattice(&self, name: &str) -> Result<&LatticeEntry, LibraryError>
//   resolve(&self, lattice: &str, path: &KPath) -> Result<ResolvedPath, LibraryError>

// ResolvedPath impl methods:
//   lengths(&self) -> Result<Vec<f64>, KPathError>                - segment lengths
//   discretize(&self, total_points: usize) -> Result<(Allocation, DiscretizedPath), KPathError>
