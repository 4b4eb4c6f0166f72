// Constants

// Tolerances
pub const LENGTH_TOLERANCE: f64 = 1e-12; // Segments at or below this length are degenerate
pub const SCORE_TIE_TOLERANCE: f64 = 1e-12; // Relative tolerance for equal uniformity scores

// Budgets
// Largest budget whose point counts stay exact in f64
pub const MAX_TOTAL_POINTS: usize = if (usize::MAX as u64) < (1u64 << 53) {
    usize::MAX
} else {
    (1u64 << 53) as usize
};

// Budget recommendation
pub const RECOMMEND_LENGTH_SCALE: f64 = 100.0; // Segment lengths are weighted in units of 1/100

// Files
pub const DEFAULT_LIBRARY_FILE: &str = "Lattice_Information.txt";
pub const KPOINTS_FILE_PREFIX: &str = "KPOINTS_";
pub const KLABEL_FILE_NAME: &str = "klabel";

// Output formatting
pub const KPOINTS_COLUMN_WIDTH: usize = 10;
pub const KPOINTS_PRECISION: usize = 6;
