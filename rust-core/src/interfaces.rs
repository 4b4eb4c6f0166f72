// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Enumeration to track the coordinate system the k-points are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordinateSystem {
    #[default]
    Cartesian,
    Reciprocal,
}

impl CoordinateSystem {
    /// Header line used by the KPOINTS format
    pub fn header(&self) -> &'static str {
        match self {
            Self::Cartesian => "Cartesian",
            Self::Reciprocal => "Reciprocal",
        }
    }
}
