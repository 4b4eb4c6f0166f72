use thiserror::Error;

/// Errors raised while loading a lattice library or resolving a path in it
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("cannot read lattice library: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: point '{label}' appears before any lattice type")]
    PointOutsideSection { line: usize, label: String },

    #[error("there is no '{name}' lattice type in the library {available:?}")]
    UnknownLattice { name: String, available: Vec<String> },

    #[error("{missing:?} not found in lattice '{lattice}' (available: {available:?})")]
    UnknownLabels {
        lattice: String,
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("the k-path is empty")]
    EmptyPath,
}
