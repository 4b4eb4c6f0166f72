//! Input/output around the k-path core: the lattice library file, interactive
//! prompts and the `KPOINTS_<name>` / `klabel` output files.
//!
//! Nothing here is needed to discretize a path; see [`crate::kpath`] for that.

// ======================== MODULE DECLARATIONS ========================
pub mod library_file;
pub mod prompt;
pub mod writers;


// ======================== RE-EXPORTED PUBLIC API ========================
pub use library_file::{load_library, parse_library};
pub use prompt::{PromptError, Prompter};
pub use writers::{format_kpoint, write_klabel, write_klabel_file, write_kpoints, write_kpoints_file};
