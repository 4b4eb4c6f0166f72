//! Band-structure k-path discretization library
//!
//! This library turns an ordered path through high-symmetry points of the
//! Brillouin zone into a fixed number of k-points. Points are apportioned to
//! the path segments so that the sampling density stays as uniform as possible.

pub mod config;
pub mod interfaces;
pub mod io;
pub mod kpath;
pub mod symmetries;

/// Boxed result type for binaries and demos built on the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
