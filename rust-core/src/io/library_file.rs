// Lattice library text format: a line with one token opens a lattice type section,
// a line `label kx ky kz` adds a high symmetry point to the current section.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use nalgebra::Vector3;

use crate::symmetries::{HighSymmetryPoint, LatticeEntry, LatticeLibrary, LibraryError};

/// Parse a lattice library from any buffered reader
pub fn parse_library<R: BufRead>(reader: R) -> Result<LatticeLibrary, LibraryError> {
    let mut library = LatticeLibrary::new();
    let mut current: Option<LatticeEntry> = None;

    for (i, line) in reader.lines().enumerate() {
        let line_number = i + 1;
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            [lattice_type] => {
                if let Some(entry) = current.take() {
                    library.add_lattice(entry);
                }
                current = Some(LatticeEntry::new(*lattice_type));
            }
            [label, kx, ky, kz] => {
                let Some(entry) = current.as_mut() else {
                    return Err(LibraryError::PointOutsideSection {
                        line: line_number,
                        label: label.to_string(),
                    });
                };
                let position = Vector3::new(
                    parse_component(kx, line_number)?,
                    parse_component(ky, line_number)?,
                    parse_component(kz, line_number)?,
                );
                entry.add_point(HighSymmetryPoint::new(*label, position));
            }
            _ => warn!(
                "Skipping line {} of lattice library: expected 1 or 4 fields, found {}",
                line_number,
                tokens.len()
            ),
        }
    }

    if let Some(entry) = current {
        library.add_lattice(entry);
    }

    Ok(library)
}

fn parse_component(token: &str, line: usize) -> Result<f64, LibraryError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LibraryError::Parse {
            line,
            message: format!("'{}' is not a valid coordinate", token),
        })
}

/// Load a lattice library file
pub fn load_library(path: impl AsRef<Path>) -> Result<LatticeLibrary, LibraryError> {
    let path = path.as_ref();
    let library = parse_library(BufReader::new(File::open(path)?))?;
    info!(
        "Loaded {} lattice types from {}",
        library.lattices().len(),
        path.display()
    );
    Ok(library)
}
