use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use nalgebra::Vector3;

use crate::config::{KLABEL_FILE_NAME, KPOINTS_COLUMN_WIDTH, KPOINTS_FILE_PREFIX, KPOINTS_PRECISION};
use crate::interfaces::CoordinateSystem;
use crate::kpath::DiscretizedPath;

/// One k-point line: kx and ky padded to a fixed column width, kz unpadded.
///
/// A value that fills the whole column still gets one trailing space.
pub fn format_kpoint(k: &Vector3<f64>) -> String {
    let column = |v: f64| {
        let value = format!("{:.prec$}", v, prec = KPOINTS_PRECISION);
        let width = KPOINTS_COLUMN_WIDTH.max(value.len() + 1);
        format!("{:<width$}", value, width = width)
    };
    format!(
        "{}{}{:.prec$}",
        column(k.x),
        column(k.y),
        k.z,
        prec = KPOINTS_PRECISION
    )
}

/// Write a KPOINTS file body: title, point count, coordinate header, then the points.
///
/// Lines where high symmetry labels land carry ` !<label>` comments, several of them
/// when a segment received no points.
pub fn write_kpoints<W: Write>(
    out: &mut W,
    title: &str,
    path: &DiscretizedPath,
    coordinates: CoordinateSystem,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", path.len())?;
    writeln!(out, "{}", coordinates.header())?;

    for (i, k) in path.points().iter().enumerate() {
        let mut line = format_kpoint(k);
        for label in path.labels_at(i) {
            line.push_str(" !");
            line.push_str(label);
        }
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Write a klabel file: the lattice type, then `<label> <index>` per high symmetry point
pub fn write_klabel<W: Write>(out: &mut W, lattice_type: &str, path: &DiscretizedPath) -> io::Result<()> {
    writeln!(out, "{}", lattice_type)?;
    for marker in path.markers() {
        writeln!(out, "{} {}", marker.label, marker.index)?;
    }
    Ok(())
}

/// Create `KPOINTS_<name>` in `dir`
pub fn write_kpoints_file(
    dir: impl AsRef<Path>,
    name: &str,
    path: &DiscretizedPath,
    coordinates: CoordinateSystem,
) -> io::Result<PathBuf> {
    let file_path = dir.as_ref().join(format!("{}{}", KPOINTS_FILE_PREFIX, name));
    let mut out = BufWriter::new(File::create(&file_path)?);
    write_kpoints(&mut out, name, path, coordinates)?;
    out.flush()?;

    info!("Successfully created {}", file_path.display());
    Ok(file_path)
}

/// Create `klabel` in `dir`
pub fn write_klabel_file(
    dir: impl AsRef<Path>,
    lattice_type: &str,
    path: &DiscretizedPath,
) -> io::Result<PathBuf> {
    let file_path = dir.as_ref().join(KLABEL_FILE_NAME);
    let mut out = BufWriter::new(File::create(&file_path)?);
    write_klabel(&mut out, lattice_type, path)?;
    out.flush()?;

    info!("Successfully created {}", file_path.display());
    Ok(file_path)
}
