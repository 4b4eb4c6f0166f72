use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

use band_kpath::config::DEFAULT_LIBRARY_FILE;
use band_kpath::interfaces::CoordinateSystem;
use band_kpath::io::{Prompter, load_library, write_klabel_file, write_kpoints_file};
use band_kpath::kpath::{check_budget, recommend_budget};
use band_kpath::symmetries::{KPath, LatticeLibrary, ResolvedPath};

#[derive(Parser)]
#[command(name = "band-kpath")]
#[command(about = "Generate band structure k-point paths with uniform sampling density")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Lattice library file (default: Lattice_Information.txt, or the built-in library if absent)
    #[arg(short, long, global = true)]
    library: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write KPOINTS_<name> and klabel for a k-path; missing values are asked for
    Generate {
        /// Lattice type in the library
        #[arg(long)]
        lattice: Option<String>,

        /// K-path, e.g. GXMG or G-X-M-G
        #[arg(short, long)]
        path: Option<String>,

        /// Total number of k-points
        #[arg(short = 'n', long)]
        points: Option<usize>,

        /// Name used in the KPOINTS file name and title
        #[arg(long)]
        name: Option<String>,

        /// Directory the files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Label the k-points as reciprocal instead of cartesian coordinates
        #[arg(long)]
        reciprocal: bool,
    },
    /// Print recommended k-point totals for a k-path
    Recommend {
        /// Lattice type in the library
        #[arg(long)]
        lattice: String,

        /// K-path (default: the lattice's standard path)
        #[arg(short, long)]
        path: Option<String>,
    },
    /// List lattice types and their high symmetry points
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting band-kpath v{}", band_kpath::VERSION);

    let library = select_library(cli.library.as_deref())?;

    match cli.command {
        Commands::Generate {
            lattice,
            path,
            points,
            name,
            output_dir,
            reciprocal,
        } => {
            let coordinates = if reciprocal {
                CoordinateSystem::Reciprocal
            } else {
                CoordinateSystem::Cartesian
            };
            generate(&library, lattice, path, points, name, &output_dir, coordinates)
        }
        Commands::Recommend { lattice, path } => recommend(&library, &lattice, path.as_deref()),
        Commands::List => {
            list(&library);
            Ok(())
        }
    }
}

fn select_library(explicit: Option<&Path>) -> anyhow::Result<LatticeLibrary> {
    if let Some(file) = explicit {
        return load_library(file)
            .with_context(|| format!("Failed to load lattice library {}", file.display()));
    }

    let default = Path::new(DEFAULT_LIBRARY_FILE);
    if default.exists() {
        load_library(default)
            .with_context(|| format!("Failed to load lattice library {}", default.display()))
    } else {
        warn!("{} not found, using the built-in lattice library", DEFAULT_LIBRARY_FILE);
        Ok(LatticeLibrary::builtin())
    }
}

fn resolve(library: &LatticeLibrary, lattice: &str, path: Option<&str>) -> anyhow::Result<ResolvedPath> {
    let kpath = match path {
        Some(p) => KPath::parse(p)?,
        None => library
            .lattice(lattice)?
            .standard_path
            .clone()
            .with_context(|| format!("Lattice '{}' has no standard path, pass --path", lattice))?,
    };
    Ok(library.resolve(lattice, &kpath)?)
}

fn generate(
    library: &LatticeLibrary,
    lattice: Option<String>,
    path: Option<String>,
    points: Option<usize>,
    name: Option<String>,
    output_dir: &Path,
    coordinates: CoordinateSystem,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let lattice = match lattice {
        Some(l) => library.lattice(&l)?.name.clone(),
        None => prompter.ask_lattice_type(library)?,
    };

    let resolved = match path {
        Some(p) => resolve(library, &lattice, Some(p.as_str()))?,
        None => prompter.ask_kpath(library, &lattice)?,
    };

    let total_points = match points {
        Some(n) => {
            check_budget(n, resolved.segment_count())?;
            n
        }
        None => prompter.ask_total_points(&resolved)?,
    };

    let name = match name {
        Some(n) => n,
        None => prompter.ask_file_name()?,
    };

    let (allocation, discretized) = resolved
        .discretize(total_points)
        .context("Failed to discretize the k-path")?;
    info!(
        "Allocated {:?} k-points per segment ({} corrections after rounding)",
        allocation.partition,
        allocation.corrections()
    );

    write_kpoints_file(output_dir, &name, &discretized, coordinates)
        .context("Failed to write the KPOINTS file")?;
    write_klabel_file(output_dir, &lattice, &discretized)
        .context("Failed to write the klabel file")?;

    println!(
        "Successfully created KPOINTS_{} and klabel ({} k-points)",
        name,
        discretized.len()
    );
    Ok(())
}

fn recommend(library: &LatticeLibrary, lattice: &str, path: Option<&str>) -> anyhow::Result<()> {
    let resolved = resolve(library, lattice, path)?;
    let budget = recommend_budget(&resolved.lengths()?)?;

    println!("Recommended total k-points: {}*N+1", budget.base);
    println!("Segment weights: {:?}", budget.weights);
    let examples: Vec<String> = (1..=5).map(|n| budget.total_points(n).to_string()).collect();
    println!("e.g. {}", examples.join(", "));
    Ok(())
}

fn list(library: &LatticeLibrary) {
    for entry in library.lattices() {
        let labels = entry.labels().join(" ");
        match &entry.standard_path {
            Some(path) => println!("{}: {} (standard path {})", entry.name, labels, path.to_path_string()),
            None => println!("{}: {}", entry.name, labels),
        }
    }
}
