/// Example walking through a band structure path for a cubic lattice
///
/// Resolves the standard path of the built-in cubic table, apportions 60 k-points
/// over its segments and prints the result in KPOINTS layout.
use band_kpath::interfaces::CoordinateSystem;
use band_kpath::io::{write_klabel, write_kpoints};
use band_kpath::kpath::{recommend_budget, uniformity_score};
use band_kpath::symmetries::LatticeLibrary;

fn main() -> band_kpath::Result<()> {
    let library = LatticeLibrary::builtin();
    let entry = library.lattice("cubic")?;
    let path = entry.standard_path.clone().ok_or("cubic has no standard path")?;
    let resolved = library.resolve("cubic", &path)?;

    println!("=== Path {} ===", path.to_path_string());
    let lengths = resolved.lengths()?;
    println!("Segment lengths: {:?}", lengths);

    let budget = recommend_budget(&lengths)?;
    println!("Recommended totals: {}*N+1\n", budget.base);

    let (allocation, discretized) = resolved.discretize(60)?;
    println!("Initial estimate: {:?}", allocation.initial);
    println!("Residual:         {}", allocation.residual);
    println!("Partition:        {:?}", allocation.partition);
    println!(
        "Density spread:   {:.4}\n",
        uniformity_score(&allocation.partition, &lengths)
    );

    let mut out = std::io::stdout();
    write_kpoints(&mut out, "cubic-demo", &discretized, CoordinateSystem::Cartesian)?;
    println!();
    write_klabel(&mut out, "cubic", &discretized)?;

    Ok(())
}
