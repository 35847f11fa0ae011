use anyhow::{Context, Result};
use clap::Parser;
use day1_2_6_8_10::{init_logger, orbit::read_orbits, CliArgs};
use log::info;

fn main() -> Result<()> {
    init_logger();
    let args = CliArgs::parse();
    let orbit_tree = read_orbits(&args.input_path).with_context(|| {
        format!(
            "Failed to read orbit tree from given input file({}).",
            args.input_path.display()
        )
    })?;

    let total_orbit_count = orbit_tree
        .total_orbit_count()
        .context("Failed to count orbits")?;
    info!(
        "There are {} objects, and {} direct and indirect orbits in total.",
        orbit_tree.obj_count(),
        total_orbit_count
    );
    println!("{}", total_orbit_count);

    Ok(())
}
