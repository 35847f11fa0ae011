use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use day1_2_6_8_10::{init_logger, orbit::read_orbits};
use log::info;

#[derive(Debug, Parser)]
struct Day6Part2Args {
    input_path: PathBuf,
    /// Object starting the transfers
    #[arg(long, default_value = "YOU")]
    from: String,
    /// Object whose orbited object is the destination
    #[arg(long, default_value = "SAN")]
    to: String,
}

fn main() -> Result<()> {
    init_logger();
    let args = Day6Part2Args::parse();
    let orbit_tree = read_orbits(&args.input_path).with_context(|| {
        format!(
            "Failed to read orbit tree from given input file({}).",
            args.input_path.display()
        )
    })?;

    let transfer_count = orbit_tree
        .transfer_count(&args.from, &args.to)
        .with_context(|| format!("Failed to move from {} to {}", args.from, args.to))?;
    info!(
        "{} needs {} orbital transfers to reach {}.",
        args.from, transfer_count, args.to
    );
    println!("{}", transfer_count);

    Ok(())
}
