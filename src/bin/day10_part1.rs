use anyhow::{anyhow, Context, Result};
use clap::Parser;
use day1_2_6_8_10::{asteroid::read_map, init_logger, CliArgs};
use log::info;

fn main() -> Result<()> {
    init_logger();
    let args = CliArgs::parse();
    let asteroid_map = read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read asteroid map from given input file({}).",
            args.input_path.display()
        )
    })?;

    let (asteroid, detect_count) = asteroid_map
        .best_location()
        .ok_or_else(|| anyhow!("There's no asteroid in given map."))?;
    info!(
        "Asteroid({:?}) in map has maximum detect count({}).",
        asteroid, detect_count
    );
    println!("{}", detect_count);

    Ok(())
}
