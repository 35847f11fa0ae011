use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use day1_2_6_8_10::{image::read_image, init_logger};

#[derive(Debug, Parser)]
struct Day8Args {
    input_path: PathBuf,
    #[arg(long, default_value_t = 25)]
    width: u32,
    #[arg(long, default_value_t = 6)]
    height: u32,
}

fn main() -> Result<()> {
    init_logger();
    let args = Day8Args::parse();
    let image = read_image(&args.input_path, args.width, args.height).with_context(|| {
        format!(
            "Failed to read image from given input file({}).",
            args.input_path.display()
        )
    })?;

    println!("{}", image.render());

    Ok(())
}
