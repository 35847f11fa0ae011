use anyhow::{Context, Result};
use clap::Parser;
use day1_2_6_8_10::{
    fuel::{read_masses, total_fuel_with_fuel_mass},
    init_logger, CliArgs,
};
use log::info;

fn main() -> Result<()> {
    init_logger();
    let args = CliArgs::parse();
    let masses = read_masses(&args.input_path).with_context(|| {
        format!(
            "Failed to read module masses from given input file({}).",
            args.input_path.display()
        )
    })?;

    let fuel_sum = total_fuel_with_fuel_mass(&masses);
    info!(
        "There are {} modules in total, and {} units of fuel are needed, counting the mass of fuel itself.",
        masses.len(),
        fuel_sum
    );
    println!("{}", fuel_sum);

    Ok(())
}
