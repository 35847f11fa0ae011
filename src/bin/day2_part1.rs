use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use day1_2_6_8_10::{
    init_logger,
    int_code::{com::evaluate, patch, read_int_code},
};
use log::info;

#[derive(Debug, Parser)]
struct Day2Part1Args {
    input_path: PathBuf,
    /// Value written into address 1 before running
    #[arg(long, default_value_t = 12)]
    noun: i64,
    /// Value written into address 2 before running
    #[arg(long, default_value_t = 2)]
    verb: i64,
}

fn main() -> Result<()> {
    init_logger();
    let args = Day2Part1Args::parse();
    let mut int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    patch(&mut int_code, args.noun, args.verb).context("Failed to restore program state")?;
    let output = evaluate(&mut int_code).context("Failed to run int code")?;
    info!(
        "With noun {} and verb {}, program halts, code[0] = {}.",
        args.noun, args.verb, output
    );
    println!("{}", output);

    Ok(())
}
