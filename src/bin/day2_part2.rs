use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use day1_2_6_8_10::{
    init_logger,
    int_code::{
        read_int_code,
        search::{answer, find_noun_verb, NOUN_VERB_RANGE},
    },
};

#[derive(Debug, Parser)]
struct Day2Part2Args {
    input_path: PathBuf,
    /// Expected value at address 0 after the program halts
    #[arg(long, default_value_t = 19_690_720)]
    target: i64,
}

fn main() -> Result<()> {
    init_logger();
    let args = Day2Part2Args::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let (noun, verb) = find_noun_verb(&int_code, args.target, NOUN_VERB_RANGE)
        .with_context(|| format!("Failed to find noun and verb producing {}", args.target))?;
    println!("{}", answer(noun, verb));

    Ok(())
}
