use std::{error, fmt::Display, io, path::PathBuf};

use clap::Parser;

pub mod asteroid;
pub mod fuel;
pub mod image;
pub mod int_code;
pub mod orbit;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    EmptyError,
    ParseIntError(String),
    UnknownOpcode { opcode: i64, ip: usize },
    MissingHalt(usize),
    InvalidAddress { address: i64, ip: usize },
    PatchOutOfRange(usize),
    ArithmeticOverflow(usize),
    NoSolution(i64),
    AmbiguousSolution(i64, Vec<(i64, i64)>),
    InvalidOrbitSpec(String),
    RewriteOrbitLink(String, String, String),
    UnknownObject(String),
    OrbitCycle(String),
    NoCommonOrbit(String, String),
    InvalidImageDimension(u32, u32),
    InvalidCharAsPixel(char, u32),
    NoImageInFile,
    DigitCountNotMatchImageDimension(usize, u32, u32),
    PixelValueExceedLimit(u32, u32),
    InvalidCharacterInMap(usize, usize, char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O Error: {}", ioe),
            Error::EmptyError => write!(f, "Get empty code in file"),
            Error::ParseIntError(s) => write!(f, "Failed to parse integer from string({})", s),
            Error::UnknownOpcode { opcode, ip } => write!(
                f,
                "Unknown operation code({}) found at instruction pointer({})",
                opcode, ip
            ),
            Error::MissingHalt(len) => write!(
                f,
                "Instruction pointer exceeds total code length({}) without halt",
                len
            ),
            Error::InvalidAddress { address, ip } => write!(
                f,
                "Invalid address({}) used by instruction at {}",
                address, ip
            ),
            Error::PatchOutOfRange(len) => write!(
                f,
                "Can't patch noun and verb into code of length({})",
                len
            ),
            Error::ArithmeticOverflow(ip) => {
                write!(f, "Arithmetic overflow in instruction at {}", ip)
            }
            Error::NoSolution(target) => {
                write!(f, "No noun and verb pair produces output({})", target)
            }
            Error::AmbiguousSolution(target, pairs) => write!(
                f,
                "Expect exactly one noun and verb pair producing output({}), found {:?}",
                target, pairs
            ),
            Error::InvalidOrbitSpec(sp) => write!(f, "Invalid orbit specification({})", sp),
            Error::RewriteOrbitLink(orbiter, orbited, new_orbited) => write!(
                f,
                "Can't rewrite orbited object(from {} to {}) of object({})",
                orbited, new_orbited, orbiter
            ),
            Error::UnknownObject(obj) => write!(f, "Object({}) not found in given orbits", obj),
            Error::OrbitCycle(obj) => {
                write!(f, "Orbit path of object({}) never reaches a root", obj)
            }
            Error::NoCommonOrbit(obj0, obj1) => write!(
                f,
                "Orbit paths of {} and {} have no common object",
                obj0, obj1
            ),
            Error::InvalidImageDimension(width, height) => {
                write!(f, "Invalid image dimension({} x {})", width, height)
            }
            Error::InvalidCharAsPixel(c, pixel_radix) => write!(
                f,
                "Invalid character({}) found, because pixel radix is {}",
                c, pixel_radix
            ),
            Error::NoImageInFile => write!(f, "No image in given file"),
            Error::DigitCountNotMatchImageDimension(count, width, height) => write!(
                f,
                "Given {} digits, but image is {} x {} which can't divide the count exactly",
                count, width, height
            ),
            Error::PixelValueExceedLimit(v, l) => write!(
                f,
                "Given pixel value {} that exceeds pixel value limit {}",
                v, l
            ),
            Error::InvalidCharacterInMap(r_ind, c_ind, c) => write!(
                f,
                "Invalid character({}) found in given map, at position(x = {}, y = {})",
                c, c_ind, r_ind
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(ioe) => Some(ioe),
            _ => None,
        }
    }
}

#[derive(Debug, Parser)]
pub struct CliArgs {
    pub input_path: PathBuf,
}

/// Logs go to stderr, stdout only carries the answer.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
