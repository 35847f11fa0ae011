use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::Error;

pub fn read_masses<P>(file_path: P) -> Result<Vec<u32>, Error>
where
    P: AsRef<Path>,
{
    let file = File::open(file_path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .filter_map(|l| match l {
            Ok(s) if s.trim().is_empty() => None,
            other => Some(other),
        })
        .map(|l| {
            l.map_err(Error::IOError).and_then(|s| {
                s.trim()
                    .parse::<u32>()
                    .map_err(|_e| Error::ParseIntError(s.to_string()))
            })
        })
        .collect::<Result<Vec<_>, Error>>()
}

/// Fuel required to launch given mass, `floor(mass / 3) - 2`.
pub fn calculate_fuel(mass: i64) -> i64 {
    mass.div_euclid(3) - 2
}

/// Adds the fuel needed to carry the given fuel, until the extra fuel is zero or negative.
pub fn account_for_fuel_mass(fuel: i64) -> i64 {
    let mut total = 0;
    let mut current = fuel;
    while current > 0 {
        total += current;
        current = calculate_fuel(current);
    }

    total
}

pub fn total_fuel(masses: &[u32]) -> i64 {
    masses.iter().map(|&m| calculate_fuel(i64::from(m))).sum()
}

pub fn total_fuel_with_fuel_mass(masses: &[u32]) -> i64 {
    masses
        .iter()
        .map(|&m| account_for_fuel_mass(calculate_fuel(i64::from(m))))
        .sum()
}

#[test]
fn test_calculate_fuel_sample_mass() {
    assert_eq!(calculate_fuel(12), 2);
    assert_eq!(calculate_fuel(14), 2);
    assert_eq!(calculate_fuel(1969), 654);
    assert_eq!(calculate_fuel(100756), 33583);
}

#[test]
fn test_calculate_fuel_matches_floor_division() {
    for m in 0..1000i64 {
        assert_eq!(calculate_fuel(m), m / 3 - 2, "mass {}", m);
    }
}

#[test]
fn test_account_for_fuel_mass_sample_mass() {
    assert_eq!(account_for_fuel_mass(calculate_fuel(14)), 2);
    assert_eq!(account_for_fuel_mass(calculate_fuel(1969)), 966);
    assert_eq!(account_for_fuel_mass(calculate_fuel(100756)), 50346);
}

#[test]
fn test_account_for_fuel_mass_non_positive_fuel() {
    assert_eq!(account_for_fuel_mass(0), 0);
    assert_eq!(account_for_fuel_mass(-2), 0);
    for m in 0..=8 {
        assert_eq!(account_for_fuel_mass(calculate_fuel(m)), 0, "mass {}", m);
    }
}

#[test]
fn test_total_fuel() {
    let masses = [12, 14, 1969, 100756];
    assert_eq!(total_fuel(&masses), 2 + 2 + 654 + 33583);
    assert_eq!(total_fuel_with_fuel_mass(&masses), 2 + 2 + 966 + 50346);
    assert_eq!(total_fuel(&[]), 0);
}

#[test]
fn test_read_masses_skips_blank_lines() {
    let masses = read_masses("tests/inputs/day1_blank_lines.txt").unwrap();
    assert_eq!(masses, vec![12, 14]);

    assert!(matches!(
        read_masses("tests/inputs/day1_bad.txt"),
        Err(Error::ParseIntError(s)) if s == "abc"
    ));
    assert!(matches!(
        read_masses("tests/inputs/no_such_file.txt"),
        Err(Error::IOError(_))
    ));
}
