use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    pub x: usize,
    pub y: usize,
}

pub struct AsteroidMap {
    asteroids: Vec<Asteroid>,
}

impl<S: AsRef<str>> TryFrom<&[S]> for AsteroidMap {
    type Error = Error;

    fn try_from(value: &[S]) -> Result<Self, Self::Error> {
        let mut asteroids = Vec::new();
        for (r_ind, s) in value.iter().enumerate() {
            for (c_ind, c) in s.as_ref().trim_end().chars().enumerate() {
                match c {
                    '#' => asteroids.push(Asteroid { x: c_ind, y: r_ind }),
                    '.' => (),
                    _ => return Err(Error::InvalidCharacterInMap(r_ind, c_ind, c)),
                }
            }
        }

        Ok(Self { asteroids })
    }
}

impl AsteroidMap {
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    pub fn asteroid(&self, ind: usize) -> Option<&Asteroid> {
        self.asteroids.get(ind)
    }

    /// Count of other asteroids in direct line of sight from asteroid at `ind`.
    ///
    /// Asteroids behind the nearest one in the same direction are blocked, so each
    /// distinct reduced direction counts once.
    pub fn detect_count(&self, ind: usize) -> Option<usize> {
        let station = self.asteroids.get(ind)?;
        let directions = self
            .asteroids
            .iter()
            .filter(|&a| a != station)
            .map(|a| {
                let offset_x = a.x as i64 - station.x as i64;
                let offset_y = a.y as i64 - station.y as i64;
                let offset_gcd = gcd(offset_x, offset_y);
                (offset_x / offset_gcd, offset_y / offset_gcd)
            })
            .collect::<HashSet<_>>();

        Some(directions.len())
    }

    /// Asteroid detecting the most other asteroids, with its detect count.
    pub fn best_location(&self) -> Option<(Asteroid, usize)> {
        (0..self.asteroids.len())
            .filter_map(|ind| self.detect_count(ind).map(|c| (self.asteroids[ind], c)))
            .max_by_key(|(_, c)| *c)
    }
}

pub fn read_map<P>(path: P) -> Result<AsteroidMap, Error>
where
    P: AsRef<Path>,
{
    let input_file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(input_file);
    let lines = reader
        .lines()
        .map(|r| r.map_err(Error::IOError))
        .collect::<Result<Vec<_>, Error>>()?;

    AsteroidMap::try_from(lines.as_slice())
}

fn gcd(n0: i64, n1: i64) -> i64 {
    let (mut a, mut b) = (n0.abs(), n1.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(12, -8), 4);
    assert_eq!(gcd(0, -3), 3);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(5, 3), 1);
}

#[test]
fn test_best_location_small_map() {
    let map = [".#..#", ".....", "#####", "....#", "...##"];
    let asteroid_map = AsteroidMap::try_from(&map[..]).unwrap();
    assert_eq!(asteroid_map.asteroid_count(), 10);
    assert_eq!(asteroid_map.detect_count(0), Some(7));
    assert_eq!(
        asteroid_map.best_location(),
        Some((Asteroid { x: 3, y: 4 }, 8))
    );
}

#[test]
fn test_best_location_larger_map() {
    let map = [
        "......#.#.",
        "#..#.#....",
        "..#######.",
        ".#.#.###..",
        ".#..#.....",
        "..#....#.#",
        "#..#....#.",
        ".##.#..###",
        "##...#..#.",
        ".#....####",
    ];
    let asteroid_map = AsteroidMap::try_from(&map[..]).unwrap();
    assert_eq!(
        asteroid_map.best_location(),
        Some((Asteroid { x: 5, y: 8 }, 33))
    );
}

#[test]
fn test_invalid_map() {
    let map = [".#", "#x"];
    assert!(matches!(
        AsteroidMap::try_from(&map[..]),
        Err(Error::InvalidCharacterInMap(1, 1, 'x'))
    ));

    let empty: [&str; 0] = [];
    let asteroid_map = AsteroidMap::try_from(&empty[..]).unwrap();
    assert_eq!(asteroid_map.best_location(), None);
    assert_eq!(asteroid_map.detect_count(0), None);
}
