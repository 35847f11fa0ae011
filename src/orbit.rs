use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

pub type Object = String;

/// Objects linked to the object they orbit, id 0 is the null object above every root.
pub struct OrbitTree {
    orbit_links: Vec<usize>,
    object_map: HashMap<Object, usize>,
    objects: Vec<Object>,
}

impl OrbitTree {
    fn new() -> OrbitTree {
        OrbitTree {
            orbit_links: vec![Self::null_obj_id()],
            object_map: HashMap::new(),
            objects: vec!["".to_string()],
        }
    }

    pub fn obj_count(&self) -> usize {
        self.objects.len() - 1
    }

    pub fn has_obj(&self, obj: &str) -> bool {
        self.object_map.contains_key(obj)
    }

    /// Count of direct and indirect orbits of given object.
    pub fn orbit_count_of(&self, obj: &str) -> Result<usize, Error> {
        self.orbit_path_of(obj).map(|path| path.len())
    }

    pub fn total_orbit_count(&self) -> Result<usize, Error> {
        self.objects
            .iter()
            .skip(1)
            .map(|obj| self.orbit_count_of(obj))
            .sum()
    }

    /// Minimum orbital transfers to move the object `from` orbits onto the object `to` orbits.
    pub fn transfer_count(&self, from: &str, to: &str) -> Result<usize, Error> {
        let from_path = self.orbit_path_of(from)?;
        let to_path = self.orbit_path_of(to)?;
        let to_dists = to_path
            .iter()
            .enumerate()
            .map(|(dist, &id)| (id, dist))
            .collect::<HashMap<_, _>>();

        from_path
            .iter()
            .enumerate()
            .find_map(|(from_dist, id)| to_dists.get(id).map(|to_dist| from_dist + to_dist))
            .ok_or_else(|| Error::NoCommonOrbit(from.to_string(), to.to_string()))
    }

    /// Ids of the objects given object orbits, from the nearest one to its root.
    fn orbit_path_of(&self, obj: &str) -> Result<Vec<usize>, Error> {
        let id = *self
            .object_map
            .get(obj)
            .ok_or_else(|| Error::UnknownObject(obj.to_string()))?;
        let mut path = Vec::new();
        let mut cur_id = self.orbit_links[id];
        while cur_id != Self::null_obj_id() {
            if path.len() >= self.obj_count() {
                return Err(Error::OrbitCycle(obj.to_string()));
            }

            path.push(cur_id);
            cur_id = self.orbit_links[cur_id];
        }

        Ok(path)
    }

    fn add_orbit(&mut self, orbit: Orbit) -> Result<(), Error> {
        let orbited_id = self.add_obj(orbit.orbited);
        let orbiter_id = self.add_obj(orbit.orbiter);

        if self.orbit_links[orbiter_id] != Self::null_obj_id() {
            Err(Error::RewriteOrbitLink(
                self.objects[orbiter_id].clone(),
                self.objects[self.orbit_links[orbiter_id]].clone(),
                self.objects[orbited_id].clone(),
            ))
        } else {
            self.orbit_links[orbiter_id] = orbited_id;

            Ok(())
        }
    }

    fn add_obj(&mut self, obj: Object) -> usize {
        if let Some(&id) = self.object_map.get(&obj) {
            return id;
        }

        let id = self.objects.len();
        self.objects.push(obj.clone());
        self.orbit_links.push(Self::null_obj_id());
        self.object_map.insert(obj, id);

        id
    }

    fn null_obj_id() -> usize {
        0
    }
}

impl FromStr for OrbitTree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut orbit_tree = OrbitTree::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            orbit_tree.add_orbit(Orbit::from_str(line)?)?;
        }

        Ok(orbit_tree)
    }
}

struct Orbit {
    orbited: Object,
    orbiter: Object,
}

impl FromStr for Orbit {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        static ORBIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\)(\w+)$").unwrap());

        let caps = ORBIT_REGEX
            .captures(value)
            .ok_or(Error::InvalidOrbitSpec(value.to_string()))?;
        Ok(Orbit {
            orbited: caps[1].to_string(),
            orbiter: caps[2].to_string(),
        })
    }
}

pub fn read_orbits<P>(path: P) -> Result<OrbitTree, Error>
where
    P: AsRef<Path>,
{
    let orbit_file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(orbit_file);
    let mut orbit_tree = OrbitTree::new();
    for line in reader.lines() {
        let line = line.map_err(Error::IOError)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        orbit_tree.add_orbit(Orbit::from_str(line)?)?;
    }

    Ok(orbit_tree)
}

#[cfg(test)]
const SAMPLE_ORBITS: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L\n";

#[test]
fn test_total_orbit_count() {
    let orbit_tree = OrbitTree::from_str(SAMPLE_ORBITS).unwrap();
    assert_eq!(orbit_tree.obj_count(), 12);
    assert_eq!(orbit_tree.orbit_count_of("COM").unwrap(), 0);
    assert_eq!(orbit_tree.orbit_count_of("D").unwrap(), 3);
    assert_eq!(orbit_tree.orbit_count_of("L").unwrap(), 7);
    assert_eq!(orbit_tree.total_orbit_count().unwrap(), 42);
}

#[test]
fn test_transfer_count() {
    let orbits = format!("{}K)YOU\nI)SAN\n", SAMPLE_ORBITS);
    let orbit_tree = OrbitTree::from_str(&orbits).unwrap();
    assert_eq!(orbit_tree.transfer_count("YOU", "SAN").unwrap(), 4);
    assert_eq!(orbit_tree.transfer_count("SAN", "YOU").unwrap(), 4);
    // Objects orbiting the same object need no transfer.
    assert_eq!(orbit_tree.transfer_count("C", "G").unwrap(), 0);
}

#[test]
fn test_transfer_count_errors() {
    let orbit_tree = OrbitTree::from_str("COM)A\nA)YOU\nROOT)SAN\n").unwrap();
    assert!(matches!(
        orbit_tree.transfer_count("YOU", "SAN"),
        Err(Error::NoCommonOrbit(_, _))
    ));
    assert!(matches!(
        orbit_tree.transfer_count("YOU", "NOBODY"),
        Err(Error::UnknownObject(o)) if o == "NOBODY"
    ));
}

#[test]
fn test_invalid_orbits() {
    assert!(matches!(
        OrbitTree::from_str("COM)B\nB-C\n"),
        Err(Error::InvalidOrbitSpec(sp)) if sp == "B-C"
    ));
    assert!(matches!(
        OrbitTree::from_str("COM)B\nA)B\n"),
        Err(Error::RewriteOrbitLink(..))
    ));

    let orbit_tree = OrbitTree::from_str("A)B\nB)A\n").unwrap();
    assert!(matches!(
        orbit_tree.orbit_count_of("A"),
        Err(Error::OrbitCycle(_))
    ));
}
