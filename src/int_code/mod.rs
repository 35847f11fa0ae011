pub mod com;
pub mod inst;
pub mod search;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::Error;

pub fn read_int_code<P>(path: P) -> Result<Vec<i64>, Error>
where
    P: AsRef<Path>,
{
    let code_file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(code_file);

    reader.lines().next().map_or(Err(Error::EmptyError), |res| {
        res.map_err(Error::IOError).and_then(|s| parse_int_code(&s))
    })
}

pub fn parse_int_code(s: &str) -> Result<Vec<i64>, Error> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::EmptyError);
    }

    s.split(',')
        .map(|s| str::parse::<i64>(s.trim()).map_err(|_| Error::ParseIntError(s.to_string())))
        .collect::<Result<Vec<_>, Error>>()
}

/// Writes noun into address 1 and verb into address 2.
pub fn patch(code: &mut [i64], noun: i64, verb: i64) -> Result<(), Error> {
    match code.get_mut(1..3) {
        Some(params) => {
            params[0] = noun;
            params[1] = verb;
            Ok(())
        }
        None => Err(Error::PatchOutOfRange(code.len())),
    }
}

#[test]
fn test_parse_int_code() {
    assert_eq!(parse_int_code("1,0,0,0,99\n").unwrap(), vec![1, 0, 0, 0, 99]);
    assert_eq!(parse_int_code(" 2, 3,0 ,3,99").unwrap(), vec![2, 3, 0, 3, 99]);
    assert_eq!(parse_int_code("-1,5").unwrap(), vec![-1, 5]);
    assert!(matches!(parse_int_code(""), Err(Error::EmptyError)));
    assert!(matches!(parse_int_code("1,x,3"), Err(Error::ParseIntError(s)) if s == "x"));
}

#[test]
fn test_patch() {
    let mut code = vec![1, 0, 0, 0, 99];
    patch(&mut code, 12, 2).unwrap();
    assert_eq!(code, vec![1, 12, 2, 0, 99]);

    let mut short_code = vec![99, 0];
    assert!(matches!(
        patch(&mut short_code, 1, 1),
        Err(Error::PatchOutOfRange(2))
    ));
}

#[test]
fn test_read_int_code() {
    let code = read_int_code("tests/inputs/day2.txt").unwrap();
    assert_eq!(code.len(), 110);
    assert_eq!(&code[..5], &[1, 0, 0, 3, 2]);

    assert!(matches!(
        read_int_code("tests/inputs/day2_empty.txt"),
        Err(Error::EmptyError)
    ));
}
