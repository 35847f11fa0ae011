use std::ops::Range;

use log::{debug, info};
use rayon::prelude::*;

use crate::Error;

use super::{com::evaluate, patch};

pub const NOUN_VERB_RANGE: Range<i64> = 0..100;

/// Runs a private copy of `code` with given noun and verb patched in.
pub fn run_with(code: &[i64], noun: i64, verb: i64) -> Result<i64, Error> {
    let mut image = code.to_vec();
    patch(&mut image, noun, verb)?;
    evaluate(&mut image)
}

/// Searches every noun and verb in `range` for the pair making `code` output `target`.
///
/// The puzzle input is assumed to have exactly one such pair, so finding none or more
/// than one is reported as an error. Any failed run aborts the whole search.
pub fn find_noun_verb(code: &[i64], target: i64, range: Range<i64>) -> Result<(i64, i64), Error> {
    let verbs = range.clone();
    let mut matches = range
        .into_par_iter()
        .flat_map(|noun| verbs.clone().into_par_iter().map(move |verb| (noun, verb)))
        .map(|(noun, verb)| {
            run_with(code, noun, verb).map(|output| (output == target).then_some((noun, verb)))
        })
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>, Error>>()?;
    matches.sort_unstable();
    debug!("Found {} pairs producing {}: {:?}.", matches.len(), target, matches);

    match matches.len() {
        0 => Err(Error::NoSolution(target)),
        1 => {
            let (noun, verb) = matches[0];
            info!("Noun {} and verb {} produce {}.", noun, verb, target);
            Ok((noun, verb))
        }
        _ => Err(Error::AmbiguousSolution(target, matches)),
    }
}

pub fn answer(noun: i64, verb: i64) -> i64 {
    100 * noun + verb
}

#[cfg(test)]
fn linear_code(factor: i64, offset: i64) -> Vec<i64> {
    // code[0] = noun * factor + verb + offset, padded so any noun or verb below 100
    // is a valid address for the first instruction.
    let mut code = vec![
        1, 0, 0, 3, // scratch
        2, 1, 20, 0, // code[0] = noun * factor
        1, 0, 2, 0, // code[0] += verb
        1, 0, 21, 0, // code[0] += offset
        99, 0, 0, 0, factor, offset,
    ];
    code.resize(110, 0);
    code
}

#[test]
fn test_run_with_leaves_input_untouched() {
    let code = linear_code(1000, 500);
    assert_eq!(run_with(&code, 12, 2).unwrap(), 12502);
    assert_eq!(code[0], 1);
    assert_eq!(code[1], 0);
}

#[test]
fn test_find_noun_verb_unique() {
    let code = linear_code(1000, 500);
    let (noun, verb) = find_noun_verb(&code, 42517, NOUN_VERB_RANGE).unwrap();
    assert_eq!((noun, verb), (42, 17));
    assert_eq!(answer(noun, verb), 4217);
}

#[test]
fn test_find_noun_verb_none() {
    let code = linear_code(1000, 500);
    assert!(matches!(
        find_noun_verb(&code, 7, NOUN_VERB_RANGE),
        Err(Error::NoSolution(7))
    ));
}

#[test]
fn test_find_noun_verb_ambiguous() {
    // With factor 1, every pair with noun + verb = 10 matches.
    let code = linear_code(1, 0);
    match find_noun_verb(&code, 10, 0..11) {
        Err(Error::AmbiguousSolution(target, pairs)) => {
            assert_eq!(target, 10);
            assert_eq!(pairs, (0..=10).map(|n| (n, 10 - n)).collect::<Vec<_>>());
        }
        other => panic!("Expect ambiguous solution error, get {:?}", other),
    }
}

#[test]
fn test_find_noun_verb_propagates_failure() {
    // Nouns and verbs past the end of this short code are invalid addresses.
    let code = vec![1, 0, 0, 3, 99];
    assert!(matches!(
        find_noun_verb(&code, 2, 0..10),
        Err(Error::InvalidAddress { .. })
    ));
}
