use int_enum::IntEnum;
use log::{debug, trace};

use crate::Error;

use super::inst::{decode, Instruction};

/// Runs `code` in place until it halts, and returns the value left at address 0.
pub fn evaluate(code: &mut [i64]) -> Result<i64, Error> {
    let mut inst_p = 0;
    let mut step_count = 0usize;
    while inst_p < code.len() {
        let (inst, next_inst_p) = decode(code, inst_p)?;
        trace!(
            "Step #{}: {:?}({}) {:?} @ {}.",
            step_count,
            inst.opcode(),
            inst.opcode().int_value(),
            inst,
            inst_p
        );
        if inst == Instruction::Halt {
            debug!("Program halts after {} steps.", step_count);
            return Ok(code[0]);
        }

        inst.execute(code, inst_p)?;
        inst_p = next_inst_p;
        step_count += 1;
    }

    Err(Error::MissingHalt(code.len()))
}

#[test]
fn test_evaluate_add_self() {
    let mut code = vec![1, 0, 0, 0, 99];
    assert_eq!(evaluate(&mut code).unwrap(), 2);
    assert_eq!(code, vec![2, 0, 0, 0, 99]);
}

#[test]
fn test_evaluate_multiply_in_place() {
    let mut code = vec![2, 3, 0, 3, 99];
    assert_eq!(evaluate(&mut code).unwrap(), 2);
    assert_eq!(code, vec![2, 3, 0, 6, 99]);

    let mut code = vec![2, 4, 4, 5, 99, 0];
    evaluate(&mut code).unwrap();
    assert_eq!(code, vec![2, 4, 4, 5, 99, 9801]);
}

#[test]
fn test_evaluate_self_modifying() {
    let mut code = vec![1, 1, 1, 4, 99, 5, 6, 0, 99];
    assert_eq!(evaluate(&mut code).unwrap(), 30);
    assert_eq!(code, vec![30, 1, 1, 4, 2, 5, 6, 0, 99]);
}

#[test]
fn test_evaluate_sample_program() {
    let mut code = vec![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50];
    assert_eq!(evaluate(&mut code).unwrap(), 3500);
    assert_eq!(code[3], 70);
}

#[test]
fn test_evaluate_missing_halt() {
    let mut code = vec![1, 0, 0, 0];
    assert!(matches!(evaluate(&mut code), Err(Error::MissingHalt(4))));
    // The add still ran before the pointer left the code.
    assert_eq!(code[0], 2);

    assert!(matches!(evaluate(&mut []), Err(Error::MissingHalt(0))));
    assert!(matches!(
        evaluate(&mut [1, 0, 0, 0, 1, 0, 0]),
        Err(Error::MissingHalt(7))
    ));
}

#[test]
fn test_evaluate_unknown_opcode() {
    let mut code = vec![7, 0, 0, 0, 99];
    assert!(matches!(
        evaluate(&mut code),
        Err(Error::UnknownOpcode { opcode: 7, ip: 0 })
    ));

    let mut code = vec![1, 0, 0, 0, 42, 99];
    assert!(matches!(
        evaluate(&mut code),
        Err(Error::UnknownOpcode { opcode: 42, ip: 4 })
    ));
}

#[test]
fn test_evaluate_halt_stops_before_garbage() {
    let mut code = vec![99, 7, 7, 7];
    assert_eq!(evaluate(&mut code).unwrap(), 99);
}

#[test]
fn test_evaluate_overflow() {
    let mut code = vec![2, 0, 5, 0, 99, i64::MAX];
    assert!(matches!(
        evaluate(&mut code),
        Err(Error::ArithmeticOverflow(0))
    ));
}
