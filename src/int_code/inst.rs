use int_enum::IntEnum;

use crate::Error;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
pub enum Opcode {
    Add = 1,
    Multiply = 2,
    Halt = 99,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Add { lhs: usize, rhs: usize, dest: usize },
    Multiply { lhs: usize, rhs: usize, dest: usize },
    Halt,
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Multiply { .. } => Opcode::Multiply,
            Instruction::Halt => Opcode::Halt,
        }
    }

    pub fn length(&self) -> usize {
        match self {
            Instruction::Add { .. } | Instruction::Multiply { .. } => 4,
            Instruction::Halt => 1,
        }
    }

    /// Runs an arithmetic instruction against `code`, `ip` is only used for error reports.
    /// Halt leaves the code untouched.
    pub fn execute(&self, code: &mut [i64], ip: usize) -> Result<(), Error> {
        let (lhs, rhs, dest, op): (_, _, _, fn(i64, i64) -> Option<i64>) = match *self {
            Instruction::Add { lhs, rhs, dest } => (lhs, rhs, dest, i64::checked_add),
            Instruction::Multiply { lhs, rhs, dest } => (lhs, rhs, dest, i64::checked_mul),
            Instruction::Halt => return Ok(()),
        };

        let value = op(read_code(code, lhs, ip)?, read_code(code, rhs, ip)?)
            .ok_or(Error::ArithmeticOverflow(ip))?;
        write_code(code, dest, ip, value)
    }
}

fn read_code(code: &[i64], address: usize, ip: usize) -> Result<i64, Error> {
    code.get(address).copied().ok_or(Error::InvalidAddress {
        address: address as i64,
        ip,
    })
}

fn write_code(code: &mut [i64], address: usize, ip: usize, value: i64) -> Result<(), Error> {
    code.get_mut(address)
        .ok_or(Error::InvalidAddress {
            address: address as i64,
            ip,
        })
        .map(|n| *n = value)
}

/// Decodes the instruction starting at `ip`, returns it with the pointer of the next instruction.
///
/// All addresses in the returned instruction are checked against the length of `code`.
pub fn decode(code: &[i64], ip: usize) -> Result<(Instruction, usize), Error> {
    let opcode = *code.get(ip).ok_or(Error::MissingHalt(code.len()))?;
    let inst = match parse_opcode(opcode, ip)? {
        Opcode::Halt => Instruction::Halt,
        op => {
            // Trailing instruction cut off by the end of code.
            let params = code
                .get(ip + 1..ip + 4)
                .ok_or(Error::MissingHalt(code.len()))?;
            let lhs = to_address(code, params[0], ip)?;
            let rhs = to_address(code, params[1], ip)?;
            let dest = to_address(code, params[2], ip)?;
            if op == Opcode::Add {
                Instruction::Add { lhs, rhs, dest }
            } else {
                Instruction::Multiply { lhs, rhs, dest }
            }
        }
    };

    Ok((inst, ip + inst.length()))
}

fn parse_opcode(opcode: i64, ip: usize) -> Result<Opcode, Error> {
    u32::try_from(opcode)
        .ok()
        .and_then(|n| Opcode::from_int(n).ok())
        .ok_or(Error::UnknownOpcode { opcode, ip })
}

fn to_address(code: &[i64], param: i64, ip: usize) -> Result<usize, Error> {
    usize::try_from(param)
        .ok()
        .filter(|&address| address < code.len())
        .ok_or(Error::InvalidAddress { address: param, ip })
}

#[test]
fn test_decode_add() {
    let code = [1, 0, 0, 0, 99];
    let (inst, next_ip) = decode(&code, 0).unwrap();
    assert_eq!(
        inst,
        Instruction::Add {
            lhs: 0,
            rhs: 0,
            dest: 0
        }
    );
    assert_eq!(inst.opcode().int_value(), 1);
    assert_eq!(next_ip, 4);

    let (inst, next_ip) = decode(&code, next_ip).unwrap();
    assert_eq!(inst, Instruction::Halt);
    assert_eq!(next_ip, 5);
}

#[test]
fn test_decode_multiply() {
    let code = [2, 3, 0, 3, 99];
    assert_eq!(
        decode(&code, 0).unwrap(),
        (
            Instruction::Multiply {
                lhs: 3,
                rhs: 0,
                dest: 3
            },
            4
        )
    );
}

#[test]
fn test_decode_unknown_opcode() {
    for (code, bad) in [([7, 0, 0, 0, 99], 7), ([-1, 0, 0, 0, 99], -1), ([3, 0, 0, 0, 99], 3)] {
        match decode(&code, 0) {
            Err(Error::UnknownOpcode { opcode, ip }) => {
                assert_eq!(opcode, bad);
                assert_eq!(ip, 0);
            }
            other => panic!("Expect unknown opcode error, get {:?}", other),
        }
    }
}

#[test]
fn test_decode_invalid_address() {
    assert!(matches!(
        decode(&[1, 5, 0, 0, 99], 0),
        Err(Error::InvalidAddress { address: 5, ip: 0 })
    ));
    assert!(matches!(
        decode(&[99, 2, 0, -4, 0, 99], 1),
        Err(Error::InvalidAddress { address: -4, ip: 1 })
    ));
}

#[test]
fn test_decode_truncated_instruction() {
    assert!(matches!(decode(&[1, 0, 0], 0), Err(Error::MissingHalt(3))));
    assert!(matches!(decode(&[99], 1), Err(Error::MissingHalt(1))));
}

#[test]
fn test_execute_rejects_address_out_of_code() {
    let mut code = [1, 0, 0, 0, 99];
    let inst = Instruction::Add {
        lhs: 0,
        rhs: 0,
        dest: 50,
    };
    assert!(matches!(
        inst.execute(&mut code, 0),
        Err(Error::InvalidAddress { address: 50, ip: 0 })
    ));

    let inst = Instruction::Multiply {
        lhs: 7,
        rhs: 0,
        dest: 0,
    };
    assert!(matches!(
        inst.execute(&mut code, 4),
        Err(Error::InvalidAddress { address: 7, ip: 4 })
    ));
    assert_eq!(code, [1, 0, 0, 0, 99]);
}
