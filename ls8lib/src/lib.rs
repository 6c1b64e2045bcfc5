use std::fmt;
use std::mem;

use static_assertions::{const_assert, const_assert_eq};

pub mod errors;
pub mod exec;
pub mod loader;


pub type Address = usize;

/// Size of the emulated memory, shared by program storage, data and the stack.
pub const MEMORY_SIZE: usize = 256;
/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;
/// Index of the register reserved for the stack pointer.
pub const SP: usize = 7;
/// Initial stack pointer. The stack occupies the top of the address space and
/// grows toward lower addresses.
pub const STACK_BASE: u8 = 0xF4;
pub const INSTRUCTION_SIZE: usize = 1;
/// No instruction takes more than two operand bytes.
pub const MAX_OPERANDS: usize = 2;

const_assert!(SP < REGISTER_COUNT);
const_assert!((STACK_BASE as usize) < MEMORY_SIZE);


/// Operand count encoded in the top two bits of an opcode byte.
///
/// This is a structural property of the instruction encoding, so the decode
/// step never needs a per-instruction table.
#[inline]
pub const fn operand_count(opcode: u8) -> usize {
    (opcode >> 6) as usize
}


macro_rules! declare_instructions {
    ($($name:ident $mnemonic:ident = $opcode:literal),+ $(,)?) => {

/// LS-8 instructions. Each instruction is represented by one byte whose top
/// two bits encode how many operand bytes follow it in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ByteCodes {
    $($name = $opcode),+
}

impl ByteCodes {

    /// Look up the instruction for an opcode byte. Bytes with no dispatch
    /// entry yield `None` and must be reported as a fatal error by the caller.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            $($opcode => Some(Self::$name),)+
            _ => None
        }
    }

    pub fn from_string(string: &str) -> Option<Self> {
        match string {
            $(stringify!($mnemonic) => Some(Self::$name),)+
            _ => None
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            $(Self::$name => stringify!($mnemonic)),+
        }
    }

}

    };
}

declare_instructions! {

    Ldi LDI = 0b1000_0010,
    Prn PRN = 0b0100_0111,
    Hlt HLT = 0b0000_0001,
    Add ADD = 0b1010_0000,
    Mul MUL = 0b1010_0010,
    Push PUSH = 0b0100_0101,
    Pop POP = 0b0100_0110,

}

const_assert_eq!(mem::size_of::<ByteCodes>(), INSTRUCTION_SIZE);

impl fmt::Display for ByteCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
