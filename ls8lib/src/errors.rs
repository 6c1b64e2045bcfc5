use std::io;

use thiserror::Error;

use crate::{Address, MEMORY_SIZE};


/// Fatal conditions raised while executing a loaded program.
///
/// Every variant is unrecoverable and ends the run.
#[derive(Debug, Error)]
pub enum ExecError {

    #[error("unsupported instruction {opcode:#010b} at address {address:#04X}")]
    UnsupportedInstruction { opcode: u8, address: Address },

    #[error("memory access out of range: address {address:#06X}")]
    MemoryOutOfRange { address: Address },

    #[error("register index out of range: R{index}")]
    RegisterOutOfRange { index: u8 },

    #[error("could not write to the output sink")]
    Output(#[source] io::Error),

}


/// Conditions raised while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("program image of {size} bytes does not fit in {max} bytes of memory", max = MEMORY_SIZE)]
    ProgramTooLarge { size: usize },

}
