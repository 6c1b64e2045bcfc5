use std::io::Write;

use crate::errors::{ExecError, LoadError};
use crate::{
    operand_count, Address, ByteCodes, MAX_OPERANDS, MEMORY_SIZE, REGISTER_COUNT, SP, STACK_BASE,
};


/// Arithmetic operations the ALU can apply between two registers.
#[derive(Debug, Clone, Copy)]
pub enum AluOp {
    Add,
    Mul,
}


/// The LS-8 machine state: program counter, register file and memory.
///
/// All mutation happens through the instruction handlers invoked by `run`,
/// one state change per executed instruction.
pub struct Cpu {
    /// Address of the next instruction to fetch.
    pc: Address,
    registers: [u8; REGISTER_COUNT],
    ram: [u8; MEMORY_SIZE],
    /// Emit one trace line per executed instruction.
    trace: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {

    /// Instantiate a zeroed machine with the stack pointer at its base.
    pub fn new() -> Self {
        let mut registers = [0; REGISTER_COUNT];
        registers[SP] = STACK_BASE;
        Self {
            pc: 0,
            registers,
            ram: [0; MEMORY_SIZE],
            trace: false,
        }
    }


    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }


    /// Copy a program image into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge { size: program.len() });
        }
        self.ram[..program.len()].copy_from_slice(program);
        Ok(())
    }


    pub fn pc(&self) -> Address {
        self.pc
    }


    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.registers
    }


    pub fn ram_read(&self, address: Address) -> Result<u8, ExecError> {
        self.ram
            .get(address)
            .copied()
            .ok_or(ExecError::MemoryOutOfRange { address })
    }


    pub fn ram_write(&mut self, address: Address, value: u8) -> Result<(), ExecError> {
        match self.ram.get_mut(address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ExecError::MemoryOutOfRange { address }),
        }
    }


    pub fn reg_read(&self, index: u8) -> Result<u8, ExecError> {
        self.registers
            .get(index as usize)
            .copied()
            .ok_or(ExecError::RegisterOutOfRange { index })
    }


    pub fn reg_write(&mut self, index: u8, value: u8) -> Result<(), ExecError> {
        match self.registers.get_mut(index as usize) {
            Some(reg) => {
                *reg = value;
                Ok(())
            }
            None => Err(ExecError::RegisterOutOfRange { index }),
        }
    }


    /// Run the fetch-decode-execute loop until HLT.
    ///
    /// PRN and HLT write their notices to `output`.
    pub fn run(&mut self, output: &mut impl Write) -> Result<(), ExecError> {

        loop {

            let opcode = self.ram_read(self.pc)?;

            if self.trace {
                self.print_trace();
            }

            // Resolving the instruction before touching the operands makes an
            // unknown byte fail as "unsupported instruction" even when a
            // mis-decoded arity would have walked past the end of memory.
            let instruction = ByteCodes::from_byte(opcode).ok_or(
                ExecError::UnsupportedInstruction {
                    opcode,
                    address: self.pc,
                },
            )?;

            let mut operands = [0u8; MAX_OPERANDS];
            for (offset, operand) in operands
                .iter_mut()
                .take(operand_count(opcode))
                .enumerate()
            {
                *operand = self.ram_read(self.pc + 1 + offset)?;
            }

            // Each handler advances the program counter itself. The loop
            // performs no implicit advancement.
            match instruction {

                ByteCodes::Ldi => self.ldi(operands[0], operands[1])?,

                ByteCodes::Prn => self.prn(operands[0], output)?,

                ByteCodes::Add => self.binary_op(AluOp::Add, operands[0], operands[1])?,

                ByteCodes::Mul => self.binary_op(AluOp::Mul, operands[0], operands[1])?,

                ByteCodes::Push => self.push(operands[0])?,

                ByteCodes::Pop => self.pop(operands[0])?,

                ByteCodes::Hlt => {
                    self.hlt(output)?;
                    break;
                }

            }
        }

        Ok(())
    }


    /// Print the program counter, the next three memory bytes and all
    /// registers in two-digit hexadecimal. Goes to stderr so it does not mix
    /// with program output.
    fn print_trace(&self) {

        let mut line = format!("TRACE: {:02X} |", self.pc);

        for offset in 0..3 {
            let byte = self.ram.get(self.pc + offset).copied().unwrap_or(0);
            line.push_str(&format!(" {:02X}", byte));
        }

        line.push_str(" |");

        for value in &self.registers {
            line.push_str(&format!(" {:02X}", value));
        }

        eprintln!("{}", line);
    }


    /// Apply an arithmetic operation between two registers, storing the 8-bit
    /// wrapped result in the first.
    fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), ExecError> {
        let a = self.reg_read(reg_a)?;
        let b = self.reg_read(reg_b)?;
        let result = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Mul => a.wrapping_mul(b),
        };
        self.reg_write(reg_a, result)
    }


    fn ldi(&mut self, reg: u8, value: u8) -> Result<(), ExecError> {
        self.reg_write(reg, value)?;
        self.pc += 3;
        Ok(())
    }


    fn prn(&mut self, reg: u8, output: &mut impl Write) -> Result<(), ExecError> {
        let value = self.reg_read(reg)?;
        writeln!(output, "Value: {}", value).map_err(ExecError::Output)?;
        self.pc += 2;
        Ok(())
    }


    fn binary_op(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), ExecError> {
        self.alu(op, reg_a, reg_b)?;
        self.pc += 3;
        Ok(())
    }


    fn push(&mut self, reg: u8) -> Result<(), ExecError> {
        let value = self.reg_read(reg)?;
        let sp = self.registers[SP].wrapping_sub(1);
        self.registers[SP] = sp;
        self.ram_write(sp as Address, value)?;
        self.pc += 2;
        Ok(())
    }


    fn pop(&mut self, reg: u8) -> Result<(), ExecError> {
        let sp = self.registers[SP];
        let value = self.ram_read(sp as Address)?;
        self.reg_write(reg, value)?;
        self.registers[SP] = sp.wrapping_add(1);
        self.pc += 2;
        Ok(())
    }


    fn hlt(&mut self, output: &mut impl Write) -> Result<(), ExecError> {
        self.pc += 1;
        writeln!(output, "Stopping...").map_err(ExecError::Output)?;
        Ok(())
    }

}
