//! Fetch-decode-execute loop for all 19 opcodes.
//!
//! All arithmetic is signed 32-bit with wrap-around on overflow; `shr` is arithmetic,
//! `shl` is logical. `PC` is advanced before an instruction's semantics take effect, so a
//! PC-relative branch lands at `old_pc + 1 + operand`, matching the assembler's branch
//! encoding `target - (source_address + 1)`.

use thiserror::Error;

use super::memory::{Memory, MemoryError};
use super::registers::Registers;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    #[error("PC out of bounds ({0})")]
    PcOutOfBounds(i32),
    #[error("unknown opcode {opcode} at address {address}")]
    UnknownOpcode { opcode: i8, address: i32 },
    #[error("memory access trapped: {0}")]
    Memory(#[from] MemoryError),
}

/// The virtual machine: registers, memory, and halted flag.
pub struct Vm {
    pub regs: Registers,
    pub memory: Memory,
    pub halted: bool,
}

impl Vm {
    pub fn new() -> Self {
        Self { regs: Registers::new(), memory: Memory::new(), halted: false }
    }

    pub fn with_memory(memory: Memory) -> Self {
        Self { regs: Registers::new(), memory, halted: false }
    }

    /// Run from address 0 until halted or trapped.
    pub fn run(&mut self) -> Result<(), CpuError> {
        self.regs.pc = 0;
        self.halted = false;
        while !self.halted {
            self.step()?;
        }
        Ok(())
    }

    /// Execute a single instruction: fetch, advance PC, decode, dispatch.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let pc = self.regs.pc;
        if pc < 0 || pc as i64 >= self.memory.len() as i64 {
            return Err(CpuError::PcOutOfBounds(pc));
        }
        let word = self.memory.read(pc)?;
        let old_pc = pc;
        self.regs.pc = pc.wrapping_add(1);

        let opcode = (word & 0xFF) as u8 as i8;
        let operand = word >> 8; // arithmetic (sign-extending) shift

        self.dispatch(opcode, operand, old_pc)
    }

    fn dispatch(&mut self, opcode: i8, operand: i32, old_pc: i32) -> Result<(), CpuError> {
        let r = &mut self.regs;
        match opcode {
            0 => {
                // ldc
                r.b = r.a;
                r.a = operand;
            }
            1 => {
                // adc
                r.a = r.a.wrapping_add(operand);
            }
            2 => {
                // ldl
                let value = self.memory.read(r.sp.wrapping_add(operand))?;
                r.b = r.a;
                r.a = value;
            }
            3 => {
                // stl
                self.memory.write(r.sp.wrapping_add(operand), r.a)?;
                r.a = r.b;
            }
            4 => {
                // ldnl
                r.a = self.memory.read(r.a.wrapping_add(operand))?;
            }
            5 => {
                // stnl
                self.memory.write(r.a.wrapping_add(operand), r.b)?;
            }
            6 => r.a = r.b.wrapping_add(r.a),  // add
            7 => r.a = r.b.wrapping_sub(r.a),  // sub
            8 => r.a = (r.b as u32).wrapping_shl(r.a as u32) as i32, // shl (logical)
            9 => r.a = r.b.wrapping_shr(r.a as u32),                 // shr (arithmetic)
            10 => r.sp = r.sp.wrapping_add(operand), // adj
            11 => {
                // a2sp
                r.sp = r.a;
                r.a = r.b;
            }
            12 => {
                // sp2a
                r.b = r.a;
                r.a = r.sp;
            }
            13 => {
                // call
                r.b = r.a;
                r.a = r.pc;
                r.pc = r.pc.wrapping_add(operand);
            }
            14 => {
                // return
                r.pc = r.a;
                r.a = r.b;
            }
            15 => {
                // brz
                if r.a == 0 {
                    r.pc = r.pc.wrapping_add(operand);
                }
            }
            16 => {
                // brlz
                if r.a < 0 {
                    r.pc = r.pc.wrapping_add(operand);
                }
            }
            17 => r.pc = r.pc.wrapping_add(operand), // br
            18 => self.halted = true,                // HALT
            _ => return Err(CpuError::UnknownOpcode { opcode, address: old_pc }),
        }
        Ok(())
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(operand: i32, opcode: i8) -> i32 {
        (operand << 8) | (opcode as i32 & 0xFF)
    }

    #[test]
    fn halt_stops_the_loop() {
        let mut vm = Vm::new();
        vm.memory.load(&[word(0, 18)]);
        vm.run().unwrap();
        assert!(vm.halted);
        assert_eq!(vm.regs.pc, 1);
    }

    #[test]
    fn ldc_and_adc() {
        let mut vm = Vm::new();
        vm.memory.load(&[word(10, 0), word(-3, 1), word(0, 18)]);
        vm.run().unwrap();
        assert_eq!(vm.regs.a, 7);
    }

    #[test]
    fn call_and_return() {
        let mut vm = Vm::new();
        vm.regs.a = 5;
        // 0: call +1 (to addr 2)   1: HALT   2: return
        vm.memory.load(&[word(1, 13), word(0, 18), word(0, 14)]);
        vm.run().unwrap();
        // call stashes the caller's a in b; return restores it, so a comes back as 5.
        assert_eq!(vm.regs.a, 5);
        assert!(vm.halted);
        assert_eq!(vm.regs.pc, 2);
    }

    #[test]
    fn stl_and_ldl_roundtrip_preserves_b() {
        let mut vm = Vm::new();
        vm.regs.b = 99;
        vm.regs.a = 55;
        vm.regs.sp = 100; // well clear of the loaded program
        vm.memory.load(&[word(2, 3), word(2, 2), word(0, 18)]);
        vm.run().unwrap();
        assert_eq!(vm.regs.a, 55);
        assert_eq!(vm.regs.b, 99);
    }

    #[test]
    fn unknown_opcode_traps() {
        let mut vm = Vm::new();
        vm.memory.load(&[word(0, 99)]);
        let err = vm.run().unwrap_err();
        assert_eq!(err, CpuError::UnknownOpcode { opcode: 99, address: 0 });
    }

    #[test]
    fn pc_out_of_bounds_traps() {
        let mut vm = Vm::new();
        vm.regs.pc = -1;
        let err = vm.step().unwrap_err();
        assert_eq!(err, CpuError::PcOutOfBounds(-1));
    }

    #[test]
    fn shr_is_arithmetic() {
        let mut vm = Vm::new();
        vm.regs.b = -8;
        vm.regs.a = 1;
        vm.memory.load(&[word(0, 9), word(0, 18)]);
        vm.run().unwrap();
        assert_eq!(vm.regs.a, -4);
    }
}
