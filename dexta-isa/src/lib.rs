//! Dalvik instruction-set model: the opcode map, encoding formats, and the
//! decoded-instruction value consumed by the translation layer.
//!
//! This crate does not decode bytes. The raw decoder is an external
//! component that produces [`Instruction`] values with operands already
//! extracted and constant-pool references already resolved.

pub mod insn;
pub mod opcode;
pub mod pool;

pub use insn::{Instruction, Operand};
pub use opcode::{Format, Opcode, OpcodeFlags};
pub use pool::FieldRef;
