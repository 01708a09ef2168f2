//! Operand adapter: checks that a decoded instruction carries the operand
//! shape its syntactic class requires and extracts the fields the
//! translators consume. No side effects.

use dexta_isa::{FieldRef, Instruction, Operand};

use crate::error::{Result, TranslateError};

/// Operand shape of an instruction's syntactic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandShape {
    /// One register, no reference (11x).
    SingleRegister,
    /// Two registers, no reference (12x).
    TwoRegisters,
    /// Three registers (23x).
    ThreeRegisters,
    /// One register plus a field reference (21c field access).
    RegisterWithField,
}

impl std::fmt::Display for OperandShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OperandShape::SingleRegister => "one register",
            OperandShape::TwoRegisters => "two registers",
            OperandShape::ThreeRegisters => "three registers",
            OperandShape::RegisterWithField => "a register and a field reference",
        };
        f.write_str(s)
    }
}

fn describe(operands: &[Operand]) -> String {
    if operands.is_empty() {
        return "no operands".to_string();
    }
    let parts: Vec<&str> = operands
        .iter()
        .map(|op| match op {
            Operand::Reg(_) => "register",
            Operand::Lit(_) => "literal",
            Operand::Field(_) => "field",
            Operand::Type(_) => "type",
            Operand::Str(_) => "string",
        })
        .collect();
    parts.join(", ")
}

fn mismatch(insn: &Instruction, expected: OperandShape) -> TranslateError {
    TranslateError::MalformedInstruction {
        opcode: insn.opcode,
        expected,
        actual: describe(&insn.operands),
    }
}

/// Register of a single-register instruction.
pub fn single_register(insn: &Instruction) -> Result<u16> {
    match insn.operands.as_slice() {
        [Operand::Reg(a)] => Ok(*a),
        _ => Err(mismatch(insn, OperandShape::SingleRegister)),
    }
}

/// Destination/source registers of a two-register instruction.
pub fn two_registers(insn: &Instruction) -> Result<(u16, u16)> {
    match insn.operands.as_slice() {
        [Operand::Reg(a), Operand::Reg(b)] => Ok((*a, *b)),
        _ => Err(mismatch(insn, OperandShape::TwoRegisters)),
    }
}

/// Destination and two source registers of a three-register instruction.
pub fn three_registers(insn: &Instruction) -> Result<(u16, u16, u16)> {
    match insn.operands.as_slice() {
        [Operand::Reg(a), Operand::Reg(b), Operand::Reg(c)] => Ok((*a, *b, *c)),
        _ => Err(mismatch(insn, OperandShape::ThreeRegisters)),
    }
}

/// Register and referenced field of a field-access instruction.
pub fn register_and_field(insn: &Instruction) -> Result<(u16, &FieldRef)> {
    match insn.operands.as_slice() {
        [Operand::Reg(a), Operand::Field(fr)] => Ok((*a, fr)),
        _ => Err(mismatch(insn, OperandShape::RegisterWithField)),
    }
}
