use crate::opcode::Opcode;
use crate::pool::FieldRef;

/// A decoded operand of a bytecode instruction.
///
/// Constant-pool indices are resolved by the decoder before translation, so
/// reference operands carry the referenced item itself rather than an index.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Virtual register index.
    Reg(u16),
    /// Signed literal value.
    Lit(i64),
    /// Resolved field reference.
    Field(FieldRef),
    /// Resolved type descriptor.
    Type(String),
    /// Resolved string constant.
    Str(String),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Reg(r) => write!(f, "v{r}"),
            Operand::Lit(v) => write!(f, "#{v}"),
            Operand::Field(fr) => write!(f, "{fr}"),
            Operand::Type(t) => f.write_str(t),
            Operand::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A single decoded bytecode instruction.
///
/// Immutable once decoded; produced by an external decoder and consumed by
/// the translation layer one instruction at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Code address (offset in 16-bit code units from the method start).
    pub offset: u32,
    /// The opcode.
    pub opcode: Opcode,
    /// Decoded operands in encoding order.
    pub operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(offset: u32, opcode: Opcode, operands: Vec<Operand>) -> Self {
        Instruction {
            offset,
            opcode,
            operands,
        }
    }

    /// Encoded size in 16-bit code units, from the opcode's format.
    pub fn code_units(&self) -> usize {
        self.opcode.format().code_units()
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.opcode.mnemonic())?;
        for (i, op) in self.operands.iter().enumerate() {
            if i == 0 {
                write!(f, " {op}")?;
            } else {
                write!(f, ", {op}")?;
            }
        }
        Ok(())
    }
}
