use dexta_isa::Opcode;

use crate::operand::OperandShape;

/// Errors raised while translating one instruction.
///
/// All of these abort translation of the current method; none is
/// recoverable per instruction, and the host must discard or flag the whole
/// method.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The decoded instruction's operands do not match the shape its opcode
    /// class requires. Signals decoder/translator disagreement, not bad
    /// input.
    #[error("malformed {}: expected {}, got {}", .opcode, .expected, .actual)]
    MalformedInstruction {
        opcode: Opcode,
        expected: OperandShape,
        actual: String,
    },

    /// Dispatch reached an opcode with no registered translation.
    #[error("no translation registered for opcode {} (value {:#04x})", .0, .0.value())]
    UnsupportedOpcode(Opcode),

    /// The type-constraint tables and the opcode dispatch disagree on
    /// coverage. Internal-consistency class: the tables are dense over the
    /// range they claim, so reaching this means dispatch and table drifted
    /// out of sync.
    #[error(
        "opcode {} (value {:#04x}) outside the claimed constraint range {:#04x}..={:#04x}",
        .opcode, .opcode.value(), .start, .end
    )]
    OpcodeRangeViolation { opcode: Opcode, start: u8, end: u8 },

    /// A register index at or beyond the method's fixed register-file size.
    #[error("register v{register} out of range for a {count}-register method")]
    RegisterOutOfRange { register: u16, count: u16 },
}

pub type Result<T> = std::result::Result<T, TranslateError>;
