//! Type-constraint registration toward an external inference solver.
//!
//! The solver itself is a collaborator: translation only pushes one
//! constraint per operand slot (and per assignment target), keyed by the
//! opcode-derived expected category. Registration is active iff a solver is
//! attached to the [`crate::body::MethodBody`].

use dexta_ir::{SlotRef, StmtId, ValueCategory};
use dexta_isa::Opcode;

use crate::error::{Result, TranslateError};

/// External type-inference hook.
///
/// Calls arrive synchronously, in instruction order, never in parallel from
/// a single method's translation.
pub trait TypeSolver {
    /// Constrain one operand slot to an expected value category.
    fn constrain(&mut self, slot: SlotRef, category: ValueCategory);

    /// Capture an assignment whose target type follows the field accessed
    /// by the given opcode variant.
    fn capture_assignment(&mut self, stmt: StmtId, opcode: Opcode);

    /// Capture a slot known to hold an object reference.
    fn capture_reference(&mut self, slot: SlotRef);
}

/// The binary-opcode family a constraint lookup claims to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinopFamily {
    /// Three-register `binop` (0x90-0xaf).
    ThreeAddress,
    /// Two-register `binop/2addr` (0xb0-0xcf).
    TwoAddress,
}

impl BinopFamily {
    const fn base(self) -> u8 {
        match self {
            BinopFamily::ThreeAddress => 0x90,
            BinopFamily::TwoAddress => 0xb0,
        }
    }
}

const FAMILY_LEN: usize = 0x20;

use ValueCategory::{Double, Float, Int, Long};

/// Expected category of the first source operand, indexed by the opcode's
/// offset within its family. Dense over the whole range: both families lay
/// out the same 32 operations (11 int, 11 long, 5 float, 5 double).
#[rustfmt::skip]
const OPERAND1: [ValueCategory; FAMILY_LEN] = [
    Int, Int, Int, Int, Int, Int, Int, Int, Int, Int, Int,
    Long, Long, Long, Long, Long, Long, Long, Long, Long, Long, Long,
    Float, Float, Float, Float, Float,
    Double, Double, Double, Double, Double,
];

/// Expected category of the second source operand. Differs from
/// [`OPERAND1`] only for the long shifts, whose shift distance is an int.
#[rustfmt::skip]
const OPERAND2: [ValueCategory; FAMILY_LEN] = [
    Int, Int, Int, Int, Int, Int, Int, Int, Int, Int, Int,
    Long, Long, Long, Long, Long, Long, Long, Long, Int, Int, Int,
    Float, Float, Float, Float, Float,
    Double, Double, Double, Double, Double,
];

/// Expected category of the assignment target.
#[rustfmt::skip]
const RESULT: [ValueCategory; FAMILY_LEN] = [
    Int, Int, Int, Int, Int, Int, Int, Int, Int, Int, Int,
    Long, Long, Long, Long, Long, Long, Long, Long, Long, Long, Long,
    Float, Float, Float, Float, Float,
    Double, Double, Double, Double, Double,
];

/// Expected categories (first operand, second operand, target) for a binary
/// opcode, checked against the family's claimed range.
///
/// An opcode outside the range is an internal-consistency failure
/// ([`TranslateError::OpcodeRangeViolation`]): the dispatch that routed it
/// here and these tables have drifted out of sync.
pub fn binop_categories(
    opcode: Opcode,
    family: BinopFamily,
) -> Result<(ValueCategory, ValueCategory, ValueCategory)> {
    let start = family.base();
    let end = start + (FAMILY_LEN as u8 - 1);
    let value = opcode.value();
    if value < start || value > end {
        return Err(TranslateError::OpcodeRangeViolation { opcode, start, end });
    }
    let i = (value - start) as usize;
    Ok((OPERAND1[i], OPERAND2[i], RESULT[i]))
}
