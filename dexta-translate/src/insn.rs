//! Per-family instruction translators: expression construction, statement
//! emission, and constraint registration for each covered opcode family.

use dexta_ir::{BinOp, CmpKind, Expr, OperandSlot, SlotRef, StmtId, StmtKind, ValueCategory};
use dexta_isa::{Instruction, Opcode, Operand};

use crate::body::MethodBody;
use crate::error::{Result, TranslateError};
use crate::operand;
use crate::typing::{self, BinopFamily};

/// Translate one decoded instruction, appending its IR statement to `body`.
///
/// Exactly one statement is appended on success; nothing is appended on
/// error. The ranges mirror the opcode map: comparisons at 0x2d-0x31,
/// static gets at 0x60-0x66, binop at 0x90-0xaf, binop/2addr at 0xb0-0xcf.
pub fn translate(insn: &Instruction, body: &mut MethodBody<'_>) -> Result<()> {
    match insn.opcode.value() {
        0x1d => monitor_enter(insn, body),
        0x2d..=0x31 => cmp(insn, body),
        0x60..=0x66 => sget(insn, body),
        0x90..=0xaf => binop(insn, body),
        0xb0..=0xcf => binop_2addr(insn, body),
        _ => Err(TranslateError::UnsupportedOpcode(insn.opcode)),
    }
}

/// Register redefined by executing `insn`, if any.
///
/// For every translated family this is the destination register of the
/// instruction's format; monitor-enter redefines nothing. Pure: same answer
/// for the same instruction regardless of call order or repetition.
pub fn defined_register(insn: &Instruction) -> Option<u16> {
    match insn.opcode.value() {
        0x2d..=0x31 | 0x60..=0x66 | 0x90..=0xcf => match insn.operands.first() {
            Some(Operand::Reg(r)) => Some(*r),
            _ => None,
        },
        _ => None,
    }
}

/// Whether executing `insn` redefines `register`.
pub fn redefines_register(insn: &Instruction, register: u16) -> bool {
    defined_register(insn) == Some(register)
}

// === binary operations ===

/// Operator and value category for a binary opcode, from its name and type
/// suffix. Covers both the three-register and the 2addr encodings of each
/// operation; anything else is unknown to the binary families.
fn binop_signature(opcode: Opcode) -> Option<(BinOp, ValueCategory)> {
    use Opcode as Op;
    use ValueCategory::{Double, Float, Int, Long};
    let sig = match opcode {
        Op::AddInt | Op::AddInt2addr => (BinOp::Add, Int),
        Op::AddLong | Op::AddLong2addr => (BinOp::Add, Long),
        Op::AddFloat | Op::AddFloat2addr => (BinOp::Add, Float),
        Op::AddDouble | Op::AddDouble2addr => (BinOp::Add, Double),
        Op::SubInt | Op::SubInt2addr => (BinOp::Sub, Int),
        Op::SubLong | Op::SubLong2addr => (BinOp::Sub, Long),
        Op::SubFloat | Op::SubFloat2addr => (BinOp::Sub, Float),
        Op::SubDouble | Op::SubDouble2addr => (BinOp::Sub, Double),
        Op::MulInt | Op::MulInt2addr => (BinOp::Mul, Int),
        Op::MulLong | Op::MulLong2addr => (BinOp::Mul, Long),
        Op::MulFloat | Op::MulFloat2addr => (BinOp::Mul, Float),
        Op::MulDouble | Op::MulDouble2addr => (BinOp::Mul, Double),
        Op::DivInt | Op::DivInt2addr => (BinOp::Div, Int),
        Op::DivLong | Op::DivLong2addr => (BinOp::Div, Long),
        Op::DivFloat | Op::DivFloat2addr => (BinOp::Div, Float),
        Op::DivDouble | Op::DivDouble2addr => (BinOp::Div, Double),
        Op::RemInt | Op::RemInt2addr => (BinOp::Rem, Int),
        Op::RemLong | Op::RemLong2addr => (BinOp::Rem, Long),
        Op::RemFloat | Op::RemFloat2addr => (BinOp::Rem, Float),
        Op::RemDouble | Op::RemDouble2addr => (BinOp::Rem, Double),
        // Logical and shift operations have no float/double variants.
        Op::AndInt | Op::AndInt2addr => (BinOp::And, Int),
        Op::AndLong | Op::AndLong2addr => (BinOp::And, Long),
        Op::OrInt | Op::OrInt2addr => (BinOp::Or, Int),
        Op::OrLong | Op::OrLong2addr => (BinOp::Or, Long),
        Op::XorInt | Op::XorInt2addr => (BinOp::Xor, Int),
        Op::XorLong | Op::XorLong2addr => (BinOp::Xor, Long),
        Op::ShlInt | Op::ShlInt2addr => (BinOp::Shl, Int),
        Op::ShlLong | Op::ShlLong2addr => (BinOp::Shl, Long),
        Op::ShrInt | Op::ShrInt2addr => (BinOp::Shr, Int),
        Op::ShrLong | Op::ShrLong2addr => (BinOp::Shr, Long),
        Op::UshrInt | Op::UshrInt2addr => (BinOp::Ushr, Int),
        Op::UshrLong | Op::UshrLong2addr => (BinOp::Ushr, Long),
        _ => return None,
    };
    Some(sig)
}

fn binop(insn: &Instruction, body: &mut MethodBody<'_>) -> Result<()> {
    let (dest, src1, src2) = operand::three_registers(insn)?;
    emit_binop(insn, body, BinopFamily::ThreeAddress, dest, src1, src2)
}

fn binop_2addr(insn: &Instruction, body: &mut MethodBody<'_>) -> Result<()> {
    // Destination doubles as the first source.
    let (dest, src) = operand::two_registers(insn)?;
    emit_binop(insn, body, BinopFamily::TwoAddress, dest, dest, src)
}

fn emit_binop(
    insn: &Instruction,
    body: &mut MethodBody<'_>,
    family: BinopFamily,
    dest: u16,
    src1: u16,
    src2: u16,
) -> Result<()> {
    let Some((op, category)) = binop_signature(insn.opcode) else {
        return Err(TranslateError::UnsupportedOpcode(insn.opcode));
    };
    let target = body.register_local(dest)?;
    let first = body.register_local(src1)?;
    let second = body.register_local(src2)?;
    let value = Expr::Binary { op, first, second };
    let stmt = body.emit(insn, StmtKind::Assign { target, value }, Some(category));
    register_binop_constraints(body, stmt, insn.opcode, family)
}

fn register_binop_constraints(
    body: &mut MethodBody<'_>,
    stmt: StmtId,
    opcode: Opcode,
    family: BinopFamily,
) -> Result<()> {
    let Some(typer) = body.typer() else {
        return Ok(());
    };
    let (first, second, target) = typing::binop_categories(opcode, family)?;
    typer.constrain(SlotRef::new(stmt, OperandSlot::First), first);
    typer.constrain(SlotRef::new(stmt, OperandSlot::Second), second);
    typer.constrain(SlotRef::new(stmt, OperandSlot::Target), target);
    Ok(())
}

// === comparisons ===

fn cmp(insn: &Instruction, body: &mut MethodBody<'_>) -> Result<()> {
    use ValueCategory::{Double, Float, Long};
    let (dest, src1, src2) = operand::three_registers(insn)?;
    let (kind, operands) = match insn.opcode {
        Opcode::CmplFloat => (CmpKind::CmpLess, Float),
        Opcode::CmpgFloat => (CmpKind::CmpGreater, Float),
        Opcode::CmplDouble => (CmpKind::CmpLess, Double),
        Opcode::CmpgDouble => (CmpKind::CmpGreater, Double),
        Opcode::CmpLong => (CmpKind::Cmp, Long),
        op => return Err(TranslateError::UnsupportedOpcode(op)),
    };
    let target = body.register_local(dest)?;
    let first = body.register_local(src1)?;
    let second = body.register_local(src2)?;
    let value = Expr::Compare {
        kind,
        operands,
        first,
        second,
    };
    // The result of a three-valued comparison is always an int, whatever
    // the operand category.
    let stmt = body.emit(
        insn,
        StmtKind::Assign { target, value },
        Some(ValueCategory::Int),
    );
    if let Some(typer) = body.typer() {
        typer.constrain(SlotRef::new(stmt, OperandSlot::First), operands);
        typer.constrain(SlotRef::new(stmt, OperandSlot::Second), operands);
        // The fixed int result needs no constraint of its own.
    }
    Ok(())
}

// === static field reads ===

fn sget(insn: &Instruction, body: &mut MethodBody<'_>) -> Result<()> {
    let (dest, field) = operand::register_and_field(insn)?;
    let target = body.register_local(dest)?;
    let value = Expr::StaticField(field.clone());
    // The field's declared type governs typing; no category tag.
    let stmt = body.emit(insn, StmtKind::Assign { target, value }, None);
    if let Some(typer) = body.typer() {
        typer.capture_assignment(stmt, insn.opcode);
    }
    Ok(())
}

// === monitors ===

fn monitor_enter(insn: &Instruction, body: &mut MethodBody<'_>) -> Result<()> {
    let reg = operand::single_register(insn)?;
    let object = body.register_local(reg)?;
    let stmt = body.emit(insn, StmtKind::EnterMonitor { object }, None);
    if let Some(typer) = body.typer() {
        typer.capture_reference(SlotRef::new(stmt, OperandSlot::First));
    }
    Ok(())
}
