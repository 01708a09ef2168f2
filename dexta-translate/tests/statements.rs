use dexta_ir::{BinOp, CmpKind, Expr, Local, StmtKind, ValueCategory};
use dexta_isa::{FieldRef, Instruction, Opcode, Operand};
use dexta_translate::{translate, BlockPolicy, MethodBody};

fn regs(rs: &[u16]) -> Vec<Operand> {
    rs.iter().map(|&r| Operand::Reg(r)).collect()
}

// --- binary operations ---

#[test]
fn add_long_2addr_reuses_the_destination_as_first_source() {
    let insn = Instruction::new(0, Opcode::AddLong2addr, regs(&[2, 4]));
    let mut body = MethodBody::new(8);
    translate(&insn, &mut body).unwrap();

    assert_eq!(body.stmts().len(), 1);
    let stmt = &body.stmts()[0];
    assert_eq!(
        stmt.kind,
        StmtKind::Assign {
            target: Local(2),
            value: Expr::Binary {
                op: BinOp::Add,
                first: Local(2),
                second: Local(4),
            },
        }
    );
    assert_eq!(stmt.tag, Some(ValueCategory::Long));
    assert_eq!(stmt.to_string(), "v2 = v2 + v4");
}

#[test]
fn three_register_binop_names_both_sources() {
    let insn = Instruction::new(0, Opcode::AddInt, regs(&[0, 1, 2]));
    let mut body = MethodBody::new(4);
    translate(&insn, &mut body).unwrap();

    let stmt = &body.stmts()[0];
    assert_eq!(stmt.to_string(), "v0 = v1 + v2");
    assert_eq!(stmt.tag, Some(ValueCategory::Int));
}

#[test]
fn operator_and_tag_follow_the_opcode() {
    let cases: &[(Opcode, &str, ValueCategory)] = &[
        (Opcode::SubInt, "v0 = v1 - v2", ValueCategory::Int),
        (Opcode::MulFloat, "v0 = v1 * v2", ValueCategory::Float),
        (Opcode::DivDouble, "v0 = v1 / v2", ValueCategory::Double),
        (Opcode::RemLong, "v0 = v1 % v2", ValueCategory::Long),
        (Opcode::AndInt, "v0 = v1 & v2", ValueCategory::Int),
        (Opcode::OrLong, "v0 = v1 | v2", ValueCategory::Long),
        (Opcode::XorInt, "v0 = v1 ^ v2", ValueCategory::Int),
        (Opcode::ShlInt, "v0 = v1 << v2", ValueCategory::Int),
        (Opcode::ShrLong, "v0 = v1 >> v2", ValueCategory::Long),
        (Opcode::UshrInt, "v0 = v1 >>> v2", ValueCategory::Int),
    ];
    for &(opcode, rendered, tag) in cases {
        let insn = Instruction::new(0, opcode, regs(&[0, 1, 2]));
        let mut body = MethodBody::new(4);
        translate(&insn, &mut body).unwrap();
        let stmt = &body.stmts()[0];
        assert_eq!(stmt.to_string(), rendered, "{opcode}");
        assert_eq!(stmt.tag, Some(tag), "{opcode}");
    }
}

#[test]
fn two_addr_variants_mirror_their_three_register_siblings() {
    let insn = Instruction::new(0, Opcode::XorLong2addr, regs(&[1, 3]));
    let mut body = MethodBody::new(4);
    translate(&insn, &mut body).unwrap();
    let stmt = &body.stmts()[0];
    assert_eq!(stmt.to_string(), "v1 = v1 ^ v3");
    assert_eq!(stmt.tag, Some(ValueCategory::Long));
}

// --- comparisons ---

#[test]
fn cmp_long_splits_operand_and_result_categories() {
    let insn = Instruction::new(0, Opcode::CmpLong, regs(&[0, 1, 2]));
    let mut body = MethodBody::new(4);
    translate(&insn, &mut body).unwrap();

    let stmt = &body.stmts()[0];
    // The statement is int-typed; the expression operands stay long.
    assert_eq!(stmt.tag, Some(ValueCategory::Int));
    assert_eq!(
        stmt.kind,
        StmtKind::Assign {
            target: Local(0),
            value: Expr::Compare {
                kind: CmpKind::Cmp,
                operands: ValueCategory::Long,
                first: Local(1),
                second: Local(2),
            },
        }
    );
    assert_eq!(stmt.to_string(), "v0 = cmp(v1, v2)");
}

#[test]
fn cmpl_and_cmpg_are_preserved_opcode_for_opcode() {
    let cases: &[(Opcode, CmpKind, ValueCategory)] = &[
        (Opcode::CmplFloat, CmpKind::CmpLess, ValueCategory::Float),
        (Opcode::CmpgFloat, CmpKind::CmpGreater, ValueCategory::Float),
        (Opcode::CmplDouble, CmpKind::CmpLess, ValueCategory::Double),
        (Opcode::CmpgDouble, CmpKind::CmpGreater, ValueCategory::Double),
    ];
    for &(opcode, kind, operands) in cases {
        let insn = Instruction::new(0, opcode, regs(&[3, 1, 2]));
        let mut body = MethodBody::new(4);
        translate(&insn, &mut body).unwrap();
        let StmtKind::Assign {
            value:
                Expr::Compare {
                    kind: got_kind,
                    operands: got_operands,
                    ..
                },
            ..
        } = body.stmts()[0].kind.clone()
        else {
            panic!("expected comparison for {opcode}");
        };
        assert_eq!(got_kind, kind, "{opcode}");
        assert_eq!(got_operands, operands, "{opcode}");
        assert_eq!(body.stmts()[0].tag, Some(ValueCategory::Int), "{opcode}");
    }
}

// --- static field reads ---

#[test]
fn sget_assigns_a_field_reference_without_a_tag() {
    let field = FieldRef::new("Ljava/lang/System;", "out", "Ljava/io/PrintStream;");
    let insn = Instruction::new(
        0,
        Opcode::SgetObject,
        vec![Operand::Reg(1), Operand::Field(field.clone())],
    );
    let mut body = MethodBody::new(4);
    translate(&insn, &mut body).unwrap();

    let stmt = &body.stmts()[0];
    assert_eq!(stmt.tag, None);
    assert_eq!(
        stmt.kind,
        StmtKind::Assign {
            target: Local(1),
            value: Expr::StaticField(field),
        }
    );
    assert_eq!(
        stmt.to_string(),
        "v1 = Ljava/lang/System;->out:Ljava/io/PrintStream;"
    );
}

// --- monitors ---

#[test]
fn monitor_enter_emits_one_untagged_side_effect() {
    let insn = Instruction::new(0, Opcode::MonitorEnter, regs(&[7]));
    let mut body = MethodBody::new(8);
    translate(&insn, &mut body).unwrap();

    assert_eq!(body.stmts().len(), 1);
    let stmt = &body.stmts()[0];
    assert_eq!(stmt.kind, StmtKind::EnterMonitor { object: Local(7) });
    assert_eq!(stmt.tag, None);
    assert_eq!(stmt.to_string(), "monitor-enter v7");
}

// --- sequencing ---

#[test]
fn exactly_one_statement_per_instruction_in_program_order() {
    let insns = [
        Instruction::new(0, Opcode::CmpLong, regs(&[0, 1, 2])),
        Instruction::new(2, Opcode::AddInt2addr, regs(&[0, 3])),
        Instruction::new(3, Opcode::MonitorEnter, regs(&[1])),
    ];
    let mut body = MethodBody::new(4);
    for insn in &insns {
        translate(insn, &mut body).unwrap();
    }
    let stmts = body.into_stmts();
    assert_eq!(stmts.len(), 3);
    assert_eq!(stmts[0].to_string(), "v0 = cmp(v1, v2)");
    assert_eq!(stmts[1].to_string(), "v0 = v0 + v3");
    assert_eq!(stmts[2].to_string(), "monitor-enter v1");
}

// --- line tagging ---

#[test]
fn statements_take_the_nearest_preceding_line_entry() {
    let mut body = MethodBody::new(4);
    body.set_line(0, 14);
    body.set_line(3, 15);

    translate(
        &Instruction::new(2, Opcode::AddInt, regs(&[0, 1, 2])),
        &mut body,
    )
    .unwrap();
    translate(
        &Instruction::new(3, Opcode::MonitorEnter, regs(&[1])),
        &mut body,
    )
    .unwrap();

    assert_eq!(body.stmts()[0].line, Some(14));
    assert_eq!(body.stmts()[1].line, Some(15));
}

#[test]
fn no_line_table_means_no_line_tag() {
    let mut body = MethodBody::new(4);
    translate(
        &Instruction::new(9, Opcode::AddInt, regs(&[0, 1, 2])),
        &mut body,
    )
    .unwrap();
    assert_eq!(body.stmts()[0].line, None);
}

// --- block boundaries ---

struct SplitAfterMonitors;

impl BlockPolicy for SplitAfterMonitors {
    fn splits_after(&self, opcode: Opcode) -> bool {
        opcode == Opcode::MonitorEnter
    }
}

#[test]
fn block_flag_follows_the_injected_policy() {
    let policy = SplitAfterMonitors;
    let mut body = MethodBody::new(4);
    body.set_block_policy(&policy);

    translate(
        &Instruction::new(0, Opcode::MonitorEnter, regs(&[1])),
        &mut body,
    )
    .unwrap();
    translate(
        &Instruction::new(1, Opcode::AddInt, regs(&[0, 1, 2])),
        &mut body,
    )
    .unwrap();

    assert!(body.stmts()[0].ends_block);
    assert!(!body.stmts()[1].ends_block);
}

#[test]
fn default_policy_never_splits_after_in_scope_opcodes() {
    let mut body = MethodBody::new(8);
    let field = FieldRef::new("LA;", "f", "I");
    let insns = [
        Instruction::new(0, Opcode::AddLong, regs(&[0, 2, 4])),
        Instruction::new(2, Opcode::SubInt2addr, regs(&[1, 2])),
        Instruction::new(3, Opcode::CmpgDouble, regs(&[0, 2, 4])),
        Instruction::new(
            5,
            Opcode::Sget,
            vec![Operand::Reg(1), Operand::Field(field)],
        ),
        Instruction::new(7, Opcode::MonitorEnter, regs(&[1])),
    ];
    for insn in &insns {
        translate(insn, &mut body).unwrap();
    }
    assert!(body.stmts().iter().all(|s| !s.ends_block));
}
