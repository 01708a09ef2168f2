use crate::expr::{Expr, ValueCategory};

/// An IR variable backing one virtual register of a method.
///
/// The translation context owns the register-to-variable mapping; a `Local`
/// is only ever obtained through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Local(pub u16);

impl std::fmt::Display for Local {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Index of a statement within a method's statement sequence.
pub type StmtId = usize;

/// An addressable operand position within a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandSlot {
    /// The assignment target.
    Target,
    /// First operand of a binary/comparison expression, or the object of a
    /// monitor statement.
    First,
    /// Second operand of a binary/comparison expression.
    Second,
}

/// A stable reference to one operand slot of one statement, used by type
/// inference to attach a resolved type to each slot independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub stmt: StmtId,
    pub slot: OperandSlot,
}

impl SlotRef {
    pub fn new(stmt: StmtId, slot: OperandSlot) -> Self {
        SlotRef { stmt, slot }
    }
}

/// Statement payload.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// Assignment: `target = value;`
    Assign { target: Local, value: Expr },
    /// Monitor acquisition over an object reference; no assignment target.
    EnterMonitor { object: Local },
}

/// One statement of the three-address IR.
///
/// All annotations are fixed at construction; a statement never escapes
/// half-tagged.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// Value category of the operation, where the opcode defines one.
    pub tag: Option<ValueCategory>,
    /// Source line resolved from the originating code address.
    pub line: Option<u32>,
    /// Control-flow reconstruction must start a new basic block after this
    /// statement.
    pub ends_block: bool,
}

impl std::fmt::Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StmtKind::Assign { target, value } => write!(f, "{target} = {value}"),
            StmtKind::EnterMonitor { object } => write!(f, "monitor-enter {object}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::BinOp;

    #[test]
    fn display() {
        let assign = Stmt {
            kind: StmtKind::Assign {
                target: Local(2),
                value: Expr::Binary {
                    op: BinOp::Shl,
                    first: Local(2),
                    second: Local(3),
                },
            },
            tag: Some(ValueCategory::Long),
            line: None,
            ends_block: false,
        };
        assert_eq!(assign.to_string(), "v2 = v2 << v3");

        let enter = Stmt {
            kind: StmtKind::EnterMonitor { object: Local(7) },
            tag: None,
            line: None,
            ends_block: false,
        };
        assert_eq!(enter.to_string(), "monitor-enter v7");
    }
}
