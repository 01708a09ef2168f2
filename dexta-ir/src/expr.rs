use dexta_isa::FieldRef;

use crate::stmt::Local;

/// Arithmetic and storage category of an untyped register operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Int,
    Long,
    Float,
    Double,
}

impl std::fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValueCategory::Int => "int",
            ValueCategory::Long => "long",
            ValueCategory::Float => "float",
            ValueCategory::Double => "double",
        };
        f.write_str(s)
    }
}

/// Binary arithmetic/logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Ushr,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Xor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Ushr => ">>>",
        };
        f.write_str(s)
    }
}

/// Three-valued comparison kinds.
///
/// `CmpLess` and `CmpGreater` differ only in which result an unordered
/// (NaN) comparison yields; that bias is runtime evaluation semantics and
/// both kinds are preserved opcode-for-opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpKind {
    /// `cmp-long`: no unordered operands exist.
    Cmp,
    /// `cmpl-*`: unordered yields -1.
    CmpLess,
    /// `cmpg-*`: unordered yields 1.
    CmpGreater,
}

impl std::fmt::Display for CmpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CmpKind::Cmp => "cmp",
            CmpKind::CmpLess => "cmpl",
            CmpKind::CmpGreater => "cmpg",
        };
        f.write_str(s)
    }
}

/// Expression nodes of the three-address IR.
///
/// Binary and comparison expressions carry exactly two operand slots; each
/// slot is addressable from the outside via [`crate::stmt::SlotRef`] so a
/// type solver can constrain them independently.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Two-operand arithmetic/logical operation: `first op second`.
    Binary {
        op: BinOp,
        first: Local,
        second: Local,
    },
    /// Three-valued comparison yielding -1/0/1 as an `int`.
    ///
    /// `operands` is the category of the compared values (long, float, or
    /// double), independent of the int result.
    Compare {
        kind: CmpKind,
        operands: ValueCategory,
        first: Local,
        second: Local,
    },
    /// Read of a static field.
    StaticField(FieldRef),
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary { op, first, second } => write!(f, "{first} {op} {second}"),
            Expr::Compare {
                kind,
                first,
                second,
                ..
            } => write!(f, "{kind}({first}, {second})"),
            Expr::StaticField(fr) => write!(f, "{fr}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let add = Expr::Binary {
            op: BinOp::Add,
            first: Local(2),
            second: Local(4),
        };
        assert_eq!(add.to_string(), "v2 + v4");

        let cmp = Expr::Compare {
            kind: CmpKind::CmpLess,
            operands: ValueCategory::Float,
            first: Local(0),
            second: Local(1),
        };
        assert_eq!(cmp.to_string(), "cmpl(v0, v1)");
    }
}
