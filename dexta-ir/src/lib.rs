//! Stack-free, typed three-address IR node types.
//!
//! Statements are produced one bytecode instruction at a time by the
//! translation layer and consumed by later analysis passes (control-flow
//! reconstruction, def/use, type inference).

pub mod expr;
pub mod stmt;

pub use expr::{BinOp, CmpKind, Expr, ValueCategory};
pub use stmt::{Local, OperandSlot, SlotRef, Stmt, StmtId, StmtKind};
