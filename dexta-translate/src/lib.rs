//! Opcode-to-IR translation engine.
//!
//! Translates decoded Dalvik instructions, one at a time, into tagged
//! three-address IR statements appended to a per-method [`MethodBody`].
//! Covered families: binary arithmetic/logical operations (both the
//! three-register and the 2addr encodings), three-valued comparisons,
//! static field reads, and monitor-enter.
//!
//! ```
//! use dexta_isa::{Instruction, Opcode, Operand};
//! use dexta_translate::{translate, MethodBody};
//!
//! let insn = Instruction::new(
//!     0,
//!     Opcode::AddLong2addr,
//!     vec![Operand::Reg(2), Operand::Reg(4)],
//! );
//! let mut body = MethodBody::new(8);
//! translate(&insn, &mut body).unwrap();
//! assert_eq!(body.stmts()[0].to_string(), "v2 = v2 + v4");
//! ```

pub mod body;
pub mod error;
pub mod insn;
pub mod operand;
pub mod typing;

pub use body::{BlockPolicy, FlowBlockPolicy, MethodBody};
pub use error::{Result, TranslateError};
pub use insn::{defined_register, redefines_register, translate};
pub use operand::OperandShape;
pub use typing::{BinopFamily, TypeSolver, binop_categories};
