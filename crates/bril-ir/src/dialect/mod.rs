//! Typed wrappers for the operations the Bril passes work with.
//!
//! Only the structural operations are modelled: `core.module` as the root
//! that owns everything, and `func.func` as the named function node.

use crate::context::IrContext;
use crate::refs::OpRef;
use crate::symbol::Symbol;

pub mod core;
pub mod func;

/// Trait for typed operation wrappers over an `OpRef`.
pub trait DialectOp: Sized + Copy {
    const DIALECT_NAME: &'static str;
    const OP_NAME: &'static str;

    /// Wrap `op` if it is a `DIALECT_NAME.OP_NAME` operation.
    fn from_op(ctx: &IrContext, op: OpRef) -> Option<Self>;

    fn op_ref(&self) -> OpRef;

    fn matches(ctx: &IrContext, op: OpRef) -> bool {
        ctx.op(op)
            .is(Symbol::new(Self::DIALECT_NAME), Symbol::new(Self::OP_NAME))
    }
}
