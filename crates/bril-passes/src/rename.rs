//! Rename a function symbol from one literal name to another.

use bril_ir::dialect::func::Func;
use bril_ir::rewrite::{RewriteResult, RewriteRule};
use bril_ir::{DialectOp, IrContext, OpRef, Symbol};

/// Renames any `func.func` whose `sym_name` is exactly `from` to `to`.
///
/// Only the function's own name is inspected; nested operations are left
/// to the driver's traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenameFunc {
    pub from: Symbol,
    pub to: Symbol,
}

impl RenameFunc {
    pub fn new(from: Symbol, to: Symbol) -> Self {
        Self { from, to }
    }

    /// The `bar` → `foo` rename used by `bril-switch-bar-foo`.
    pub fn bar_to_foo() -> Self {
        Self::new(Symbol::new("bar"), Symbol::new("foo"))
    }

    fn matching_func(&self, ctx: &IrContext, op: OpRef) -> Option<Func> {
        let func = Func::from_op(ctx, op)?;
        (func.sym_name(ctx)? == self.from).then_some(func)
    }
}

impl RewriteRule for RenameFunc {
    fn matches(&self, ctx: &IrContext, op: OpRef) -> bool {
        self.matching_func(ctx, op).is_some()
    }

    fn apply(&self, ctx: &mut IrContext, op: OpRef) -> RewriteResult {
        let Some(func) = self.matching_func(ctx, op) else {
            return RewriteResult::NoMatch;
        };
        func.set_sym_name(ctx, self.to);
        RewriteResult::Matched
    }

    fn name(&self) -> &'static str {
        "rename-func"
    }
}
