//! `func.func`: a named function whose body is a nested region.

use super::DialectOp;
use super::core::ATTR_SYM_NAME;
use crate::context::{IrContext, OperationDataBuilder};
use crate::refs::{OpRef, RegionRef};
use crate::symbol::Symbol;
use crate::types::{Attribute, Location};

/// Thin wrapper around an `OpRef` pointing to a `func.func` operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Func(OpRef);

impl DialectOp for Func {
    const DIALECT_NAME: &'static str = "func";
    const OP_NAME: &'static str = "func";

    fn from_op(ctx: &IrContext, op: OpRef) -> Option<Self> {
        Self::matches(ctx, op).then_some(Func(op))
    }

    fn op_ref(&self) -> OpRef {
        self.0
    }
}

impl Func {
    /// Build a detached `func.func` named `name` whose body holds `body_ops`.
    pub fn build(
        ctx: &mut IrContext,
        location: Location,
        name: Symbol,
        body_ops: impl IntoIterator<Item = OpRef>,
    ) -> Self {
        let body = ctx.region_of_ops(location, body_ops);
        let data = OperationDataBuilder::new(
            location,
            Symbol::new(Self::DIALECT_NAME),
            Symbol::new(Self::OP_NAME),
        )
        .attr(ATTR_SYM_NAME(), Attribute::Symbol(name))
        .region(body)
        .build();
        Func(ctx.create_op(data))
    }

    /// The function's symbol name. `None` if the attribute is missing or
    /// not a symbol.
    pub fn sym_name(self, ctx: &IrContext) -> Option<Symbol> {
        ctx.op_attr(self.0, ATTR_SYM_NAME())
            .and_then(Attribute::as_symbol)
    }

    /// Overwrite the symbol name in place. The operation keeps its identity.
    pub fn set_sym_name(self, ctx: &mut IrContext, name: Symbol) {
        ctx.set_op_attr(self.0, ATTR_SYM_NAME(), Attribute::Symbol(name));
    }

    pub fn body(self, ctx: &IrContext) -> Option<RegionRef> {
        ctx.op(self.0).regions.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Span;

    fn test_location(ctx: &mut IrContext) -> Location {
        let path = ctx.paths.intern("file:///test.bril".to_owned());
        Location::new(path, Span::new(0, 0))
    }

    #[test]
    fn rename_keeps_op_identity() {
        let mut ctx = IrContext::new();
        let loc = test_location(&mut ctx);
        let func = Func::build(&mut ctx, loc, Symbol::new("bar"), []);

        func.set_sym_name(&mut ctx, Symbol::new("foo"));

        let again = Func::from_op(&ctx, func.op_ref()).expect("still a func.func");
        assert_eq!(again, func);
        assert_eq!(func.sym_name(&ctx), Some(Symbol::new("foo")));
        assert_eq!(ctx.num_ops(), 1);
    }

    #[test]
    fn non_symbol_name_reads_as_none() {
        let mut ctx = IrContext::new();
        let loc = test_location(&mut ctx);
        let func = Func::build(&mut ctx, loc, Symbol::new("bar"), []);
        ctx.set_op_attr(func.op_ref(), ATTR_SYM_NAME(), Attribute::from("bar"));
        assert_eq!(func.sym_name(&ctx), None);
    }

    #[test]
    fn nested_body_region() {
        let mut ctx = IrContext::new();
        let loc = test_location(&mut ctx);
        let inner = Func::build(&mut ctx, loc, Symbol::new("inner"), []);
        let outer = Func::build(&mut ctx, loc, Symbol::new("outer"), [inner.op_ref()]);

        let body = outer.body(&ctx).expect("func has a body");
        let block = ctx.region(body).blocks[0];
        assert_eq!(ctx.block(block).ops.as_slice(), &[inner.op_ref()]);
    }
}
