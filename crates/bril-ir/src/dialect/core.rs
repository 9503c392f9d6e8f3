//! `core.module`: the root operation owning all other nodes.

use super::DialectOp;
use crate::context::{IrContext, OperationDataBuilder};
use crate::refs::{BlockRef, OpRef, RegionRef};
use crate::symbol::Symbol;
use crate::types::{Attribute, Location};

crate::symbols! {
    ATTR_SYM_NAME => "sym_name",
}

/// Thin wrapper around an `OpRef` pointing to a `core.module` operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Module(OpRef);

impl DialectOp for Module {
    const DIALECT_NAME: &'static str = "core";
    const OP_NAME: &'static str = "module";

    fn from_op(ctx: &IrContext, op: OpRef) -> Option<Self> {
        Self::matches(ctx, op).then_some(Module(op))
    }

    fn op_ref(&self) -> OpRef {
        self.0
    }
}

impl Module {
    /// Build a module named `name` whose body holds `ops` in one block.
    pub fn build(
        ctx: &mut IrContext,
        location: Location,
        name: Symbol,
        ops: impl IntoIterator<Item = OpRef>,
    ) -> Self {
        let body = ctx.region_of_ops(location, ops);
        let data = OperationDataBuilder::new(
            location,
            Symbol::new(Self::DIALECT_NAME),
            Symbol::new(Self::OP_NAME),
        )
        .attr(ATTR_SYM_NAME(), Attribute::Symbol(name))
        .region(body)
        .build();
        Module(ctx.create_op(data))
    }

    /// Get the module's body region, if it has one.
    pub fn body(self, ctx: &IrContext) -> Option<RegionRef> {
        ctx.op(self.0).regions.first().copied()
    }

    /// Get the first block of the module body.
    pub fn first_block(self, ctx: &IrContext) -> Option<BlockRef> {
        let region = self.body(ctx)?;
        ctx.region(region).blocks.first().copied()
    }

    /// Get all top-level operations in the module's first block.
    pub fn ops(self, ctx: &IrContext) -> Vec<OpRef> {
        match self.first_block(ctx) {
            Some(block) => ctx.block(block).ops.to_vec(),
            None => vec![],
        }
    }

    /// Get the module name (from `sym_name` attribute).
    pub fn name(self, ctx: &IrContext) -> Option<Symbol> {
        ctx.op_attr(self.0, ATTR_SYM_NAME())
            .and_then(Attribute::as_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::OperationData;
    use crate::types::Span;

    fn test_location(ctx: &mut IrContext) -> Location {
        let path = ctx.paths.intern("file:///test.bril".to_owned());
        Location::new(path, Span::new(0, 0))
    }

    #[test]
    fn build_and_inspect_module() {
        let mut ctx = IrContext::new();
        let loc = test_location(&mut ctx);
        let op = ctx.create_op(OperationData::new(loc, Symbol::new("t"), Symbol::new("a")));

        let module = Module::build(&mut ctx, loc, Symbol::new("main"), [op]);

        assert_eq!(module.name(&ctx), Some(Symbol::new("main")));
        assert_eq!(module.ops(&ctx), vec![op]);
        assert_eq!(Module::from_op(&ctx, module.op_ref()), Some(module));
        assert_eq!(Module::from_op(&ctx, op), None);
    }

    #[test]
    fn empty_module_has_no_ops() {
        let mut ctx = IrContext::new();
        let loc = test_location(&mut ctx);
        let module = Module::build(&mut ctx, loc, Symbol::new("empty"), []);
        assert!(module.ops(&ctx).is_empty());
        assert!(module.first_block(&ctx).is_some());
    }
}
