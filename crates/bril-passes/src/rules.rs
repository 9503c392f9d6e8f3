//! The closed set of Bril rewrite rules.

use bril_ir::rewrite::{RewriteResult, RewriteRule};
use bril_ir::{IrContext, OpRef};
use derive_more::From;

use crate::rename::RenameFunc;

/// Every rule a Bril pass can hand to the greedy driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, From)]
pub enum BrilRule {
    RenameFunc(RenameFunc),
}

impl RewriteRule for BrilRule {
    fn matches(&self, ctx: &IrContext, op: OpRef) -> bool {
        match self {
            BrilRule::RenameFunc(rule) => rule.matches(ctx, op),
        }
    }

    fn apply(&self, ctx: &mut IrContext, op: OpRef) -> RewriteResult {
        match self {
            BrilRule::RenameFunc(rule) => rule.apply(ctx, op),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BrilRule::RenameFunc(rule) => rule.name(),
        }
    }
}
