//! Snapshotting nested operations in a fixed order.
//!
//! Traversal keeps its own work stack, so region nesting depth is bounded
//! by heap memory rather than the call stack.

use crate::context::IrContext;
use crate::refs::OpRef;

/// Order in which an operation is visited relative to its nested regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Operation before its nested regions (top-down).
    PreOrder,
    /// Nested regions before the operation (bottom-up).
    #[default]
    PostOrder,
}

/// Operations directly inside `op`'s regions, in region then block order.
fn child_ops(ctx: &IrContext, op: OpRef) -> Vec<OpRef> {
    ctx.op(op)
        .regions
        .iter()
        .flat_map(|&r| ctx.region(r).blocks.iter())
        .flat_map(|&b| ctx.block(b).ops.iter().copied())
        .collect()
}

/// Collect every operation nested in `root`'s regions (not `root` itself)
/// in the given order.
pub fn collect_nested_ops(ctx: &IrContext, root: OpRef, order: Traversal) -> Vec<OpRef> {
    let mut out = Vec::new();
    // (op, children already pushed)
    let mut stack: Vec<(OpRef, bool)> = child_ops(ctx, root)
        .into_iter()
        .rev()
        .map(|op| (op, false))
        .collect();

    while let Some((op, expanded)) = stack.pop() {
        if expanded {
            out.push(op);
            continue;
        }
        match order {
            Traversal::PreOrder => out.push(op),
            Traversal::PostOrder => stack.push((op, true)),
        }
        stack.extend(child_ops(ctx, op).into_iter().rev().map(|c| (c, false)));
    }
    out
}
