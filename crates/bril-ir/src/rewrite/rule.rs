//! Rewrite rule capability.
//!
//! A rule is a stateless `{matches, apply}` pair. The driver gates every
//! `apply` on `matches`, but `apply` re-checks on its own so that calling
//! it on a non-matching operation is a `NoMatch` no-op.

use crate::context::IrContext;
use crate::refs::OpRef;

/// Outcome of one attempted rule application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewriteResult {
    /// The rule matched and mutated the operation in place.
    Matched,
    /// The rule did not apply; the operation is untouched.
    NoMatch,
}

impl RewriteResult {
    pub fn is_matched(self) -> bool {
        self == RewriteResult::Matched
    }
}

/// A rule that can match and rewrite a single operation in place.
///
/// Rules must not create, erase or move operations; they only mutate
/// fields of the operation they are given.
pub trait RewriteRule {
    /// Whether the rule applies to `op` in its current state.
    fn matches(&self, ctx: &IrContext, op: OpRef) -> bool;

    /// Rewrite `op` in place.
    ///
    /// Returns `NoMatch` without touching `op` if `matches` does not hold.
    fn apply(&self, ctx: &mut IrContext, op: OpRef) -> RewriteResult;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
