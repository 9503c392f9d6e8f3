//! Pass interface.

use bril_ir::rewrite::{RewriteError, RewriteStatus};
use bril_ir::{IrContext, OpRef};
use derive_more::{Display, Error};

/// A transformation that runs on everything nested under one operation.
pub trait Pass {
    /// Registered name, e.g. `bril-switch-bar-foo`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run the pass on the operations nested in `op`.
    ///
    /// An error means the IR may hold partial results and the enclosing
    /// transformation must be treated as failed.
    fn run_on_operation(&self, ctx: &mut IrContext, op: OpRef)
    -> Result<RewriteStatus, PassError>;
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum PassError {
    #[display("pass `{pass}` failed: {source}")]
    Rewrite {
        pass: &'static str,
        source: RewriteError,
    },

    #[display("unknown pass `{name}`")]
    UnknownPass { name: String },
}

impl PassError {
    pub fn rewrite(pass: &'static str, source: RewriteError) -> Self {
        PassError::Rewrite { pass, source }
    }

    pub fn unknown_pass(name: impl Into<String>) -> Self {
        PassError::UnknownPass { name: name.into() }
    }

    pub fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            PassError::Rewrite {
                source: RewriteError::NonConvergence { .. },
                ..
            }
        )
    }
}
