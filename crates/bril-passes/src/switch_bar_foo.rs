//! `bril-switch-bar-foo`: rename functions called `bar` to `foo`.

use bril_ir::dialect::core::Module;
use bril_ir::rewrite::{GreedyRewriteConfig, RewriteStatus, run_with_config};
use bril_ir::{DialectOp, IrContext, OpRef};
use tracing::debug;

use crate::pass::{Pass, PassError};
use crate::rename::RenameFunc;
use crate::rules::BrilRule;

pub const PASS_NAME: &str = "bril-switch-bar-foo";

/// Greedily renames every nested `func.func @bar` to `@foo`.
#[derive(Clone, Debug, Default)]
pub struct SwitchBarFoo {
    config: GreedyRewriteConfig,
}

impl SwitchBarFoo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GreedyRewriteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rules(&self) -> [BrilRule; 1] {
        [RenameFunc::bar_to_foo().into()]
    }
}

impl Pass for SwitchBarFoo {
    fn name(&self) -> &'static str {
        PASS_NAME
    }

    fn description(&self) -> &'static str {
        "Switches the name of a FuncOp from bar to foo"
    }

    fn run_on_operation(
        &self,
        ctx: &mut IrContext,
        op: OpRef,
    ) -> Result<RewriteStatus, PassError> {
        let status = run_with_config(ctx, op, &self.rules(), &self.config)
            .map_err(|e| PassError::rewrite(PASS_NAME, e))?;
        debug!(pass = PASS_NAME, ?status, "pass finished");
        Ok(status)
    }
}

/// Run `bril-switch-bar-foo` over a module with the default configuration.
pub fn switch_bar_foo(ctx: &mut IrContext, module: Module) -> Result<RewriteStatus, PassError> {
    SwitchBarFoo::new().run_on_operation(ctx, module.op_ref())
}
