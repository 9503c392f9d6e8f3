//! Pass invocation boundary.
//!
//! Looks a pass up by name, runs it on a root operation and reports the
//! outcome. Any pass error becomes an error diagnostic and the report is
//! marked failed; callers must not use the IR as a finished result then.

use bril_ir::rewrite::{GreedyRewriteConfig, RewriteStatus};
use bril_ir::{IrContext, OpRef};
use bril_passes::{PassError, create_pass_with_config};
use tracing::{debug, error, info_span};

use crate::diagnostic::{CompilationPhase, Diagnostic, DiagnosticSeverity};

/// Outcome of one pass invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassReport {
    pub pass: String,
    /// `Some` when the pass ran to a fixed point.
    pub status: Option<RewriteStatus>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PassReport {
    pub fn succeeded(&self) -> bool {
        self.status.is_some()
            && !self
                .diagnostics
                .iter()
                .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// Process exit code for a driver binary: 0 on success, 1 on failure.
    pub fn exit_code(&self) -> i32 {
        if self.succeeded() { 0 } else { 1 }
    }
}

/// Run the pass registered as `name` with the default configuration.
pub fn run_pass(ctx: &mut IrContext, root: OpRef, name: &str) -> PassReport {
    run_pass_with_config(ctx, root, name, GreedyRewriteConfig::default())
}

/// Run the pass registered as `name`, driving its rules with `config`.
pub fn run_pass_with_config(
    ctx: &mut IrContext,
    root: OpRef,
    name: &str,
    config: GreedyRewriteConfig,
) -> PassReport {
    let _span = info_span!("run_pass", pass = name).entered();

    let result = match create_pass_with_config(name, config) {
        Some(pass) => pass.run_on_operation(ctx, root),
        None => Err(PassError::unknown_pass(name)),
    };

    match result {
        Ok(status) => {
            debug!(?status, "pass succeeded");
            PassReport {
                pass: name.to_owned(),
                status: Some(status),
                diagnostics: vec![],
            }
        }
        Err(err) => {
            error!(%err, "pass failed");
            PassReport {
                pass: name.to_owned(),
                status: None,
                diagnostics: vec![diagnostic_for(&err)],
            }
        }
    }
}

fn diagnostic_for(err: &PassError) -> Diagnostic {
    let phase = match err {
        PassError::UnknownPass { .. } => CompilationPhase::PassLookup,
        PassError::Rewrite { .. } => CompilationPhase::Optimization,
    };
    Diagnostic {
        message: err.to_string(),
        severity: DiagnosticSeverity::Error,
        phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bril_ir::dialect::core::Module;
    use bril_ir::dialect::func::Func;
    use bril_ir::{DialectOp, Location, Span, Symbol};

    fn module_with(ctx: &mut IrContext, name: &'static str) -> Module {
        let path = ctx.paths.intern("test.bril".to_owned());
        let loc = Location::new(path, Span::new(0, 0));
        let func = Func::build(ctx, loc, Symbol::new(name), []);
        Module::build(ctx, loc, Symbol::new("m"), [func.op_ref()])
    }

    #[test]
    fn successful_run() {
        let mut ctx = IrContext::new();
        let module = module_with(&mut ctx, "bar");

        let report = run_pass(&mut ctx, module.op_ref(), "bril-switch-bar-foo");

        assert!(report.succeeded());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.status, Some(RewriteStatus::Changed));
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn unknown_pass_fails_without_touching_ir() {
        let mut ctx = IrContext::new();
        let module = module_with(&mut ctx, "bar");

        let report = run_pass(&mut ctx, module.op_ref(), "bril-nope");

        assert!(!report.succeeded());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.diagnostics[0].phase, CompilationPhase::PassLookup);
        let func = Func::from_op(&ctx, module.ops(&ctx)[0]).unwrap();
        assert_eq!(func.sym_name(&ctx), Some(Symbol::new("bar")));
    }

    #[test]
    fn non_convergence_is_an_optimization_error() {
        let mut ctx = IrContext::new();
        let module = module_with(&mut ctx, "bar");

        let report = run_pass_with_config(
            &mut ctx,
            module.op_ref(),
            "bril-switch-bar-foo",
            GreedyRewriteConfig::new().with_max_iterations(1),
        );

        assert!(!report.succeeded());
        assert_eq!(report.status, None);
        let diag = &report.diagnostics[0];
        assert_eq!(diag.phase, CompilationPhase::Optimization);
        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert!(diag.message.contains("did not converge"));
    }
}
