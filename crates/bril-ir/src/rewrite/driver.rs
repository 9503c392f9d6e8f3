//! Greedy fixed-point rewrite driver.
//!
//! Scans every operation nested under a root, tries each rule in order at
//! each operation and applies the first one that matches. Scans repeat
//! until one applies nothing, or the iteration cap is hit. Each scan works
//! from a snapshot of the nested operations and skips ops that have been
//! detached from their block.
//!
//! Tie-break: when several rules match the same operation, the first rule
//! in the list wins for that scan.

use tracing::{debug, trace, warn};

use super::config::GreedyRewriteConfig;
use super::error::{RewriteError, RewriteOutcome};
use super::rule::{RewriteResult, RewriteRule};
use crate::context::IrContext;
use crate::refs::OpRef;
use crate::walk::collect_nested_ops;

/// Whether a run changed the IR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewriteStatus {
    Changed,
    Unchanged,
}

impl RewriteStatus {
    pub fn changed(self) -> bool {
        self == RewriteStatus::Changed
    }
}

/// Result of applying rewrite rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApplyResult {
    /// Number of full scans performed.
    pub iterations: usize,
    /// Total number of rule applications.
    pub total_changes: usize,
    /// Whether the fixpoint was reached (no changes in last scan).
    pub reached_fixpoint: bool,
}

impl ApplyResult {
    pub fn status(&self) -> RewriteStatus {
        if self.total_changes == 0 {
            RewriteStatus::Unchanged
        } else {
            RewriteStatus::Changed
        }
    }

    /// Turn a non-converged result into `NonConvergence`.
    pub fn into_outcome(self) -> RewriteOutcome<RewriteStatus> {
        if self.reached_fixpoint {
            Ok(self.status())
        } else {
            Err(RewriteError::NonConvergence {
                iterations: self.iterations,
                total_changes: self.total_changes,
            })
        }
    }
}

/// Drive `rules` to a fixed point over everything nested in `root`, with
/// the default configuration.
pub fn run<R: RewriteRule>(
    ctx: &mut IrContext,
    root: OpRef,
    rules: &[R],
) -> RewriteOutcome<RewriteStatus> {
    run_with_config(ctx, root, rules, &GreedyRewriteConfig::default())
}

/// Like [`run`], with an explicit configuration.
pub fn run_with_config<R: RewriteRule>(
    ctx: &mut IrContext,
    root: OpRef,
    rules: &[R],
    config: &GreedyRewriteConfig,
) -> RewriteOutcome<RewriteStatus> {
    let result = apply_partial(ctx, root, rules, config);
    if !result.reached_fixpoint {
        warn!(
            iterations = result.iterations,
            total_changes = result.total_changes,
            "greedy rewrite hit the iteration cap without converging"
        );
    }
    result.into_outcome()
}

/// Apply rules without turning non-convergence into an error.
pub fn apply_partial<R: RewriteRule>(
    ctx: &mut IrContext,
    root: OpRef,
    rules: &[R],
    config: &GreedyRewriteConfig,
) -> ApplyResult {
    let mut total_changes = 0;
    let mut iterations = 0;

    for _ in 0..config.iteration_cap() {
        iterations += 1;
        let changes = run_one_iteration(ctx, root, rules, config);
        total_changes += changes;
        debug!(iteration = iterations, changes, "greedy rewrite scan");
        if changes == 0 {
            return ApplyResult {
                iterations,
                total_changes,
                reached_fixpoint: true,
            };
        }
    }

    ApplyResult {
        iterations,
        total_changes,
        reached_fixpoint: false,
    }
}

/// Run a single scan over all nested operations.
fn run_one_iteration<R: RewriteRule>(
    ctx: &mut IrContext,
    root: OpRef,
    rules: &[R],
    config: &GreedyRewriteConfig,
) -> usize {
    let mut changes = 0;

    for op in collect_nested_ops(ctx, root, config.traversal) {
        if ctx.op(op).parent_block.is_none() {
            continue;
        }

        for rule in rules {
            if !rule.matches(ctx, op) {
                continue;
            }
            if rule.apply(ctx, op) == RewriteResult::Matched {
                trace!(rule = rule.name(), %op, "applied rewrite");
                changes += 1;
                // Only apply one rule per op per scan
                break;
            }
        }
    }

    changes
}

/// Owns an ordered rule list and a configuration.
pub struct GreedyRewriteDriver<R> {
    rules: Vec<R>,
    config: GreedyRewriteConfig,
}

impl<R: RewriteRule> GreedyRewriteDriver<R> {
    pub fn new(rules: impl IntoIterator<Item = R>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            config: GreedyRewriteConfig::default(),
        }
    }

    /// Append a rule after the existing ones.
    pub fn add_rule(mut self, rule: R) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_config(mut self, config: GreedyRewriteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GreedyRewriteConfig {
        &self.config
    }

    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    pub fn run(&self, ctx: &mut IrContext, root: OpRef) -> RewriteOutcome<RewriteStatus> {
        run_with_config(ctx, root, &self.rules, &self.config)
    }

    pub fn apply_partial(&self, ctx: &mut IrContext, root: OpRef) -> ApplyResult {
        apply_partial(ctx, root, &self.rules, &self.config)
    }
}
