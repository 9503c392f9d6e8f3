//! Greedy rewrite infrastructure.
//!
//! Rules mutate operations in place under the driver's exclusive borrow of
//! the `IrContext`; there is no deferred mutation list and no change
//! notification.

pub mod config;
pub mod driver;
pub mod error;
pub mod rule;

pub use config::{DEFAULT_MAX_ITERATIONS, GreedyRewriteConfig};
pub use driver::{
    ApplyResult, GreedyRewriteDriver, RewriteStatus, apply_partial, run, run_with_config,
};
pub use error::{RewriteError, RewriteOutcome};
pub use rule::{RewriteResult, RewriteRule};
