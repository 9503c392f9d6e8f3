//! Transformation passes for the Bril dialect.
//!
//! The only pass is `bril-switch-bar-foo`, which renames every `func.func`
//! called `bar` to `foo` by driving a single rename rule to a fixed point.

pub mod pass;
pub mod registry;
pub mod rename;
pub mod rules;
pub mod switch_bar_foo;

// Re-exports
pub use bril_ir::rewrite::{GreedyRewriteConfig, RewriteStatus};
pub use pass::{Pass, PassError};
pub use registry::{create_pass, create_pass_with_config, registered_passes};
pub use rename::RenameFunc;
pub use rules::BrilRule;
pub use switch_bar_foo::{SwitchBarFoo, switch_bar_foo};
