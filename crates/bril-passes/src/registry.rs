//! Pass registration by name.

use bril_ir::rewrite::GreedyRewriteConfig;

use crate::pass::Pass;
use crate::switch_bar_foo::{self, SwitchBarFoo};

/// Names of every registered pass.
pub fn registered_passes() -> &'static [&'static str] {
    &[switch_bar_foo::PASS_NAME]
}

/// Build the pass registered as `name` with the default configuration.
pub fn create_pass(name: &str) -> Option<Box<dyn Pass>> {
    create_pass_with_config(name, GreedyRewriteConfig::default())
}

/// Build the pass registered as `name`, driving its rules with `config`.
pub fn create_pass_with_config(name: &str, config: GreedyRewriteConfig) -> Option<Box<dyn Pass>> {
    match name {
        switch_bar_foo::PASS_NAME => Some(Box::new(SwitchBarFoo::new().with_config(config))),
        _ => None,
    }
}
