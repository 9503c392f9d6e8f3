//! Errors raised by the rewrite driver.

use derive_more::{Display, Error};

pub type RewriteOutcome<T> = Result<T, RewriteError>;

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// The iteration cap was hit while the last scan still rewrote something.
    #[display(
        "rewrite did not converge within {iterations} iterations ({total_changes} rewrites applied)"
    )]
    NonConvergence {
        iterations: usize,
        total_changes: usize,
    },
}
