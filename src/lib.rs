//! Bril: a toy IR dialect with a greedy rewrite pass.
//!
//! - [`bril_ir`] holds the arena IR and the fixed-point rewrite driver.
//! - [`bril_passes`] holds the rename rule and the `bril-switch-bar-foo` pass.
//! - [`pipeline`] is where a caller invokes a pass by name and gets a
//!   success/failure report back.

pub mod diagnostic;
pub mod pipeline;

pub use bril_ir;
pub use bril_passes;
pub use diagnostic::{CompilationPhase, Diagnostic, DiagnosticSeverity};
pub use pipeline::{PassReport, run_pass, run_pass_with_config};
