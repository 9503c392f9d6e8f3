//! Bril IR crate.
//!
//! An arena-based mutable IR (operations owning regions of blocks of
//! operations) plus the greedy rewrite driver that the Bril passes run on.

pub mod context;
pub mod dialect;
pub mod refs;
pub mod rewrite;
pub mod symbol;
pub mod types;
pub mod walk;

pub use context::{BlockData, IrContext, OperationData, OperationDataBuilder, RegionData};
pub use dialect::DialectOp;
pub use refs::{BlockRef, OpRef, PathRef, RegionRef};
pub use symbol::Symbol;
pub use types::{Attribute, Location, PathInterner, Span};
pub use walk::Traversal;
