//! IrContext: arena-based mutable IR storage.
//!
//! All IR entities (operations, blocks, regions) are stored in
//! `PrimaryMap`s owned by `IrContext` and addressed by `Copy` refs.
//! Rewrites mutate entities in place, so an `OpRef` stays valid and keeps
//! its identity across a rewrite.

use std::collections::BTreeMap;

use cranelift_entity::PrimaryMap;
use smallvec::SmallVec;

use crate::refs::{BlockRef, OpRef, RegionRef};
use crate::symbol::Symbol;
use crate::types::{Attribute, Location, PathInterner};

// ============================================================================
// Entity data types
// ============================================================================

/// Data for a single operation in the arena.
pub struct OperationData {
    pub location: Location,
    pub dialect: Symbol,
    pub name: Symbol,
    pub attributes: BTreeMap<Symbol, Attribute>,
    pub regions: SmallVec<[RegionRef; 4]>,
    pub parent_block: Option<BlockRef>,
}

/// Data for a basic block.
pub struct BlockData {
    pub location: Location,
    pub ops: SmallVec<[OpRef; 4]>,
    pub parent_region: Option<RegionRef>,
}

/// Data for a region (list of blocks).
pub struct RegionData {
    pub location: Location,
    pub blocks: SmallVec<[BlockRef; 4]>,
    pub parent_op: Option<OpRef>,
}

// ============================================================================
// IrContext
// ============================================================================

/// Arena-based mutable IR context.
///
/// Owns all IR entities and provides methods for creating, querying,
/// and mutating them.
pub struct IrContext {
    ops: PrimaryMap<OpRef, OperationData>,
    blocks: PrimaryMap<BlockRef, BlockData>,
    regions: PrimaryMap<RegionRef, RegionData>,

    pub paths: PathInterner,
}

impl IrContext {
    /// Create a new empty IR context.
    pub fn new() -> Self {
        Self {
            ops: PrimaryMap::new(),
            blocks: PrimaryMap::new(),
            regions: PrimaryMap::new(),
            paths: PathInterner::new(),
        }
    }

    // ========================================================================
    // Operation
    // ========================================================================

    /// Create a new operation.
    ///
    /// The operation must not have a `parent_block` set; listing it in a
    /// block passed to `create_block` attaches it.
    ///
    /// # Panics
    ///
    /// Panics if `data.parent_block` is `Some`, or if any region in
    /// `data.regions` already belongs to another operation.
    pub fn create_op(&mut self, data: OperationData) -> OpRef {
        assert!(
            data.parent_block.is_none(),
            "create_op: operation must not have parent_block set; \
             list it in create_block to attach it",
        );

        let regions: SmallVec<[RegionRef; 4]> = data.regions.clone();
        let op = self.ops.push(data);

        // Back-link owned regions to this operation
        for &r in &regions {
            if let Some(existing) = self.regions[r].parent_op {
                panic!(
                    "create_op: region {r} already belongs to operation {existing}; \
                     cannot reassign to {op}",
                );
            }
            self.regions[r].parent_op = Some(op);
        }

        op
    }

    /// Get immutable reference to operation data.
    pub fn op(&self, op: OpRef) -> &OperationData {
        &self.ops[op]
    }

    /// Look up an attribute on an operation.
    pub fn op_attr(&self, op: OpRef, key: Symbol) -> Option<&Attribute> {
        self.ops[op].attributes.get(&key)
    }

    /// Set an attribute on an operation in place, returning the previous value.
    pub fn set_op_attr(&mut self, op: OpRef, key: Symbol, value: Attribute) -> Option<Attribute> {
        self.ops[op].attributes.insert(key, value)
    }

    /// Number of operations ever created in this context.
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    // ========================================================================
    // Block
    // ========================================================================

    /// Create a new block.
    ///
    /// # Panics
    ///
    /// Panics if any op in `data.ops` already belongs to a block.
    pub fn create_block(&mut self, data: BlockData) -> BlockRef {
        let ops: SmallVec<[OpRef; 4]> = data.ops.clone();
        let block = self.blocks.push(data);
        for &op in &ops {
            if let Some(existing) = self.ops[op].parent_block {
                panic!(
                    "create_block: operation {op} already belongs to block {existing}; \
                     cannot reassign to {block}",
                );
            }
            self.ops[op].parent_block = Some(block);
        }
        block
    }

    /// Get immutable reference to block data.
    pub fn block(&self, b: BlockRef) -> &BlockData {
        &self.blocks[b]
    }

    /// Remove an operation from a block (does not destroy the operation).
    ///
    /// Only clears the operation's `parent_block` if it matches the given block.
    pub fn remove_op_from_block(&mut self, block: BlockRef, op: OpRef) {
        self.blocks[block].ops.retain(|o| *o != op);
        if self.ops[op].parent_block == Some(block) {
            self.ops[op].parent_block = None;
        }
    }

    // ========================================================================
    // Region
    // ========================================================================

    /// Create a new region.
    ///
    /// # Panics
    ///
    /// Panics if any block in `data.blocks` already belongs to another region.
    pub fn create_region(&mut self, data: RegionData) -> RegionRef {
        let region = self.regions.push(data);

        // Set parent_region on all blocks in this region
        let blocks: SmallVec<[BlockRef; 4]> = self.regions[region].blocks.clone();
        for &b in &blocks {
            if let Some(existing) = self.blocks[b].parent_region {
                panic!(
                    "create_region: block {b} already belongs to region {existing}; \
                     cannot reassign to {region}",
                );
            }
            self.blocks[b].parent_region = Some(region);
        }

        region
    }

    /// Get immutable reference to region data.
    pub fn region(&self, r: RegionRef) -> &RegionData {
        &self.regions[r]
    }

    /// Wrap operations into a single-block region, in order.
    pub fn region_of_ops(
        &mut self,
        location: Location,
        ops: impl IntoIterator<Item = OpRef>,
    ) -> RegionRef {
        let block = self.create_block(BlockData {
            location,
            ops: ops.into_iter().collect(),
            parent_region: None,
        });
        self.create_region(RegionData {
            location,
            blocks: smallvec::smallvec![block],
            parent_op: None,
        })
    }
}

impl Default for IrContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helper constructors for OperationData
// ============================================================================

impl OperationData {
    /// Create a new OperationData with the given basic fields.
    pub fn new(location: Location, dialect: Symbol, name: Symbol) -> Self {
        Self {
            location,
            dialect,
            name,
            attributes: BTreeMap::new(),
            regions: SmallVec::new(),
            parent_block: None,
        }
    }

    /// Check whether this operation is `dialect.name`.
    pub fn is(&self, dialect: Symbol, name: Symbol) -> bool {
        self.dialect == dialect && self.name == name
    }
}

/// Builder for constructing `OperationData`.
pub struct OperationDataBuilder {
    data: OperationData,
}

impl OperationDataBuilder {
    pub fn new(location: Location, dialect: Symbol, name: Symbol) -> Self {
        Self {
            data: OperationData::new(location, dialect, name),
        }
    }

    pub fn attr(mut self, key: impl Into<Symbol>, val: Attribute) -> Self {
        self.data.attributes.insert(key.into(), val);
        self
    }

    pub fn region(mut self, r: RegionRef) -> Self {
        self.data.regions.push(r);
        self
    }

    pub fn build(self) -> OperationData {
        self.data
    }
}
