//! Locations, attributes and path interning for the arena IR.

use std::collections::HashMap;

use cranelift_entity::PrimaryMap;

use crate::refs::PathRef;
use crate::symbol::Symbol;

// ============================================================================
// Location
// ============================================================================

/// A span of source text, as byte offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Source location of an operation. Copy-able, no lifetime parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub path: PathRef,
    pub span: Span,
}

impl Location {
    pub const fn new(path: PathRef, span: Span) -> Self {
        Self { path, span }
    }
}

// ============================================================================
// Attribute
// ============================================================================

/// IR attribute values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    String(String),
    /// Single interned symbol.
    Symbol(Symbol),
}

impl Attribute {
    /// Return the symbol if this is a `Symbol` attribute.
    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Attribute::Symbol(s) => Some(*s),
            Attribute::String(_) => None,
        }
    }
}

impl From<Symbol> for Attribute {
    fn from(value: Symbol) -> Self {
        Attribute::Symbol(value)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::String(value.to_string())
    }
}

// ============================================================================
// PathInterner
// ============================================================================

/// Deduplicating path (URI string) interner.
pub struct PathInterner {
    paths: PrimaryMap<PathRef, String>,
    dedup: HashMap<String, PathRef>,
}

impl PathInterner {
    pub fn new() -> Self {
        Self {
            paths: PrimaryMap::new(),
            dedup: HashMap::default(),
        }
    }

    /// Intern a path string, returning an existing ref if the string matches.
    pub fn intern(&mut self, path: String) -> PathRef {
        if let Some(&existing) = self.dedup.get(&path) {
            return existing;
        }
        let r = self.paths.push(path.clone());
        self.dedup.insert(path, r);
        r
    }

    /// Look up path string by reference.
    pub fn get(&self, r: PathRef) -> &str {
        &self.paths[r]
    }
}

impl Default for PathInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_interner_dedup() {
        let mut interner = PathInterner::new();
        let r1 = interner.intern("file:///test.bril".to_owned());
        let r2 = interner.intern("file:///test.bril".to_owned());
        assert_eq!(r1, r2, "same path must yield same PathRef");
    }

    #[test]
    fn path_interner_distinct() {
        let mut interner = PathInterner::new();
        let r1 = interner.intern("file:///a.bril".to_owned());
        let r2 = interner.intern("file:///b.bril".to_owned());
        assert_ne!(r1, r2);
        assert_eq!(interner.get(r1), "file:///a.bril");
        assert_eq!(interner.get(r2), "file:///b.bril");
    }

    #[test]
    fn symbol_attribute_accessor() {
        let attr = Attribute::from(Symbol::new("main"));
        assert_eq!(attr.as_symbol(), Some(Symbol::new("main")));
        assert_eq!(Attribute::from("main").as_symbol(), None);
    }
}
