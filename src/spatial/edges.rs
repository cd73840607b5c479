//! Edge kinds and the registry declaring which kinds may meet
//!
//! Kinds are interned from names at configuration time. Compatibility is kept
//! as a square bit matrix so that a lookup during generation is two indexed
//! reads.

use bitvec::prelude::*;
use std::collections::HashMap;
use std::fmt;

use crate::io::error::{Result, TileMapError};

/// Opaque identifier of a connection type on a tile side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKind(usize);

impl EdgeKind {
    /// Wrap a raw registry index
    ///
    /// Kinds built this way are only meaningful to the registry that
    /// allocated the index; catalogs reject indices their registry lacks.
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Registry index of this kind
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// Interned edge kinds and their symmetric compatibility relation
///
/// Pairs are incompatible unless declared, including a kind with itself.
#[derive(Debug, Clone, Default)]
pub struct EdgeRegistry {
    names: Vec<String>,
    lookup: HashMap<String, EdgeKind>,
    compatibility: Vec<BitVec>,
}

impl EdgeRegistry {
    /// Create a registry with no edge kinds
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the kind named `name`, allocating it on first use
    pub fn intern(&mut self, name: &str) -> EdgeKind {
        if let Some(&kind) = self.lookup.get(name) {
            return kind;
        }

        let kind = EdgeKind(self.names.len());
        for row in &mut self.compatibility {
            row.push(false);
        }
        self.compatibility.push(bitvec![0; kind.0 + 1]);
        self.names.push(name.to_owned());
        self.lookup.insert(name.to_owned(), kind);
        kind
    }

    /// Declare that `a` and `b` may face each other
    ///
    /// # Errors
    ///
    /// Returns `UnknownEdge` if either kind was not allocated by this registry
    pub fn allow(&mut self, a: EdgeKind, b: EdgeKind) -> Result<()> {
        self.check(a)?;
        self.check(b)?;

        for (row, col) in [(a.0, b.0), (b.0, a.0)] {
            if let Some(mut bit) = self
                .compatibility
                .get_mut(row)
                .and_then(|bits| bits.get_mut(col))
            {
                *bit = true;
            }
        }
        Ok(())
    }

    /// Intern both names and declare them compatible
    ///
    /// # Errors
    ///
    /// Propagates errors from [`EdgeRegistry::allow`]
    pub fn allow_names(&mut self, a: &str, b: &str) -> Result<(EdgeKind, EdgeKind)> {
        let first = self.intern(a);
        let second = self.intern(b);
        self.allow(first, second)?;
        Ok((first, second))
    }

    /// Whether `a` may face `b`
    pub fn compatible(&self, a: EdgeKind, b: EdgeKind) -> bool {
        self.compatibility
            .get(a.0)
            .and_then(|bits| bits.get(b.0))
            .as_deref()
            == Some(&true)
    }

    /// Every kind `kind` may face, in allocation order
    pub fn partners(&self, kind: EdgeKind) -> Vec<EdgeKind> {
        self.compatibility
            .get(kind.0)
            .map_or_else(Vec::new, |bits| bits.iter_ones().map(EdgeKind).collect())
    }

    /// Name a kind was interned under
    pub fn name(&self, kind: EdgeKind) -> Option<&str> {
        self.names.get(kind.0).map(String::as_str)
    }

    /// Kind interned under `name`, if any
    pub fn lookup(&self, name: &str) -> Option<EdgeKind> {
        self.lookup.get(name).copied()
    }

    /// Whether this registry allocated `kind`
    pub const fn contains(&self, kind: EdgeKind) -> bool {
        kind.0 < self.names.len()
    }

    /// Number of interned kinds
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no kinds are interned
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Reject kinds this registry never allocated
    ///
    /// # Errors
    ///
    /// Returns `UnknownEdge` for foreign or out-of-range kinds
    pub fn check(&self, kind: EdgeKind) -> Result<()> {
        if self.contains(kind) {
            Ok(())
        } else {
            Err(TileMapError::UnknownEdge {
                edge: kind.0,
                known: self.names.len(),
            })
        }
    }
}
