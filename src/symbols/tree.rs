use thiserror::Error;

use super::{Symbol, SymbolId};

/// Errors raised while populating a [`SymbolTree`].
#[derive(Debug, Error)]
pub enum TreeError {
    /// The given id does not name a symbol already in the tree.
    #[error("unknown enclosing symbol: {0:?}")]
    UnknownEnclosing(SymbolId),
}

#[derive(Debug)]
struct Node {
    symbol: Symbol,
    parent: Option<SymbolId>,
}

/// Append-only arena of symbols linked by lexical enclosure.
///
/// A member can only be inserted under a parent that is already present, so
/// the enclosure relation is acyclic by construction: every upward walk is
/// strictly decreasing in arena index and terminates at a root.
#[derive(Debug, Default)]
pub struct SymbolTree {
    nodes: Vec<Node>,
}

impl SymbolTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level symbol with no enclosing element.
    pub fn insert_root(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId::new(self.nodes.len());
        self.nodes.push(Node {
            symbol,
            parent: None,
        });
        id
    }

    /// Insert a symbol lexically enclosed by `parent`.
    ///
    /// Fails when `parent` is not in the tree yet.
    pub fn insert_member(
        &mut self,
        parent: SymbolId,
        symbol: Symbol,
    ) -> Result<SymbolId, TreeError> {
        if parent.index() >= self.nodes.len() {
            return Err(TreeError::UnknownEnclosing(parent));
        }
        let id = SymbolId::new(self.nodes.len());
        self.nodes.push(Node {
            symbol,
            parent: Some(parent),
        });
        Ok(id)
    }

    /// Look up a symbol by id.
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.nodes.get(id.index()).map(|node| &node.symbol)
    }

    /// The symbol lexically enclosing `id`, if any.
    pub fn enclosing(&self, id: SymbolId) -> Option<SymbolId> {
        self.nodes.get(id.index()).and_then(|node| node.parent)
    }

    /// Walk the enclosure chain upward, nearest ancestor first.
    pub fn ancestors(&self, id: SymbolId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.enclosing(id),
        }
    }

    /// Number of symbols in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no symbols have been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over a symbol's enclosure chain, nearest ancestor first.
pub struct Ancestors<'a> {
    tree: &'a SymbolTree,
    next: Option<SymbolId>,
}

impl Iterator for Ancestors<'_> {
    type Item = SymbolId;

    fn next(&mut self) -> Option<SymbolId> {
        let current = self.next?;
        self.next = self.tree.enclosing(current);
        Some(current)
    }
}
