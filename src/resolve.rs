//! Comment resolution: per-entry-point merge algorithms.
//!
//! Each entry point performs a bounded upward walk over the symbol tree,
//! extracting the element's own documentation and filling the gaps from its
//! lexical ancestors. Precedence is deterministic: the queried element's own
//! comment always wins, then any caller-supplied seed, then the ancestors,
//! nearest first.

use tracing::{trace, warn};

use crate::comment::DocumentationComment;
use crate::extract::Extractor;
use crate::page::PageInfo;
use crate::symbols::{Symbol, SymbolId, SymbolKind, SymbolTree};

/// Classification of a symbol for resolution purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    /// Resolved through the ordinary ancestor walk only.
    Ordinary,
    /// Carries auxiliary event documentation, folded in after the walk.
    EventLike,
}

/// Classify a symbol once, before resolution.
///
/// Event-like symbols are recognized by naming convention: a *type* whose
/// simple name ends in `Event`. The check never applies to other kinds.
pub fn classify(symbol: &Symbol) -> TypeClass {
    if symbol.kind() == SymbolKind::Type && symbol.name().ends_with("Event") {
        TypeClass::EventLike
    } else {
        TypeClass::Ordinary
    }
}

/// Resolves documentation comments against a symbol tree.
///
/// All resolution logic lives here, keeping [`SymbolTree`] a pure data
/// structure. The resolver holds no state across calls; every entry point is
/// an independent bounded walk, so sharing one resolver across threads is
/// safe as long as the tree is not mutated concurrently.
pub struct CommentResolver<'a, X: Extractor> {
    tree: &'a SymbolTree,
    extractor: &'a X,
}

impl<'a, X: Extractor> CommentResolver<'a, X> {
    pub fn new(tree: &'a SymbolTree, extractor: &'a X) -> Self {
        Self { tree, extractor }
    }

    pub fn tree(&self) -> &SymbolTree {
        self.tree
    }

    // ============================================================
    // Entry points
    // ============================================================

    /// Resolve a type symbol.
    ///
    /// Event-like types (see [`classify`]) additionally fold in the
    /// auxiliary event record via an asymmetric fast-merge: its description
    /// is appended after the resolved description (or stands alone when the
    /// walk produced none), and its examples are always discarded.
    pub fn resolve_type(&self, type_symbol: SymbolId) -> DocumentationComment {
        let base = self.resolve_element(type_symbol, &DocumentationComment::empty());
        let Some(symbol) = self.tree.get(type_symbol) else {
            return base;
        };
        match classify(symbol) {
            TypeClass::Ordinary => base,
            TypeClass::EventLike => {
                trace!("[COMMENT] '{}' is event-like", symbol.name());
                let event = self.extractor.event_data(symbol.raw_comment(), symbol);
                fast_merge(base, &event)
            }
        }
    }

    /// Resolve a type symbol and wrap the result as its page's context,
    /// ready to hand to member resolution.
    pub fn page_for_type(&self, type_symbol: SymbolId) -> PageInfo {
        PageInfo::new(self.resolve_type(type_symbol))
    }

    /// Resolve a constructor in the context of its type's page.
    pub fn resolve_constructor(&self, ctor: SymbolId, page: &PageInfo) -> DocumentationComment {
        self.resolve_member(ctor, page)
    }

    /// Resolve a method in the context of its type's page.
    pub fn resolve_method(&self, method: SymbolId, page: &PageInfo) -> DocumentationComment {
        self.resolve_member(method, page)
    }

    fn resolve_member(&self, member: SymbolId, page: &PageInfo) -> DocumentationComment {
        let comment = self.resolve_element(member, page.class_comment());
        // Re-merge with the class comment so its example data is pulled in
        // even when an ancestor already supplied a description that masked
        // the seed during the walk.
        comment.merge(page.class_comment())
    }

    /// Resolve a parameter: its tag-derived description, backed by the
    /// fully resolved enclosing element (chiefly for examples, since
    /// parameters rarely define their own).
    pub fn resolve_parameter(&self, param: SymbolId) -> DocumentationComment {
        self.resolve_parameter_like(param)
    }

    /// Resolve a type parameter. Same algorithm as
    /// [`resolve_parameter`](Self::resolve_parameter).
    pub fn resolve_type_parameter(&self, type_param: SymbolId) -> DocumentationComment {
        self.resolve_parameter_like(type_param)
    }

    fn resolve_parameter_like(&self, param: SymbolId) -> DocumentationComment {
        let Some(symbol) = self.tree.get(param) else {
            return DocumentationComment::empty();
        };
        if !symbol.kind().is_parameter_like() {
            warn!(
                "[COMMENT] '{}' queried as a parameter but is {:?}",
                symbol.name(),
                symbol.kind()
            );
        }
        let enclosing_id = self.tree.enclosing(param);
        let enclosing = enclosing_id.and_then(|id| self.tree.get(id));
        let tag_description = self.extractor.parameter_description(symbol, enclosing);

        let enclosing_comment = match enclosing_id {
            Some(id) => self.resolve_element(id, &DocumentationComment::empty()),
            None => DocumentationComment::empty(),
        };
        tag_description.merge(&enclosing_comment)
    }

    // ============================================================
    // Core walk
    // ============================================================

    /// Resolve `element` against a caller-supplied seed record.
    ///
    /// Precedence, highest first: the element's own comment, the seed, then
    /// each lexical ancestor's own comment, nearest ancestor first. The walk
    /// is a plain fold over [`SymbolTree::ancestors`]; the arena guarantees
    /// the chain is finite.
    pub fn resolve_element(
        &self,
        element: SymbolId,
        seed: &DocumentationComment,
    ) -> DocumentationComment {
        let mut resolved = self.own_comment(element).merge(seed);
        for ancestor in self.tree.ancestors(element) {
            resolved = resolved.merge(&self.own_comment(ancestor));
        }
        resolved
    }

    /// The record extracted from the element's own attached comment alone.
    fn own_comment(&self, element: SymbolId) -> DocumentationComment {
        let Some(symbol) = self.tree.get(element) else {
            return DocumentationComment::empty();
        };
        let raw = symbol.raw_comment();
        let description = self.extractor.description(raw, symbol);
        let examples = self.extractor.examples(raw, symbol);
        trace!(
            "[COMMENT] own comment of '{}': description={} examples={}",
            symbol.name(),
            description.is_some(),
            examples.len(),
        );
        DocumentationComment::new(description, examples)
    }
}

/// Fold an event record into an already-resolved type record.
///
/// Asymmetric on purpose, unlike [`DocumentationComment::merge`]: event data
/// contributes description text only, and when both descriptions exist they
/// are joined with a blank line instead of one overriding the other. The
/// resolved examples pass through untouched.
fn fast_merge(base: DocumentationComment, event: &DocumentationComment) -> DocumentationComment {
    let description = match (base.description(), event.description()) {
        (Some(own), Some(extra)) => Some(format!("{own}\n\n{extra}")),
        (Some(own), None) => Some(own.to_string()),
        (None, extra) => extra.map(str::to_string),
    };
    DocumentationComment::new(description, base.examples().clone())
}
