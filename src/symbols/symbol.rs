use smol_str::SmolStr;

/// Identifier of a symbol in the tree arena, compact enough to copy freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Wrap an arena index.
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The arena index this id stands for.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of documented element a symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Type,
    Constructor,
    Method,
    Parameter,
    TypeParameter,
}

impl SymbolKind {
    /// Returns true for the two parameter kinds, whose descriptions come
    /// from the enclosing element's parameter tags rather than an attached
    /// comment of their own.
    pub fn is_parameter_like(self) -> bool {
        matches!(self, SymbolKind::Parameter | SymbolKind::TypeParameter)
    }
}

/// A documented element supplied by the host.
///
/// Carries only what resolution needs: the simple name (used for the
/// `...Event` classification and for parameter-tag lookup), the element
/// kind, and the raw comment text as attached in source, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: SmolStr,
    kind: SymbolKind,
    raw_comment: Option<String>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            kind,
            raw_comment: None,
        }
    }

    /// Attach the raw comment text as written in source.
    pub fn with_comment(mut self, raw: impl Into<String>) -> Self {
        self.raw_comment = Some(raw.into());
        self
    }

    /// Returns the simple name of this symbol
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element kind of this symbol
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// The raw comment attached to this symbol, or None when the source
    /// carried none.
    pub fn raw_comment(&self) -> Option<&str> {
        self.raw_comment.as_deref()
    }
}
