//! # docfold
//!
//! Documentation comment resolution and merging for symbol trees.
//!
//! Given a tree of documented elements (types enclose constructors and
//! methods, which enclose parameters and type parameters), `docfold`
//! produces one resolved [`DocumentationComment`] per queried element.
//! An element's own comment is incomplete by design: missing description
//! text and usage examples are inherited from its lexical ancestors, and
//! types following the `...Event` naming convention fold in auxiliary
//! description text from a second extraction source.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → CommentResolver entry points (per-element resolution)
//!   ↓
//! extract   → Extractor contract, verbatim stub
//!   ↓
//! page      → PageInfo (pre-resolved class-level comment)
//!   ↓
//! comment   → DocumentationComment, ExampleData, merge rules
//!   ↓
//! symbols   → Symbol, SymbolKind, SymbolTree arena
//! ```
//!
//! Comment *parsing* stays with the host: an [`Extractor`] implementation
//! turns raw comment text into description strings and example data, and the
//! resolver only orchestrates extraction calls and merges the fragments.

// ============================================================================
// MODULES (dependency order: symbols → comment → page → extract → resolve)
// ============================================================================

/// Symbol tree: element kinds, raw comments, lexical enclosure
pub mod symbols;

/// Data model: documentation records, example data, merge rules
pub mod comment;

/// Page context: pre-resolved class-level records
pub mod page;

/// Extraction adapter contract and the verbatim stub
pub mod extract;

/// Comment resolver: per-entry-point resolution algorithms
pub mod resolve;

// Re-export commonly needed items
pub use comment::{DocumentationComment, Example, ExampleData};
pub use extract::{Extractor, VerbatimExtractor};
pub use page::PageInfo;
pub use resolve::{CommentResolver, TypeClass, classify};
pub use symbols::{Symbol, SymbolId, SymbolKind, SymbolTree, TreeError};
