//! # Documentation Records
//!
//! The resolved-output data model: a [`DocumentationComment`] pairs optional
//! description text with [`ExampleData`]. Records are immutable after
//! construction; merging two records always produces a new one.
//!
//! "No documentation" is a first-class value here, not an error: the empty
//! record (absent description, empty examples) is the identity element for
//! [`DocumentationComment::merge`].

mod examples;
mod record;

pub use examples::{Example, ExampleData};
pub use record::DocumentationComment;
