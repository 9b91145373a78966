use super::ExampleData;

/// A resolved documentation record: optional description text plus example
/// data.
///
/// Records are never mutated after construction; every merge allocates a
/// fresh record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentationComment {
    description: Option<String>,
    examples: ExampleData,
}

impl DocumentationComment {
    pub fn new(description: Option<String>, examples: ExampleData) -> Self {
        Self {
            description,
            examples,
        }
    }

    /// The canonical empty record: no description, no examples. Two-sided
    /// identity for [`merge`](Self::merge).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A record carrying only description text.
    pub fn described(description: impl Into<String>) -> Self {
        Self::new(Some(description.into()), ExampleData::empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    pub fn examples(&self) -> &ExampleData {
        &self.examples
    }

    /// True when there is neither a description nor any examples.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.examples.is_empty()
    }

    /// Merge with a lower-precedence record.
    ///
    /// The description is taken from `self` when present, otherwise from
    /// `fallback` — never concatenated. Examples are the keyed union with
    /// `self`'s entries first and winning per name. Merging with the empty
    /// record returns the other operand unchanged.
    pub fn merge(&self, fallback: &DocumentationComment) -> DocumentationComment {
        DocumentationComment {
            description: self
                .description
                .clone()
                .or_else(|| fallback.description.clone()),
            examples: self.examples.merge(&fallback.examples),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Example;

    fn record(description: Option<&str>, example_names: &[&str]) -> DocumentationComment {
        DocumentationComment::new(
            description.map(str::to_string),
            ExampleData::from_examples(
                example_names
                    .iter()
                    .map(|name| Example::single(*name, format!("{name}()"))),
            ),
        )
    }

    #[test]
    fn test_empty_record_is_empty() {
        assert!(DocumentationComment::empty().is_empty());
        assert!(!DocumentationComment::described("text").is_empty());
        assert!(!record(None, &["e"]).is_empty());
    }

    #[test]
    fn test_merge_identity() {
        let full = record(Some("docs"), &["spawn"]);
        assert_eq!(full.merge(&DocumentationComment::empty()), full);
        assert_eq!(DocumentationComment::empty().merge(&full), full);
    }

    #[test]
    fn test_merge_description_primary_wins() {
        let merged = record(Some("primary"), &[]).merge(&record(Some("fallback"), &[]));
        assert_eq!(merged.description(), Some("primary"));
    }

    #[test]
    fn test_merge_description_falls_back() {
        let merged = record(None, &["e1"]).merge(&record(Some("fallback"), &["e2"]));
        assert_eq!(merged.description(), Some("fallback"));
        assert_eq!(merged.examples().len(), 2);
    }
}
