use indexmap::IndexMap;
use smol_str::SmolStr;

/// A single named usage example: a tag name plus the ordered textual values
/// collected under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    name: SmolStr,
    values: Vec<String>,
}

impl Example {
    pub fn new(name: impl Into<SmolStr>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Convenience constructor for the common single-value case.
    pub fn single(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self::new(name, vec![value.into()])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Ordered collection of usage examples, keyed by tag name.
///
/// Always present as a value; "no examples" is the empty collection.
/// Entries keep insertion order (IndexMap), so merge output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExampleData {
    entries: IndexMap<SmolStr, Example>,
}

impl ExampleData {
    /// The empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build example data from an iterator of examples. Later duplicates of
    /// a name replace earlier ones.
    pub fn from_examples(examples: impl IntoIterator<Item = Example>) -> Self {
        let mut data = Self::default();
        for example in examples {
            data.add(example);
        }
        data
    }

    /// Add an example, replacing any existing entry with the same name.
    pub fn add(&mut self, example: Example) {
        self.entries.insert(example.name.clone(), example);
    }

    /// Look up an example by tag name.
    pub fn get(&self, name: &str) -> Option<&Example> {
        self.entries.get(name)
    }

    /// Iterate over the examples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.entries.values()
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no examples are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combine with a lower-precedence collection.
    ///
    /// All of `self` first, then `fallback` entries under names `self` does
    /// not define, in their original order. Per duplicate name, `self` wins.
    /// Every example name present in either input is present in the result.
    pub fn merge(&self, fallback: &ExampleData) -> ExampleData {
        let mut merged = self.clone();
        for example in fallback.iter() {
            if !merged.entries.contains_key(example.name.as_str()) {
                merged.add(example.clone());
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replaces_same_name() {
        let mut data = ExampleData::empty();
        data.add(Example::single("spawn", "world.spawn(pig)"));
        data.add(Example::single("spawn", "world.spawn(cow)"));

        assert_eq!(data.len(), 1);
        assert_eq!(data.get("spawn").unwrap().values(), ["world.spawn(cow)"]);
    }

    #[test]
    fn test_merge_is_keyed_union() {
        let primary = ExampleData::from_examples([
            Example::single("spawn", "world.spawn(pig)"),
            Example::single("kill", "pig.kill()"),
        ]);
        let fallback = ExampleData::from_examples([
            Example::single("kill", "cow.kill()"),
            Example::single("feed", "pig.feed(carrot)"),
        ]);

        let merged = primary.merge(&fallback);
        let names: Vec<_> = merged.iter().map(Example::name).collect();
        assert_eq!(names, ["spawn", "kill", "feed"]);
        // Primary wins per duplicate name.
        assert_eq!(merged.get("kill").unwrap().values(), ["pig.kill()"]);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let data = ExampleData::from_examples([Example::single("spawn", "world.spawn(pig)")]);
        assert_eq!(data.merge(&ExampleData::empty()), data);
        assert_eq!(ExampleData::empty().merge(&data), data);
    }
}
