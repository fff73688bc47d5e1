//! Search/replacement mapping and its application to text
//!
//! A `Mapping` keeps its pairs in insertion order so that `apply` is
//! deterministic. Overwriting a key keeps the key at its first position.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::ApplyOrder;

/// Ordered set of (search, replacement) pairs with unique, non-empty search strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, String)>,
    // search string -> position in `entries`
    index: HashMap<String, usize>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from two position-paired sequences.
    ///
    /// `mappings[i]` is replaced by `replacements[i]`. A search string given
    /// twice keeps the later replacement.
    pub fn from_pairs<S: AsRef<str>>(mappings: &[S], replacements: &[S]) -> DomainResult<Self> {
        if mappings.len() != replacements.len() {
            return Err(DomainError::ArgumentMismatch {
                mappings: mappings.len(),
                replacements: replacements.len(),
            });
        }

        let mut mapping = Self::new();
        for (search, replacement) in mappings.iter().zip(replacements) {
            mapping.insert(search.as_ref(), replacement.as_ref())?;
        }
        Ok(mapping)
    }

    /// Set `search` to `replacement`, returning the previous replacement if any.
    pub fn insert(
        &mut self,
        search: impl Into<String>,
        replacement: impl Into<String>,
    ) -> DomainResult<Option<String>> {
        let search = search.into();
        if search.is_empty() {
            return Err(DomainError::EmptySearch);
        }
        Ok(self.upsert(search, replacement.into()))
    }

    fn upsert(&mut self, search: String, replacement: String) -> Option<String> {
        match self.index.get(&search) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, replacement)),
            None => {
                self.index.insert(search.clone(), self.entries.len());
                self.entries.push((search, replacement));
                None
            }
        }
    }

    /// Replacement configured for `search`.
    pub fn get(&self, search: &str) -> Option<&str> {
        self.index
            .get(search)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `overlay` into self. Keys present in both take the overlay's value.
    pub fn merge(&mut self, overlay: Mapping) {
        for (search, replacement) in overlay.entries {
            self.upsert(search, replacement);
        }
    }

    /// Apply all pairs in insertion order.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with(text, ApplyOrder::Insertion)
    }

    /// Apply all pairs in the given order.
    ///
    /// Each pair replaces every non-overlapping literal occurrence of its
    /// search string in the output of the previous pair.
    #[instrument(level = "debug", skip(self, text), fields(pairs = self.len()))]
    pub fn apply_with(&self, text: &str, order: ApplyOrder) -> String {
        let mut result = text.to_string();
        for (search, replacement) in self.ordered(order) {
            trace!("replacing {:?} with {:?}", search, replacement);
            if result.contains(search) {
                result = result.replace(search, replacement);
            }
        }
        result
    }

    fn ordered(&self, order: ApplyOrder) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        if order == ApplyOrder::LongestFirst {
            // stable: equal lengths keep insertion order
            pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }
        pairs
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MappingVisitor)
    }
}

struct MappingVisitor;

impl<'de> Visitor<'de> for MappingVisitor {
    type Value = Mapping;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object of string keys to string values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((search, replacement)) = access.next_entry::<String, String>()? {
            mapping
                .insert(search, replacement)
                .map_err(de::Error::custom)?;
        }
        Ok(mapping)
    }
}
