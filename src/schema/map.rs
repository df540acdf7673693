//! Schema map: field name to compiled predicate

use std::collections::HashMap;

use crate::chain::CompiledPredicate;

/// A mapping from field name to compiled predicate.
///
/// Built once at schema-definition time and read many times; the field set
/// is fixed from the evaluator's point of view. Field order is irrelevant.
#[derive(Debug, Clone, Default)]
pub struct SchemaMap {
    fields: HashMap<String, CompiledPredicate>,
}

impl SchemaMap {
    /// Creates an empty schema map.
    ///
    /// An empty map never validates anything: the evaluator fails closed
    /// rather than treating "no constraints" as a pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, fluently.
    pub fn field(mut self, name: impl Into<String>, predicate: CompiledPredicate) -> Self {
        self.fields.insert(name.into(), predicate);
        self
    }

    /// Adds a field in place.
    pub fn insert(&mut self, name: impl Into<String>, predicate: CompiledPredicate) {
        self.fields.insert(name.into(), predicate);
    }

    /// Looks up the predicate for a field.
    pub fn get(&self, name: &str) -> Option<&CompiledPredicate> {
        self.fields.get(name)
    }

    /// Whether a field is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names, sorted alphabetically.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Iterates over declared fields and their predicates.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledPredicate)> {
        self.fields.iter().map(|(name, p)| (name.as_str(), p))
    }
}
