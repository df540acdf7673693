//! Explicit schema registry
//!
//! Named schemas live in a registry owned by whoever validates with them.
//! Registration is explicit and happens up front; lookups never populate
//! the registry as a side effect, and a schema name cannot be rebound once
//! registered.

use std::collections::HashMap;

use thiserror::Error;

use crate::observability::{Logger, Severity};
use crate::schema::SchemaMap;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised while managing the registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A schema name cannot be rebound once registered
    #[error("schema '{0}' is already registered")]
    AlreadyRegistered(String),
}

/// An in-memory registry mapping schema names to schema maps.
///
/// Missing names are not an error at validation time: callers resolving a
/// name that was never registered get a failed validation, not a panic.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, SchemaMap>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under a name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AlreadyRegistered` if the name is taken;
    /// registered schemas are immutable.
    pub fn register(&mut self, name: impl Into<String>, schema: SchemaMap) -> RegistryResult<()> {
        let name = name.into();
        if self.schemas.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }

        let field_count = schema.field_count().to_string();
        Logger::log(
            Severity::Info,
            "schema_registered",
            &[("schema", name.as_str()), ("fields", field_count.as_str())],
        );
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Looks up a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaMap> {
        self.schemas.get(name)
    }

    /// Whether a schema name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Registered schema names, sorted alphabetically.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}
