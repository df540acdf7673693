//! Boolean validation facade
//!
//! The outward face of the toolkit: a `Gatekeeper` owns a schema registry
//! and hands out per-value [`Against`] views that answer only in booleans.
//! Resolution failures (unknown schema names) degrade to `false` with a
//! warning log line; nothing on this surface errors or panics.

use crate::observability::{Logger, Severity};
use crate::registry::{RegistryResult, SchemaRegistry};
use crate::schema::{evaluate, structure, SchemaMap};
use crate::value::Value;

/// Owns the schema registry and produces validation views over values.
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    registry: SchemaRegistry,
}

impl Gatekeeper {
    /// Creates a gatekeeper with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gatekeeper around an existing registry.
    pub fn with_registry(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Registers a named schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already registered.
    pub fn register(&mut self, name: impl Into<String>, schema: SchemaMap) -> RegistryResult<()> {
        self.registry.register(name, schema)
    }

    /// Returns the owned registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Pairs a value with the registry for validation.
    pub fn against<'a>(&'a self, value: &'a Value) -> Against<'a> {
        Against {
            registry: &self.registry,
            value,
        }
    }
}

/// A value paired with a registry, ready to be validated.
#[derive(Debug, Clone, Copy)]
pub struct Against<'a> {
    registry: &'a SchemaRegistry,
    value: &'a Value,
}

impl Against<'_> {
    /// Validates the value against a registered schema, rejecting
    /// undeclared keys.
    pub fn schema(&self, name: &str) -> bool {
        self.resolve(name, false)
    }

    /// Validates the value against a registered schema, ignoring
    /// undeclared keys.
    pub fn schema_allowing_additional(&self, name: &str) -> bool {
        self.resolve(name, true)
    }

    /// Validates the value against a schema map directly, bypassing the
    /// registry.
    pub fn schema_map(&self, schema: &SchemaMap, allow_additional: bool) -> bool {
        evaluate(schema, self.value, allow_additional)
    }

    /// Matches the value's key shape against a structure template.
    pub fn structure(&self, template: &Value) -> bool {
        structure::matches(template, self.value)
    }

    fn resolve(&self, name: &str, allow_additional: bool) -> bool {
        match self.registry.get(name) {
            Some(schema) => evaluate(schema, self.value, allow_additional),
            None => {
                // Fail closed: an unresolvable schema is a failed
                // validation, not an error.
                Logger::log(
                    Severity::Warn,
                    "schema_resolution_failed",
                    &[("schema", name)],
                );
                false
            }
        }
    }
}
