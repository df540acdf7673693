//! Schema evaluation against a target object
//!
//! Evaluation semantics:
//! - Every declared field must be present and pass its predicate
//! - A missing declared field always fails, whatever the extra-key policy
//! - Undeclared keys fail the target unless explicitly allowed
//! - An empty schema validates nothing (fail closed)

use super::map::SchemaMap;
use crate::value::Value;

/// Evaluates a schema map against a target value.
///
/// Returns `false` for non-object targets and for empty schemas. Stops at
/// the first failing field; the boolean result is identical to evaluating
/// all of them. With `allow_additional` unset, any target key outside the
/// declared field set rejects the whole target.
///
/// Total function: never errors, never mutates the target.
pub fn evaluate(schema: &SchemaMap, target: &Value, allow_additional: bool) -> bool {
    if schema.is_empty() {
        return false;
    }

    let Some(entries) = target.as_object() else {
        return false;
    };

    for (name, predicate) in schema.iter() {
        match entries.get(name) {
            Some(value) => {
                if !predicate.check(value) {
                    return false;
                }
            }
            None => return false,
        }
    }

    if !allow_additional && entries.keys().any(|key| !schema.contains(key)) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::RuleChain;
    use serde_json::json;

    fn user_schema() -> SchemaMap {
        SchemaMap::new()
            .field("name", RuleChain::new().string().compile())
            .field("age", RuleChain::new().number().above(0.0).compile())
    }

    #[test]
    fn test_all_fields_present_and_passing() {
        let target = Value::from(json!({ "name": "alice", "age": 30 }));
        assert!(evaluate(&user_schema(), &target, false));
    }

    #[test]
    fn test_missing_declared_field_fails_regardless_of_policy() {
        let target = Value::from(json!({ "name": "alice" }));
        assert!(!evaluate(&user_schema(), &target, false));
        assert!(!evaluate(&user_schema(), &target, true));
    }

    #[test]
    fn test_failing_predicate_rejects_target() {
        let target = Value::from(json!({ "name": "alice", "age": -1 }));
        assert!(!evaluate(&user_schema(), &target, false));
    }

    #[test]
    fn test_extra_key_policy() {
        let target = Value::from(json!({ "name": "alice", "age": 30, "extra": true }));
        assert!(!evaluate(&user_schema(), &target, false));
        assert!(evaluate(&user_schema(), &target, true));
    }

    #[test]
    fn test_empty_schema_fails_closed() {
        let target = Value::from(json!({ "anything": 1 }));
        assert!(!evaluate(&SchemaMap::new(), &target, false));
        assert!(!evaluate(&SchemaMap::new(), &target, true));
    }

    #[test]
    fn test_non_object_target_fails() {
        assert!(!evaluate(&user_schema(), &Value::from("not an object"), true));
        assert!(!evaluate(&user_schema(), &Value::Null, true));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let schema = user_schema();
        let target = Value::from(json!({ "name": "alice", "age": 30 }));
        for _ in 0..100 {
            assert!(evaluate(&schema, &target, false));
        }
    }
}
