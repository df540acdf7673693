//! Structure matching: recursive key-topology comparison
//!
//! A structure template is an object whose values are placeholders, except
//! where they are objects themselves, in which case the match recurses.
//! Template values are never inspected for content.

use crate::value::Value;

/// Matches a target object's key shape against a template.
///
/// Both sides must be objects at every compared level. The key counts must
/// be exactly equal (checked first, as a fast rejection), every template
/// key must exist in the target, and wherever both sides hold an object
/// under the same key the nested shapes must match too. Stops at the first
/// violation.
pub fn matches(template: &Value, target: &Value) -> bool {
    let (Some(expected), Some(entries)) = (template.as_object(), target.as_object()) else {
        return false;
    };

    // Fast case, as the amount of keys is wrong.
    if entries.len() != expected.len() {
        return false;
    }

    for (key, placeholder) in expected {
        let Some(value) = entries.get(key) else {
            return false;
        };

        if placeholder.as_object().is_some()
            && value.as_object().is_some()
            && !matches(placeholder, value)
        {
            return false;
        }
    }

    true
}
