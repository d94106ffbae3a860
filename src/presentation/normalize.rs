/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! PascalCase aliases for API payloads
//!
//! Parts of the backend answer in `snake_case` and parts in `PascalCase`.
//! The helpers here add the PascalCase spelling of every key next to the
//! original so views can read either.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static WORD_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\s]+").expect("valid regex"));

/// `vendor_name` → `VendorName`; each underscore- or space-separated word
/// gets an upper-case first letter, the rest is kept
#[must_use]
pub fn to_pascal_case(key: &str) -> String {
    WORD_BREAK
        .split(key)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Copy of `value` with a PascalCase alias for every key
///
/// Existing keys are never overwritten. Nested objects are aliased
/// recursively under their PascalCase key. Non-objects are returned as is.
#[must_use]
pub fn add_pascal_aliases(value: &Value) -> Value {
    let Value::Object(source) = value else {
        return value.clone();
    };

    let mut out = source.clone();
    for (key, nested) in source {
        let pascal = to_pascal_case(key);
        if !out.contains_key(&pascal) {
            out.insert(pascal.clone(), nested.clone());
        }
        if nested.is_object() {
            let aliased = out.get(&pascal).map(add_pascal_aliases);
            if let Some(aliased) = aliased {
                out.insert(pascal, aliased);
            }
        }
    }
    Value::Object(out)
}

/// Applies [`add_pascal_aliases`] to every element of an array
#[must_use]
pub fn normalize_array(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(add_pascal_aliases).collect()),
        other => other.clone(),
    }
}
