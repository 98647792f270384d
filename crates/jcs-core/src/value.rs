use std::collections::HashSet;

use crate::error::{Error, ErrorClass, Result};
use crate::options::Options;
use crate::unicode::is_noncharacter;

/// A parsed or programmatically constructed JSON value (§3).
///
/// A plain tagged sum — six variants, matched exhaustively by the serializer.
/// No subtype polymorphism, no `HashMap<String, Box<dyn Any>>`: this is the
/// one representation the whole crate agrees on.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// An IEEE 754 binary64. Must be finite; `-0.0` is tolerated here and
    /// normalized to `0` only at serialization time.
    Number(f64),
    /// A decoded Unicode scalar sequence (no escapes, no lone surrogates).
    String(String),
    /// An ordered sequence of values; order is preserved verbatim.
    Array(Vec<Value>),
    /// An ordered sequence of `(key, value)` members. Insertion order is
    /// preserved by the parser; sorting happens only in the serializer.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Re-validates the invariants the parser would have already enforced
    /// (§3 invariants 1-4): finite numbers, valid scalar strings/keys, unique
    /// object keys, and depth/cardinality bounds. Used by the serializer as
    /// defense in depth against trees assembled by hand instead of by
    /// [`crate::parser::parse`].
    pub fn validate(&self, opts: Options) -> Result<()> {
        validate_rec(self, opts, 0, &mut 0)
    }
}

fn validate_string(s: &str) -> Result<()> {
    for c in s.chars() {
        let cp = u32::from(c);
        if is_noncharacter(cp) {
            return Err(Error::non_positional(
                ErrorClass::Noncharacter,
                format!("string contains noncharacter U+{cp:04X}"),
            ));
        }
    }
    Ok(())
}

fn validate_rec(value: &Value, opts: Options, depth: usize, total_values: &mut usize) -> Result<()> {
    *total_values += 1;
    if *total_values > opts.max_values() {
        return Err(Error::non_positional(
            ErrorClass::BoundExceeded,
            "total value count exceeds max_values",
        ));
    }
    if depth > opts.max_depth() {
        return Err(Error::non_positional(
            ErrorClass::BoundExceeded,
            "nesting depth exceeds max_depth",
        ));
    }
    match value {
        Value::Null | Value::Bool(_) => Ok(()),
        Value::Number(n) => {
            if !n.is_finite() {
                return Err(Error::non_positional(
                    ErrorClass::NumberOverflow,
                    "number is not finite",
                ));
            }
            Ok(())
        }
        Value::String(s) => validate_string(s),
        Value::Array(items) => {
            if items.len() > opts.max_array_elements() {
                return Err(Error::non_positional(
                    ErrorClass::BoundExceeded,
                    "array exceeds max_array_elements",
                ));
            }
            for item in items {
                validate_rec(item, opts, depth + 1, total_values)?;
            }
            Ok(())
        }
        Value::Object(members) => {
            if members.len() > opts.max_object_members() {
                return Err(Error::non_positional(
                    ErrorClass::BoundExceeded,
                    "object exceeds max_object_members",
                ));
            }
            let mut seen = HashSet::with_capacity(members.len());
            for (key, v) in members {
                validate_string(key)?;
                if !seen.insert(key.as_str()) {
                    return Err(Error::non_positional(
                        ErrorClass::DuplicateKey,
                        format!("duplicate object key {key:?}"),
                    ));
                }
                validate_rec(v, opts, depth + 1, total_values)?;
            }
            Ok(())
        }
    }
}
