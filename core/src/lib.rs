#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use core::fmt;

mod error;
mod document;

pub use serde_json::{Value, Number, Map};
pub use error::Error;
pub use document::{parse_document, embedded_document};

/// A JSON object, as a mapping from keys to values.
pub type Object = Map<String, Value>;

/// The type of the value.
///
/// https://datatracker.ietf.org/doc/html/rfc8259#section-3 defines all possible values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Type {
  /// An object.
  Object,
  /// An array.
  Array,
  /// A string.
  String,
  /// A RFC-8259 number.
  Number,
  /// A boolean.
  Bool,
  /// The `null` unit value.
  Null,
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Type::Object => "object",
      Type::Array => "array",
      Type::String => "string",
      Type::Number => "number",
      Type::Bool => "bool",
      Type::Null => "null",
    })
  }
}

/// Get the type of a value.
#[inline(always)]
pub fn kind(value: &Value) -> Type {
  match value {
    Value::Object(_) => Type::Object,
    Value::Array(_) => Type::Array,
    Value::String(_) => Type::String,
    Value::Number(_) => Type::Number,
    Value::Bool(_) => Type::Bool,
    Value::Null => Type::Null,
  }
}

/// Normalize a potentially-present value.
///
/// A value which isn't present and a value present as `null` both yield `None`. Every other value
/// is returned as-is. This is idempotent, so applying it to an already-normalized value is a
/// no-op.
#[inline(always)]
pub fn normalize(value: Option<&Value>) -> Option<&Value> {
  value.filter(|value| !value.is_null())
}

#[test]
fn normalize_folds_null() {
  use serde_json::json;

  assert!(normalize(None).is_none());
  assert!(normalize(Some(&Value::Null)).is_none());

  for value in [json!(false), json!(0), json!(""), json!([]), json!({}), json!([null])] {
    assert_eq!(normalize(Some(&value)), Some(&value));
    assert_eq!(normalize(normalize(Some(&value))), normalize(Some(&value)));
  }
}

#[test]
fn kinds() {
  use serde_json::json;

  assert_eq!(kind(&json!({ "a": 1 })), Type::Object);
  assert_eq!(kind(&json!([1])), Type::Array);
  assert_eq!(kind(&json!("1")), Type::String);
  assert_eq!(kind(&json!(1.5)), Type::Number);
  assert_eq!(kind(&json!(true)), Type::Bool);
  assert_eq!(kind(&Value::Null), Type::Null);
  assert_eq!(Type::Array.to_string(), "array");
}
