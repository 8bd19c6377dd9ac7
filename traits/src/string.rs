use crate::{Value, Convertible};

impl Convertible for String {
  /// This only accepts strings.
  fn convert(value: &Value) -> Option<Self> {
    value.as_str().map(ToString::to_string)
  }

  fn convert_key(key: &str) -> Option<Self> {
    Some(key.to_string())
  }
}
crate::impl_convertible!(String);

#[test]
fn strings() {
  use serde_json::json;

  assert_eq!(String::convert(&json!("abc")), Some("abc".to_string()));
  assert_eq!(String::convert(&json!("")), Some(String::new()));
  assert_eq!(String::convert(&json!(1)), None);
  assert_eq!(String::convert(&json!(["abc"])), None);
  assert_eq!(String::convert(&Value::Null), None);
  assert_eq!(String::convert_key("key"), Some("key".to_string()));
}
