use crate::{Value, Convertible};

impl Convertible for f64 {
  /// This accepts any number, including integers.
  fn convert(value: &Value) -> Option<Self> {
    value.as_f64()
  }
}

impl Convertible for f32 {
  /// This accepts any number within the range of an `f32`, which will be rounded to the nearest
  /// `f32`.
  fn convert(value: &Value) -> Option<Self> {
    let value = value.as_f64()?;
    #[allow(clippy::cast_possible_truncation)]
    let res = value as f32;
    // The cast saturates to infinity, which a JSON number will never be
    if res.is_infinite() {
      None?;
    }
    Some(res)
  }
}

crate::impl_convertible!(f64, f32);

#[allow(clippy::float_cmp)]
#[test]
fn floats() {
  use serde_json::json;

  assert_eq!(f64::convert(&json!(1.5)), Some(1.5));
  assert_eq!(f64::convert(&json!(-3)), Some(-3.0));
  assert_eq!(f64::convert(&json!(u64::MAX)), Some(18446744073709551615.0));
  assert_eq!(f64::convert(&json!("1.5")), None);
  assert_eq!(f64::convert(&Value::Null), None);

  assert_eq!(f32::convert(&json!(0.25)), Some(0.25));
  assert_eq!(f32::convert(&json!(7)), Some(7.0));
  assert_eq!(f32::convert(&json!(1e300)), None);
  assert_eq!(f32::convert(&json!(false)), None);
}
