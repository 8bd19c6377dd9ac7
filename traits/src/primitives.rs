use crate::{Number, Value, Convertible};

/// Convert a number to an integer, if it's integral and in range.
fn integer<T: TryFrom<i64> + TryFrom<u64>>(number: &Number) -> Option<T> {
  if let Some(value) = number.as_i64() {
    return T::try_from(value).ok();
  }
  T::try_from(number.as_u64()?).ok()
}

macro_rules! impl_integer {
  ($($ty: ty),*) => {
    $(
      impl Convertible for $ty {
        /// This accepts an integral number, or a string which parses as an integer.
        fn convert(value: &Value) -> Option<Self> {
          match value {
            Value::Number(number) => integer(number),
            Value::String(string) => Self::convert_key(string),
            _ => None,
          }
        }

        fn convert_key(key: &str) -> Option<Self> {
          key.parse().ok()
        }
      }
    )*
    crate::impl_convertible!($($ty),*);
  };
}
impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Convertible for bool {
  fn convert(value: &Value) -> Option<Self> {
    value.as_bool()
  }
}
crate::impl_convertible!(bool);

#[test]
fn integers() {
  use serde_json::json;

  assert_eq!(i64::convert(&json!(-5)), Some(-5));
  assert_eq!(u8::convert(&json!(255)), Some(255));
  assert_eq!(u8::convert(&json!(256)), None);
  assert_eq!(u64::convert(&json!(-1)), None);
  assert_eq!(u64::convert(&json!(u64::MAX)), Some(u64::MAX));
  assert_eq!(i64::convert(&json!(u64::MAX)), None);
  assert_eq!(i128::convert(&json!(u64::MAX)), Some(i128::from(u64::MAX)));

  // Text which lexically parses as an integer is accepted
  assert_eq!(i32::convert(&json!("2")), Some(2));
  assert_eq!(i32::convert(&json!("-17")), Some(-17));
  assert_eq!(i32::convert(&json!("x")), None);
  assert_eq!(i32::convert(&json!("2.5")), None);
  assert_eq!(u16::convert(&json!("70000")), None);

  // Fractional numbers are not
  assert_eq!(i32::convert(&json!(2.5)), None);
  assert_eq!(i32::convert(&json!(true)), None);
  assert_eq!(i32::convert(&json!([1])), None);
  assert_eq!(i32::convert(&Value::Null), None);

  assert_eq!(i32::convert_key("12"), Some(12));
  assert_eq!(i32::convert_key("twelve"), None);
}

#[test]
fn booleans() {
  use serde_json::json;

  assert_eq!(bool::convert(&json!(true)), Some(true));
  assert_eq!(bool::convert(&json!(false)), Some(false));
  assert_eq!(bool::convert(&json!(1)), None);
  assert_eq!(bool::convert(&json!("true")), None);
  assert_eq!(bool::convert(&Value::Null), None);
}
