use crate::{Value, Error, FromJson};

impl<T: FromJson> FromJson for Option<T> {
  const EMBEDDED_DOCUMENT: bool = T::EMBEDDED_DOCUMENT;

  /// This always produces a value, which will be `None` if `T` couldn't be converted.
  fn from_json(value: &Value) -> Result<Option<Self>, Error> {
    T::from_json(value).map(Some)
  }

  /// An absent value is converted to `None`, instead of not being converted.
  fn absent() -> Option<Self> {
    Some(None)
  }
}

#[test]
fn option() {
  use serde_json::json;

  assert_eq!(Option::<u8>::from_json(&json!(1)).unwrap(), Some(Some(1)));
  assert_eq!(Option::<u8>::from_json(&json!("x")).unwrap(), Some(None));
  assert_eq!(Option::<u8>::absent(), Some(None));
  assert_eq!(u8::absent(), None);
}
