use crate::{Value, Error, FromJson};

impl<T: FromJson> FromJson for Box<T> {
  const EMBEDDED_DOCUMENT: bool = T::EMBEDDED_DOCUMENT;

  fn from_json(value: &Value) -> Result<Option<Self>, Error> {
    Ok(T::from_json(value)?.map(Box::new))
  }

  fn absent() -> Option<Self> {
    T::absent().map(Box::new)
  }
}
