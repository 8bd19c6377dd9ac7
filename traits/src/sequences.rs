use crate::{Value, Error, FromJson, kind, normalize, embedded_document, convert};

/// Convert an array to a `Vec`.
///
/// Values other than arrays yield `None`, with the exception of strings when `T` accepts embedded
/// documents. Such strings are parsed and their contents converted instead. A string which isn't a
/// valid document is treated as any other value which isn't an array.
///
/// Each element is converted independently. Elements which can't be converted are omitted,
/// without affecting the conversion of any other elements. The result will never be longer than
/// the array, and preserves its order.
pub fn convert_sequence<T: FromJson>(value: &Value) -> Result<Option<Vec<T>>, Error> {
  let elements = match value {
    Value::Array(elements) => elements,
    Value::String(document) if T::EMBEDDED_DOCUMENT => {
      let document = match embedded_document(document) {
        Ok(document) => document,
        Err(e) => {
          tracing::trace!(error = %e, "expected an array, found a string which isn't a document");
          return Ok(None);
        }
      };
      let Some(document) = normalize(Some(&document)) else { return Ok(None) };
      return convert_sequence(document);
    }
    _ => {
      tracing::trace!(found = %kind(value), "expected an array");
      return Ok(None);
    }
  };

  let mut res = Vec::with_capacity(elements.len());
  for (i, element) in elements.iter().enumerate() {
    match convert::<T>(Some(element))? {
      Some(element) => res.push(element),
      None => tracing::trace!(index = i, found = %kind(element), "omitting array element"),
    }
  }
  Ok(Some(res))
}

impl<T: FromJson> FromJson for Vec<T> {
  fn from_json(value: &Value) -> Result<Option<Self>, Error> {
    convert_sequence(value)
  }
}
