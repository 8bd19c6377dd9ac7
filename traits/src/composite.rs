use crate::{Value, Error, Deserializable, kind, normalize, embedded_document};

/// Construct a composite from a value.
///
/// Objects are passed to `Deserializable::from_fields`. Strings are parsed as an embedded JSON
/// document, which is then constructed from as if it was the value, erroring if the string isn't
/// valid JSON. All other values yield `None`.
pub fn construct<T: Deserializable>(value: &Value) -> Result<Option<T>, Error> {
  match value {
    Value::Object(fields) => T::from_fields(fields).map(Some),
    Value::String(document) => {
      let document = embedded_document(document)?;
      match normalize(Some(&document)) {
        Some(document) => construct(document),
        None => Ok(None),
      }
    }
    _ => {
      tracing::trace!(found = %kind(value), "expected an object");
      Ok(None)
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use crate::{Object, FromJson, assign};
  use super::*;

  #[derive(PartialEq, Debug)]
  struct Person {
    name: String,
    age: u8,
  }
  impl Deserializable for Person {
    fn from_fields(fields: &Object) -> Result<Self, Error> {
      let mut res = Person { name: "anonymous".to_string(), age: 0 };
      assign(&mut res.name, fields.get("name"))?;
      assign(&mut res.age, fields.get("age"))?;
      Ok(res)
    }
  }
  crate::impl_deserializable!(Person);

  #[test]
  fn total() {
    assert_eq!(
      construct::<Person>(&json!({ "name": "Ann" })).unwrap(),
      Some(Person { name: "Ann".to_string(), age: 0 })
    );
    assert_eq!(
      construct::<Person>(&json!({ "name": 1, "age": "x", "other": true })).unwrap(),
      Some(Person { name: "anonymous".to_string(), age: 0 })
    );
    assert_eq!(construct::<Person>(&json!([{ "name": "Ann" }])).unwrap(), None);
    assert_eq!(construct::<Person>(&json!(7)).unwrap(), None);
  }

  #[test]
  fn embedded() {
    assert_eq!(
      construct::<Person>(&json!(r#"{ "name": "Ann", "age": 30 }"#)).unwrap(),
      Some(Person { name: "Ann".to_string(), age: 30 })
    );
    assert_eq!(construct::<Person>(&json!("null")).unwrap(), None);
    assert!(matches!(construct::<Person>(&json!("{ name")), Err(Error::EmbeddedDocument(_))));

    // Composites propagate this to collections of them, which also accept embedded documents
    assert_eq!(
      Vec::<Person>::from_json(&json!(r#"[{ "name": "Ann" }, 5, { "age": 9 }]"#)).unwrap(),
      Some(vec![
        Person { name: "Ann".to_string(), age: 0 },
        Person { name: "anonymous".to_string(), age: 9 },
      ])
    );
    assert!(Vec::<Person>::from_json(&json!([{ "name": "Ann" }, "]"])).is_err());
  }
}
