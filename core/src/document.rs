use crate::{Value, Error};

/// Parse a JSON document.
pub fn parse_document(json: &str) -> Result<Value, Error> {
  Ok(serde_json::from_str(json)?)
}

/// Parse a JSON document embedded within a string value.
///
/// This is distinct from `parse_document` solely in the error returned, as the failure is within
/// a value of an already-parsed document.
pub fn embedded_document(json: &str) -> Result<Value, Error> {
  match serde_json::from_str(json) {
    Ok(document) => {
      tracing::debug!(len = json.len(), "parsed embedded JSON document");
      Ok(document)
    }
    Err(e) => {
      tracing::warn!(error = %e, "embedded JSON document was invalid");
      Err(Error::EmbeddedDocument(e))
    }
  }
}

#[test]
fn documents() {
  use serde_json::json;

  assert_eq!(parse_document(r#"{ "a": [1, null] }"#).unwrap(), json!({ "a": [1, null] }));
  assert!(matches!(parse_document("{"), Err(Error::Document(_))));

  assert_eq!(embedded_document(r#"[{ "b": "c" }]"#).unwrap(), json!([{ "b": "c" }]));
  assert_eq!(embedded_document("null").unwrap(), Value::Null);
  assert!(matches!(embedded_document("not json"), Err(Error::EmbeddedDocument(_))));
}
