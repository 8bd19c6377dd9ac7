use thiserror::Error;

/// An error incurred when converting.
///
/// Malformed leaf data is never an error. A value which can't be converted simply yields no
/// value. The only failures are JSON text which can't be parsed as a document.
#[derive(Error, Debug)]
pub enum Error {
  /// A document was provided as JSON text yet wasn't valid JSON.
  #[error("invalid JSON document: {0}")]
  Document(#[from] serde_json::Error),
  /// A string value was expected to contain a JSON document yet wasn't valid JSON.
  #[error("invalid embedded JSON document: {0}")]
  EmbeddedDocument(#[source] serde_json::Error),
}
