use url::Url;

use crate::{Value, Convertible};

impl Convertible for Url {
  /// This accepts strings which parse as an absolute URL.
  fn convert(value: &Value) -> Option<Self> {
    let url = value.as_str()?;
    match Url::parse(url) {
      Ok(url) => Some(url),
      Err(e) => {
        tracing::trace!(error = %e, "string wasn't a valid URL");
        None
      }
    }
  }
}
crate::impl_convertible!(Url);

#[test]
fn urls() {
  use serde_json::json;

  assert_eq!(
    Url::convert(&json!("https://example.com/a?b=c")),
    Some(Url::parse("https://example.com/a?b=c").unwrap())
  );
  assert_eq!(Url::convert(&json!("/relative/path")), None);
  assert_eq!(Url::convert(&json!("")), None);
  assert_eq!(Url::convert(&json!(80)), None);
}
