use crate::{Value, Convertible, RawRepresentable};

/// Convert a value to an enum.
///
/// The value is first converted to the enum's raw type, then the case with that raw value is
/// looked up. If either step fails, `None` is returned.
pub fn convert_enum<E: RawRepresentable>(value: &Value) -> Option<E> {
  let raw = E::Raw::convert(value)?;
  let res = E::from_raw(&raw);
  if res.is_none() {
    tracing::trace!("raw value didn't identify any case of the enum");
  }
  res
}
