use crate::{Value, Error, FromJson, normalize, parse_document};

/// Convert a potentially-present value.
///
/// The value is normalized, then converted with `FromJson::from_json` if present or
/// `FromJson::absent` if not.
pub fn convert<T: FromJson>(value: Option<&Value>) -> Result<Option<T>, Error> {
  match normalize(value) {
    Some(value) => T::from_json(value),
    None => Ok(T::absent()),
  }
}

/// Assign a potentially-present value to a target.
///
/// If the value converts, the target is overwritten. If it doesn't, the target is left untouched.
/// As `Option` converts every value (to `None` if the value couldn't otherwise be converted), an
/// `Option` target is always overwritten.
///
/// The only error is from a string expected to contain a JSON document which didn't. The target
/// is left untouched in that case.
pub fn assign<T: FromJson>(target: &mut T, value: Option<&Value>) -> Result<(), Error> {
  if let Some(value) = convert::<T>(value)? {
    *target = value;
  }
  Ok(())
}

/// Assign a potentially-present value to a target, using a custom converter.
///
/// The converter is only called if the value is present and not `null`. If the converter returns
/// `None`, the target is left untouched.
pub fn assign_with<T>(
  target: &mut T,
  value: Option<&Value>,
  converter: impl FnOnce(&Value) -> Option<T>,
) {
  if let Some(value) = normalize(value).and_then(converter) {
    *target = value;
  }
}

/// Assign a potentially-present value to an optional target, using a custom converter.
///
/// The converter is only called if the value is present and not `null`. The target is always
/// overwritten, with `None` if the value was absent or the converter returned `None`.
pub fn assign_optional_with<T>(
  target: &mut Option<T>,
  value: Option<&Value>,
  converter: impl FnOnce(&Value) -> Option<T>,
) {
  *target = normalize(value).and_then(converter);
}

/// Convert a value.
pub fn from_value<T: FromJson>(value: &Value) -> Result<Option<T>, Error> {
  convert(Some(value))
}

/// Convert a JSON document.
///
/// This errors if the document isn't valid JSON.
pub fn from_document<T: FromJson>(document: &str) -> Result<Option<T>, Error> {
  let value = parse_document(document)?;
  from_value(&value)
}
