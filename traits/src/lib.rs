#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub use json_assign::*;

mod macros;
mod primitives;
mod float;
mod string;
#[cfg(feature = "url")]
mod uri;
#[cfg(feature = "chrono")]
mod date;
mod option;
mod boxed;
mod sequences;
mod maps;
mod enums;
mod composite;
mod dispatch;

pub use sequences::convert_sequence;
pub use maps::convert_map;
pub use enums::convert_enum;
pub use composite::construct;
pub use dispatch::{convert, assign, assign_with, assign_optional_with, from_value, from_document};
#[cfg(feature = "chrono")]
pub use date::{DateFormatter, with_shared_formatter, date_format};

/// A scalar which can be converted from a single value.
///
/// Conversion never errors. A value of an unexpected shape, or which fails to parse, yields
/// `None`.
pub trait Convertible: Sized {
  /// Convert this item from a value.
  ///
  /// This will never be called with `null` by the mappers within this crate, yet implementations
  /// SHOULD return `None` for it regardless.
  fn convert(value: &Value) -> Option<Self>;

  /// Convert this item from the key of an object.
  ///
  /// By default, this converts the key as a string value.
  fn convert_key(key: &str) -> Option<Self> {
    Self::convert(&Value::String(key.to_string()))
  }
}

/// A composite which can be constructed from an object's fields.
///
/// Construction is total. A field which can't be converted is left at whatever value the
/// implementation initialized it with, and construction continues with the next field. The only
/// error is from a field whose value was a string expected to contain a JSON document which
/// didn't.
pub trait Deserializable: Sized {
  /// Construct this item from the fields of an object.
  fn from_fields(fields: &Object) -> Result<Self, Error>;
}

/// An enum whose cases are each identified by a distinct raw value.
pub trait RawRepresentable: Sized {
  /// The type of the raw values.
  type Raw: Convertible;

  /// The case identified by this raw value, if any.
  fn from_raw(raw: &Self::Raw) -> Option<Self>;
}

/// An item which can be converted from a value.
///
/// This decides which conversion is used for a target. Implementations are provided for all
/// `Convertible` types within this crate, `Option`, `Box`, `Vec`, `HashMap`, and `BTreeMap`.
/// `impl_convertible!`, `impl_deserializable!`, and `impl_raw_representable!` implement this for
/// additional types, as do the macros within `json-assign-derive`.
pub trait FromJson: Sized {
  /// If a string value should be parsed as a JSON document embedding the value to convert.
  const EMBEDDED_DOCUMENT: bool = false;

  /// Convert this item from a value.
  ///
  /// The value is never `null`, as values are normalized before this is called. `Ok(None)` is
  /// returned if the value can't be converted.
  fn from_json(value: &Value) -> Result<Option<Self>, Error>;

  /// The result of converting an absent value.
  ///
  /// By default, nothing is produced.
  fn absent() -> Option<Self> {
    None
  }
}
