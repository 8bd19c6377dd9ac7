use core::hash::{Hash, BuildHasher};
use std::collections::{HashMap, BTreeMap};

use crate::{Value, Error, Convertible, FromJson, kind, convert};

/// Convert an object to a map.
///
/// Values other than objects yield `None`. Each key is converted with `Convertible::convert_key`
/// and each value with `FromJson`. An entry whose key or value can't be converted is omitted,
/// without affecting the conversion of any other entries.
pub fn convert_map<K: Convertible, T: FromJson, M: FromIterator<(K, T)>>(
  value: &Value,
) -> Result<Option<M>, Error> {
  let Value::Object(entries) = value else {
    tracing::trace!(found = %kind(value), "expected an object");
    return Ok(None);
  };

  entries
    .iter()
    .filter_map(|(key, value)| {
      let Some(converted_key) = K::convert_key(key) else {
        tracing::trace!(key = %key, "omitting object entry with an unconvertible key");
        return None;
      };
      match convert::<T>(Some(value)) {
        Ok(Some(value)) => Some(Ok((converted_key, value))),
        Ok(None) => {
          tracing::trace!(key = %key, found = %kind(value), "omitting object entry");
          None
        }
        Err(e) => Some(Err(e)),
      }
    })
    .collect::<Result<M, Error>>()
    .map(Some)
}

impl<K: Convertible + Eq + Hash, T: FromJson, S: BuildHasher + Default> FromJson
  for HashMap<K, T, S>
{
  fn from_json(value: &Value) -> Result<Option<Self>, Error> {
    convert_map(value)
  }
}

impl<K: Convertible + Ord, T: FromJson> FromJson for BTreeMap<K, T> {
  fn from_json(value: &Value) -> Result<Option<Self>, Error> {
    convert_map(value)
  }
}
