use serde_json::Value;

use json_assign_traits::{Convertible, normalize};

/*
  Reference models for the element-wise conversions, written directly over the value rather than
  through `FromJson`, so the mappers may be checked against them for arbitrary values.
*/

/// The elements of an array expected to be converted to `T`.
pub fn expected_sequence<T: Convertible>(elements: &[Value]) -> Vec<T> {
  let mut res = vec![];
  for element in elements {
    let Some(element) = normalize(Some(element)) else { continue };
    if let Some(element) = T::convert(element) {
      res.push(element);
    }
  }
  res
}

/// The entries of an object expected to be converted to `(K, T)`, in the object's order.
pub fn expected_entries<K: Convertible, T: Convertible>(
  entries: &serde_json::Map<String, Value>,
) -> Vec<(K, T)> {
  let mut res = vec![];
  for (key, value) in entries {
    let (Some(key), Some(value)) = (K::convert_key(key), normalize(Some(value))) else { continue };
    if let Some(value) = T::convert(value) {
      res.push((key, value));
    }
  }
  res
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;
  use rand_core::{RngCore, OsRng};

  use json_assign_traits::{FromJson, assign, from_value};
  use super::*;

  fn init_logging() {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
  }

  #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
  fn random_string() -> String {
    match OsRng.next_u64() % 4 {
      // Integers as text, which integer targets accept
      0 => (OsRng.next_u64() as i64).to_string(),
      1 => (OsRng.next_u64() % 1000).to_string(),
      // Text which is usually not an integer
      _ => {
        let mut res = String::new();
        for _ in 0 .. (OsRng.next_u64() % 8) {
          res.push(char::from_u32(u32::from(b'0') + ((OsRng.next_u64() % 75) as u32)).unwrap());
        }
        res
      }
    }
  }

  fn random_value(depth: usize) -> Value {
    let modulus = if depth == 4 { 4 } else { 6 };
    match OsRng.next_u64() % modulus {
      0 => Value::Null,
      1 => Value::Bool((OsRng.next_u64() % 2) == 1),
      2 => Value::Number(match OsRng.next_u64() % 3 {
        0 => serde_json::Number::from(OsRng.next_u64() % 1000),
        1 => serde_json::Number::from(OsRng.next_u64()),
        2 => loop {
          if let Some(float) = serde_json::Number::from_f64(f64::from_bits(OsRng.next_u64())) {
            break float;
          }
        },
        _ => unreachable!(),
      }),
      3 => Value::String(random_string()),
      4 => Value::Array({
        let mut res = vec![];
        for _ in 0 .. (OsRng.next_u64() % 8) {
          res.push(random_value(depth + 1));
        }
        res
      }),
      5 => Value::Object({
        let mut res = serde_json::Map::new();
        for _ in 0 .. (OsRng.next_u64() % 8) {
          res.insert(random_string(), random_value(depth + 1));
        }
        res
      }),
      _ => unreachable!(),
    }
  }

  fn random_array() -> Vec<Value> {
    (0 .. (OsRng.next_u64() % 16)).map(|_| random_value(1)).collect()
  }

  fn random_object() -> serde_json::Map<String, Value> {
    (0 .. (OsRng.next_u64() % 16)).map(|_| (random_string(), random_value(1))).collect()
  }

  #[test]
  fn normalize_is_idempotent() {
    for _ in 0 .. 1000 {
      let value = random_value(0);
      assert_eq!(normalize(normalize(Some(&value))), normalize(Some(&value)));
      assert_eq!(normalize(Some(&value)).is_none(), value.is_null());
    }
  }

  #[test]
  fn sequences() {
    init_logging();

    for _ in 0 .. 1000 {
      let elements = random_array();
      let value = Value::Array(elements.clone());

      let integers = from_value::<Vec<i64>>(&value).unwrap().unwrap();
      assert!(integers.len() <= elements.len());
      assert_eq!(integers, expected_sequence::<i64>(&elements));

      let strings = from_value::<Vec<String>>(&value).unwrap().unwrap();
      assert_eq!(strings, expected_sequence::<String>(&elements));

      // `Option` elements are never omitted
      let optional = from_value::<Vec<Option<bool>>>(&value).unwrap().unwrap();
      assert_eq!(optional.len(), elements.len());
      for (converted, element) in optional.iter().zip(&elements) {
        assert_eq!(*converted, element.as_bool());
      }
    }
  }

  #[test]
  fn maps() {
    for _ in 0 .. 1000 {
      let entries = random_object();
      let value = Value::Object(entries.clone());

      let map = from_value::<BTreeMap<i64, String>>(&value).unwrap().unwrap();
      assert!(map.len() <= entries.len());
      assert_eq!(map, expected_entries::<i64, String>(&entries).into_iter().collect());

      // Every key converts to a `String`, so only values decide if an entry is present
      let map = from_value::<BTreeMap<String, Option<u16>>>(&value).unwrap().unwrap();
      assert_eq!(map.len(), entries.len());
    }
  }

  #[test]
  fn shape_mismatches() {
    for _ in 0 .. 1000 {
      let value = random_value(0);

      let mut sequence = vec![7u8];
      assign(&mut sequence, Some(&value)).unwrap();
      if !value.is_array() {
        assert_eq!(sequence, [7]);
      }

      let mut map = Some(BTreeMap::from([("a".to_string(), true)]));
      assign(&mut map, Some(&value)).unwrap();
      assert_eq!(map.is_some(), value.is_object());

      // Scalars never error, whatever they're given
      assert!(u32::from_json(&value).is_ok());
      assert!(f32::from_json(&value).is_ok());
      assert!(bool::from_json(&value).is_ok());
      assert!(String::from_json(&value).is_ok());
    }
  }
}
