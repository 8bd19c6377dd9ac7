/// Implement `FromJson` for types which implement `Convertible`.
///
/// ```rust
/// use json_assign_traits::{Value, Convertible, impl_convertible};
///
/// struct Celsius(f64);
/// impl Convertible for Celsius {
///   fn convert(value: &Value) -> Option<Self> {
///     f64::convert(value).map(Celsius)
///   }
/// }
/// impl_convertible!(Celsius);
/// ```
#[macro_export]
macro_rules! impl_convertible {
  ($($ty: ty),* $(,)?) => {
    $(
      impl $crate::FromJson for $ty {
        fn from_json(
          value: &$crate::Value,
        ) -> ::core::result::Result<::core::option::Option<Self>, $crate::Error> {
          ::core::result::Result::Ok(<Self as $crate::Convertible>::convert(value))
        }
      }
    )*
  };
}

/// Implement `FromJson` for types which implement `Deserializable`.
///
/// This is an alternative to `#[derive(Deserializable)]` for types which construct themselves
/// manually.
#[macro_export]
macro_rules! impl_deserializable {
  ($($ty: ty),* $(,)?) => {
    $(
      impl $crate::FromJson for $ty {
        const EMBEDDED_DOCUMENT: bool = true;
        fn from_json(
          value: &$crate::Value,
        ) -> ::core::result::Result<::core::option::Option<Self>, $crate::Error> {
          $crate::construct::<Self>(value)
        }
      }
    )*
  };
}

/// Implement `FromJson` for types which implement `RawRepresentable`.
#[macro_export]
macro_rules! impl_raw_representable {
  ($($ty: ty),* $(,)?) => {
    $(
      impl $crate::FromJson for $ty {
        fn from_json(
          value: &$crate::Value,
        ) -> ::core::result::Result<::core::option::Option<Self>, $crate::Error> {
          ::core::result::Result::Ok($crate::convert_enum::<Self>(value))
        }
      }
    )*
  };
}
