#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![no_std]

use core::{str::FromStr, iter::Peekable};

extern crate alloc;
use alloc::{
  vec,
  vec::Vec,
  string::{String, ToString},
  format,
};

extern crate proc_macro;
use proc_macro::{Delimiter, Spacing, Punct, Group, TokenTree, TokenStream};

mod identifier;
mod simple_path;
mod vis;
mod attribute;
mod r#struct;
mod r#enum;

use attribute::Attribute;

// `<` will not open a group, so we use this to take all items within a `< ... >` expression.
fn take_angle_expression(iter: &mut Peekable<impl Iterator<Item = TokenTree>>) -> TokenStream {
  if !matches!(iter.peek(), Some(TokenTree::Punct(punct)) if punct.as_char() == '<') {
    return TokenStream::default();
  }

  let mut result = vec![];
  let mut count = 0;
  loop {
    let item = iter.next().expect("`TokenTree` unexpectedly terminated when taking `< ... >`");
    if let TokenTree::Punct(punct) = &item {
      let punct = punct.as_char();
      if punct == '<' {
        count += 1;
      }
      if punct == '>' {
        count -= 1;
      }
    }
    result.push(item);
    if count == 0 {
      break;
    }
  }
  TokenStream::from_iter(result)
}

// Advance the iterator past the next `,` on this depth, if there is one.
fn skip_comma_delimited(iter: &mut Peekable<impl Iterator<Item = TokenTree>>) {
  loop {
    take_angle_expression(iter);
    let Some(item) = iter.next() else { return };
    if let TokenTree::Punct(punct) = item {
      if punct.as_char() == ',' {
        return;
      }
    }
  }
}

struct Item {
  attributes: Vec<Attribute>,
  generic_bounds: String,
  generics: String,
  name: String,
  body: Group,
}

// This is somewhat comparable to `syn::Generics`, especially its `split_for_impl` method.
fn parse_item(item: TokenStream, keyword: &str, derive: &str) -> Item {
  let mut item = item.into_iter().peekable();

  let attributes = attribute::parse_outer_attributes(&mut item);
  let _visibility = vis::parse_optional_visibility(&mut item);

  match item.next() {
    Some(TokenTree::Ident(ident)) if ident.to_string() == keyword => {}
    _ => panic!("`{derive}` wasn't applied to an `{keyword}`"),
  }
  let name = identifier::Identifier::parse(&mut item).stream().to_string();

  let generic_bounds_tree = take_angle_expression(&mut item);

  let mut generics_tree = vec![];
  {
    let mut iter = generic_bounds_tree.clone().into_iter().peekable();
    while let Some(component) = iter.next() {
      match &component {
        // Take until the next colon, used to mark trait bounds
        TokenTree::Punct(punct) if punct.as_char() == ':' => {
          // Skip the actual bounds
          skip_comma_delimited(&mut iter);
          // Add our own comma delimiter and move to the next item
          generics_tree.push(TokenTree::Punct(Punct::new(',', Spacing::Alone)));
          continue;
        }
        // Const generics are referred to solely by their name
        TokenTree::Ident(ident) if ident.to_string() == "const" => continue,
        _ => {}
      }
      // Push this component as it isn't part of the bounds
      generics_tree.push(component);
    }
  }
  // Ensure this is terminated, which it won't be if the last item had bounds yet didn't have a
  // trailing comma
  if let Some(last) = generics_tree.last() {
    match last {
      TokenTree::Punct(punct) if punct.as_char() == '>' => {}
      _ => generics_tree.push(TokenTree::Punct(Punct::new('>', Spacing::Alone))),
    }
  }

  let generic_bounds = generic_bounds_tree.to_string();
  let generics = TokenStream::from_iter(generics_tree).to_string();

  // This presumably means we don't support items defined with `where` bounds
  let Some(TokenTree::Group(body)) = item.next() else {
    panic!("`{keyword}`'s name was not followed by its body");
  };
  if body.delimiter() != Delimiter::Brace {
    panic!("`{derive}` derivation applied to `{keyword}` without a braced body");
  }

  Item { attributes, generic_bounds, generics, name, body }
}

/// Derive an implementation of the `Deserializable` trait, and `FromJson` to construct it.
///
/// This _requires_ the `struct` derived for implement `Default`. Fields which aren't present in
/// the object, or whose values can't be converted, will be left to their `Default`
/// initialization. If you wish to detect if a field was omitted, please wrap it in `Option`.
///
/// Fields may be read from a distinct key using the `key` attribute, accepting a string literal
/// for the key (`key("key")`). Fields may be omitted with the `skip` attribute. Dates may be
/// parsed according to a pattern with the `format` attribute (`format("%Y-%m-%d")`), and any
/// field may be converted with a custom converter using the `converter` attribute
/// (`converter(path::to::function)`).
///
/// As a procedural macro, this will panic causing a compile-time error on any unexpected input.
#[proc_macro_derive(Deserializable, attributes(key, skip, format, converter))]
pub fn derive_deserializable(object: TokenStream) -> TokenStream {
  let Item { attributes: _, generic_bounds, generics, name, body } =
    parse_item(object, "struct", "Deserializable");

  let mut fields_assignment = String::new();
  let mut fields = body.stream().into_iter().peekable();
  for field in r#struct::parse_struct_fields(&mut fields) {
    let mut key = None;
    let mut skip = false;
    let mut converter = None;
    for attribute in &field.attributes {
      match attribute.name.as_str() {
        "skip" => skip = true,
        "key" => key = Some(attribute.string_literal()),
        "format" | "converter" => {
          assert!(converter.is_none(), "field had multiple `format`, `converter` attributes");
          converter = Some(if attribute.name == "format" {
            format!("json_assign_traits::date_format({})", attribute.string_literal())
          } else {
            attribute.arguments().to_string()
          });
        }
        _ => {}
      }
    }
    if skip {
      continue;
    }

    let field_name = field.identifier.stream().to_string();
    let key = key.unwrap_or_else(|| format!("\"{}\"", field.identifier.ident()));
    fields_assignment.push_str(&match converter {
      None => format!(
        r#"
        json_assign_traits::assign(&mut result.{field_name}, fields.get({key}))?;
        "#
      ),
      Some(converter) => {
        let assign = if field.is_option() { "assign_optional_with" } else { "assign_with" };
        format!(
          r#"
          json_assign_traits::{assign}(&mut result.{field_name}, fields.get({key}), {converter});
          "#
        )
      }
    });
  }

  TokenStream::from_str(&format!(
    r#"
    impl{generic_bounds} json_assign_traits::Deserializable for {name}{generics}
      where Self: core::default::Default {{
      #[allow(unused_mut, unused_variables)]
      fn from_fields(
        fields: &json_assign_traits::Object,
      ) -> core::result::Result<Self, json_assign_traits::Error> {{
        let mut result = <Self as core::default::Default>::default();
        {fields_assignment}
        core::result::Result::Ok(result)
      }}
    }}
    impl{generic_bounds} json_assign_traits::FromJson for {name}{generics}
      where Self: core::default::Default {{
      const EMBEDDED_DOCUMENT: bool = true;
      fn from_json(
        value: &json_assign_traits::Value,
      ) -> core::result::Result<core::option::Option<Self>, json_assign_traits::Error> {{
        json_assign_traits::construct::<Self>(value)
      }}
    }}
    "#
  ))
  .expect("typo in implementation of `Deserializable`")
}

/// Derive an implementation of the `RawRepresentable` trait, and `FromJson` to look it up.
///
/// This may only be applied to `enum`s whose variants don't have fields. The raw value for each
/// variant is read from its `raw` attribute (`raw("value")`, `raw(1)`), else from its
/// discriminant (`Variant = 1`). Variants of `enum`s whose raw values are strings default to their
/// name.
///
/// The raw type may be specified with the `raw_type` attribute on the `enum` (`raw_type(u8)`). If
/// not specified, it's `String` if any raw value is a string literal or no raw values were
/// specified, and `i64` otherwise.
///
/// As a procedural macro, this will panic causing a compile-time error on any unexpected input.
#[proc_macro_derive(RawRepresentable, attributes(raw, raw_type))]
pub fn derive_raw_representable(object: TokenStream) -> TokenStream {
  let Item { attributes, generic_bounds, generics, name, body } =
    parse_item(object, "enum", "RawRepresentable");

  let mut variants = body.stream().into_iter().peekable();
  let variants = r#enum::parse_enum_variants(&mut variants)
    .map(|variant| {
      let raw = variant.raw().map(|raw| raw.to_string());
      (variant.identifier, raw)
    })
    .collect::<Vec<_>>();

  let raw_type = attributes
    .iter()
    .rev()
    .find(|attribute| attribute.name == "raw_type")
    .map(|attribute| attribute.arguments().to_string());
  let textual = match raw_type.as_deref() {
    Some(raw_type) => raw_type == "String",
    None => variants.iter().all(|(_, raw)| raw.is_none()) ||
      variants.iter().any(|(_, raw)| raw.as_deref().is_some_and(|raw| raw.starts_with('"'))),
  };
  let raw_type = raw_type.unwrap_or_else(|| (if textual { "String" } else { "i64" }).to_string());

  let mut variants_lookup = String::new();
  for (identifier, raw) in &variants {
    let variant = identifier.stream().to_string();
    let raw = raw.clone().unwrap_or_else(|| {
      assert!(textual, "variant `{variant}` didn't have a raw value");
      format!("\"{}\"", identifier.ident())
    });
    let comparison = if textual { format!("raw == {raw}") } else { format!("*raw == ({raw})") };
    variants_lookup.push_str(&format!(
      r#"
      if {comparison} {{
        return core::option::Option::Some(Self::{variant});
      }}
      "#
    ));
  }

  TokenStream::from_str(&format!(
    r#"
    impl{generic_bounds} json_assign_traits::RawRepresentable for {name}{generics} {{
      type Raw = {raw_type};
      fn from_raw(raw: &Self::Raw) -> core::option::Option<Self> {{
        {variants_lookup}
        core::option::Option::None
      }}
    }}
    impl{generic_bounds} json_assign_traits::FromJson for {name}{generics} {{
      fn from_json(
        value: &json_assign_traits::Value,
      ) -> core::result::Result<core::option::Option<Self>, json_assign_traits::Error> {{
        core::result::Result::Ok(json_assign_traits::convert_enum::<Self>(value))
      }}
    }}
    "#
  ))
  .expect("typo in implementation of `RawRepresentable`")
}
