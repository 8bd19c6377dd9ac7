use core::iter::Peekable;
use alloc::{
  vec,
  vec::Vec,
  string::{String, ToString},
};

use proc_macro::{Delimiter, TokenTree, TokenStream};

/// An attribute applied to an item, variant, or field.
pub(crate) struct Attribute {
  /// The attribute's name.
  pub(crate) name: String,
  /// The arguments within parentheses following the attribute's name, if present.
  arguments: Option<TokenStream>,
}

impl Attribute {
  fn parse(attr: TokenStream) -> Self {
    let mut attr = attr.into_iter();
    let name = match attr.next() {
      Some(TokenTree::Ident(ident)) => ident.to_string(),
      // Attributes with unexpected syntax are never ones we handle
      _ => String::new(),
    };
    let arguments = match attr.next() {
      Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis => {
        Some(group.stream())
      }
      _ => None,
    };
    Attribute { name, arguments }
  }

  /// The arguments to this attribute, panicking if they weren't present.
  pub(crate) fn arguments(&self) -> TokenStream {
    let arguments = self
      .arguments
      .clone()
      .unwrap_or_else(|| panic!("`{}` attribute without arguments", self.name));
    assert!(!arguments.is_empty(), "`{}` attribute with empty arguments", self.name);
    arguments
  }

  /// The string literal which is the sole argument to this attribute, as Rust source.
  pub(crate) fn string_literal(&self) -> String {
    let mut arguments = self.arguments().into_iter();
    let Some(TokenTree::Literal(literal)) = arguments.next() else {
      panic!("`{}` attribute with a non-literal argument", self.name)
    };
    assert!(
      arguments.next().is_none(),
      "`{}` attribute with multiple tokens within parentheses",
      self.name
    );
    let literal = literal.to_string();
    assert!(
      literal.starts_with('"') && literal.ends_with('"'),
      "`{}` attribute's literal wasn't a string literal",
      self.name
    );
    literal
  }
}

/// Parse a potentially-present `OuterAttribute`, returning the contained `Attr`.
///
/// This attempts to follow the syntax from
/// <https://doc.rust-lang.org/1.91.0/reference/attributes.html#grammar-OuterAttribute>, but only
/// performs partial validation.
fn parse_optional_outer_attribute(
  iter: &mut Peekable<impl Iterator<Item = TokenTree>>,
) -> Option<TokenStream> {
  // If this is present, it will have the mandatory `#`
  if !matches!(iter.peek(), Some(TokenTree::Punct(pound)) if pound.as_char() == '#') {
    None?;
  }
  let _pound = iter.next().expect("peeked attribute declaration couldn't be consumed");
  let Some(TokenTree::Group(group)) = iter.next() else {
    panic!("attribute declaration wasn't followed by `TokenTree::Group`");
  };
  assert_eq!(group.delimiter(), Delimiter::Bracket, "attribute had unexpected delimiter");
  Some(group.stream())
}

/// Parse all `OuterAttribute`s present.
pub(crate) fn parse_outer_attributes(
  iter: &mut Peekable<impl Iterator<Item = TokenTree>>,
) -> Vec<Attribute> {
  let mut attributes = vec![];
  while let Some(attribute) = parse_optional_outer_attribute(iter) {
    attributes.push(Attribute::parse(attribute));
  }
  attributes
}
