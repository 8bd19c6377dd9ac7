use core::iter::Peekable;
use alloc::vec::Vec;

use proc_macro::{Spacing, TokenTree, TokenStream};

use crate::{identifier::Identifier, attribute::Attribute};

pub(crate) struct EnumVariant {
  pub(crate) attributes: Vec<Attribute>,
  pub(crate) identifier: Identifier,
  pub(crate) discriminant: Option<TokenStream>,
}

fn is_comma(item: &TokenTree) -> bool {
  matches!(item, TokenTree::Punct(comma) if (comma.as_char() == ',') && matches!(comma.spacing(), Spacing::Alone))
}

impl EnumVariant {
  /// Parse an `EnumVariant` without fields, if present.
  ///
  /// This attempts to follow the syntax from
  /// <https://doc.rust-lang.org/1.91.0/reference/items/enumerations.html#grammar-EnumVariant>,
  /// but only performs partial validation.
  fn parse_optional(iter: &mut Peekable<impl Iterator<Item = TokenTree>>) -> Option<Self> {
    iter.peek()?;

    let attributes = crate::attribute::parse_outer_attributes(iter);

    let _visibility = crate::vis::parse_optional_visibility(iter);

    let identifier = Identifier::parse(iter);

    if matches!(iter.peek(), Some(TokenTree::Group(_))) {
      panic!("`RawRepresentable` derivation applied to `enum` with a variant with fields");
    }

    let mut discriminant = None;
    if matches!(iter.peek(), Some(TokenTree::Punct(eq)) if eq.as_char() == '=') {
      let _eq = iter.next().expect("peeked discriminant couldn't be consumed");
      let mut expression = TokenStream::new();
      for item in &mut *iter {
        if is_comma(&item) {
          break;
        }
        expression.extend([item]);
      }
      assert!(!expression.is_empty(), "`=` without a discriminant");
      discriminant = Some(expression);
    } else {
      match iter.next() {
        None => {}
        Some(item) if is_comma(&item) => {}
        Some(_) => panic!("`EnumVariant` wasn't followed by a comma"),
      }
    }

    Some(EnumVariant { attributes, identifier, discriminant })
  }

  /// The raw value of this variant, if specified, as Rust source.
  ///
  /// The `raw` attribute takes precedence over the discriminant.
  pub(crate) fn raw(&self) -> Option<TokenStream> {
    let attribute = self.attributes.iter().rev().find(|attribute| attribute.name == "raw");
    attribute.map(Attribute::arguments).or_else(|| self.discriminant.clone())
  }
}

/// Parse `EnumItems`.
///
/// This follows the syntax from
/// <https://doc.rust-lang.org/1.91.0/reference/items/enumerations.html#grammar-EnumItems>.
pub(crate) fn parse_enum_variants(
  iter: &mut Peekable<impl Iterator<Item = TokenTree>>,
) -> impl Iterator<Item = EnumVariant> + '_ {
  core::iter::from_fn(|| EnumVariant::parse_optional(iter))
}
