use core::iter::Peekable;
use alloc::{vec::Vec, string::ToString};

use proc_macro::{Spacing, TokenTree, TokenStream};

use crate::{identifier::Identifier, attribute::Attribute};

pub(crate) struct StructField {
  pub(crate) attributes: Vec<Attribute>,
  pub(crate) identifier: Identifier,
  pub(crate) ty: TokenStream,
}

impl StructField {
  /// Parse a `StructField`, if present.
  ///
  /// This attempts to follow the syntax from
  /// <https://doc.rust-lang.org/1.91.0/reference/items/structs.html#grammar-StructField>, but only
  /// performs partial validation.
  fn parse_optional(iter: &mut Peekable<impl Iterator<Item = TokenTree>>) -> Option<Self> {
    iter.peek()?;

    let attributes = crate::attribute::parse_outer_attributes(iter);

    let _visibility = crate::vis::parse_optional_visibility(iter);

    let identifier = Identifier::parse(iter);

    let Some(TokenTree::Punct(colon)) = iter.next() else {
      panic!("colon not found after identifier within `StructField`")
    };
    assert_eq!(colon.as_char(), ':', "colon wasn't a colon");
    assert!(
      matches!(colon.spacing(), Spacing::Alone),
      "colon between identifier and type wasn't independent"
    );

    // Take the type, which is terminated by a comma (or the end of the fields)
    let mut ty = TokenStream::new();
    loop {
      ty.extend([crate::take_angle_expression(iter)]);
      let Some(item) = iter.next() else { break };
      if let TokenTree::Punct(comma) = &item {
        if (comma.as_char() == ',') && matches!(comma.spacing(), Spacing::Alone) {
          break;
        }
      }
      ty.extend([item]);
    }
    assert!(!ty.is_empty(), "`StructField` without a type");

    Some(StructField { attributes, identifier, ty })
  }

  /// If this field's type is an `Option`.
  ///
  /// This is determined syntactically, by the last identifier in the path of the type being
  /// `Option`. Aliases of `Option` are not detected.
  pub(crate) fn is_option(&self) -> bool {
    let mut last = None;
    for item in self.ty.clone() {
      match item {
        TokenTree::Punct(punct) if punct.as_char() == '<' => break,
        TokenTree::Ident(ident) => last = Some(ident.to_string()),
        _ => {}
      }
    }
    last.as_deref() == Some("Option")
  }
}

/// Parse `StructFields`.
///
/// This follows the syntax from
/// <https://doc.rust-lang.org/1.91.0/reference/items/structs.html#grammar-StructFields>.
pub(crate) fn parse_struct_fields(
  iter: &mut Peekable<impl Iterator<Item = TokenTree>>,
) -> impl Iterator<Item = StructField> + '_ {
  core::iter::from_fn(|| StructField::parse_optional(iter))
}
