//! Style description → CSS text.
//!
//! [`serialize`] flattens a nested [`StyleObject`] into compact rules, one
//! per block that has declarations:
//!
//! ```text
//! { color: $primary, "&:hover": { color: $accent }, "@media $XSmall": { display: none } }
//! ```
//!
//! becomes, for class `e0` under the light theme:
//!
//! ```text
//! .e0{color:#6200ee}.e0:hover{color:#ff2997}@media (max-width: 599px){.e0{display:none}}
//! ```
//!
//! Local declarations of a block come first, then its nested blocks in
//! description order. Keys starting with `$` are metadata (e.g. a sheet's
//! `$name`) and never emitted. Serialization either produces the whole text
//! or fails with the first configuration error; nothing is partially written.
//!
//! ## Submodules
//!
//! - [`case`]: camelCase → hyphenated property names
//! - [`selectors`]: `&`, `{slot}` and selector list expansion
//! - [`tokens`]: `$token` and `$Breakpoint` resolution

pub mod case;
pub mod selectors;
pub mod tokens;

pub use case::hyphenate;
pub use selectors::{combine_selectors, expand_selector, split_selector_list, substitute_slots};
pub use tokens::{resolve_at_rule, resolve_tokens};

use crate::direction::resolve_property;
use crate::error::Result;
use crate::types::{StyleObject, StyleValue, Theme};
use std::collections::HashMap;

/// Everything a description is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct SerializeContext<'a> {
    pub theme: &'a Theme,
    /// Class of the root block, without the leading dot.
    pub class_name: &'a str,
    /// Slot → class map used for `{slot}` references.
    pub slots: Option<&'a HashMap<String, String>>,
}

impl<'a> SerializeContext<'a> {
    pub fn new(theme: &'a Theme, class_name: &'a str) -> Self {
        Self {
            theme,
            class_name,
            slots: None,
        }
    }

    /// Builder method to make `{slot}` references resolvable.
    pub fn with_slots(mut self, slots: &'a HashMap<String, String>) -> Self {
        self.slots = Some(slots);
        self
    }
}

/// Serializes `description` as the rules of `.{ctx.class_name}`.
pub fn serialize(description: &StyleObject, ctx: &SerializeContext<'_>) -> Result<String> {
    let mut out = String::new();
    let root = [format!(".{}", ctx.class_name)];
    write_block(description, &root, ctx, &mut out)?;
    log::trace!("serialized .{} ({} bytes)", ctx.class_name, out.len());
    Ok(out)
}

fn write_block(
    object: &StyleObject,
    selectors: &[String],
    ctx: &SerializeContext<'_>,
    out: &mut String,
) -> Result<()> {
    let mut declarations = Vec::new();
    for (key, value) in object.iter() {
        if key.starts_with('$') {
            continue;
        }
        let value = match value {
            StyleValue::Str(text) => tokens::resolve_tokens(text, ctx.theme)?.into_owned(),
            StyleValue::Num(number) => number.to_string(),
            StyleValue::Object(_) | StyleValue::Null => continue,
        };
        let name = case::hyphenate(key);
        let name = resolve_property(&name, ctx.theme.direction);
        declarations.push(format!("{name}:{value}"));
    }

    if !declarations.is_empty() {
        out.push_str(&selectors.join(","));
        out.push('{');
        out.push_str(&declarations.join(";"));
        out.push('}');
    }

    for (key, value) in object.iter() {
        let StyleValue::Object(nested) = value else {
            continue;
        };
        if key.starts_with('$') {
            continue;
        }

        if key.starts_with('@') {
            let rule = tokens::resolve_at_rule(key, ctx.theme)?;
            let mut inner = String::new();
            write_block(nested, selectors, ctx, &mut inner)?;
            if !inner.is_empty() {
                out.push_str(&rule);
                out.push('{');
                out.push_str(&inner);
                out.push('}');
            }
        } else {
            let children = expand_selector(key, selectors, ctx.slots)?;
            write_block(nested, &children, ctx, out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::style;

    fn css(object: &StyleObject) -> String {
        serialize(object, &SerializeContext::new(&Theme::light(), "e0")).unwrap()
    }

    #[test]
    fn test_numbers_and_nulls() {
        let object = style! {
            "lineHeight" => 1.125,
            "flex" => 1,
            "color" => None::<&str>,
        };
        assert_eq!(css(&object), ".e0{line-height:1.125;flex:1}");
    }

    #[test]
    fn test_empty_blocks_emit_nothing() {
        let object = style! { "&:hover" => {}, "@media $XSmall" => { "span" => {} } };
        assert_eq!(css(&object), "");
    }

    #[test]
    fn test_metadata_keys_are_skipped() {
        let object = style! { "$name" => "button", "display" => "flex" };
        assert_eq!(css(&object), ".e0{display:flex}");
    }

    #[test]
    fn test_rtl_direction() {
        let theme = Theme::light().with_direction(Direction::Rtl);
        let object = style! { "marginAfter" => "4px", "before" => 0 };
        let out = serialize(&object, &SerializeContext::new(&theme, "e1")).unwrap();
        assert_eq!(out, ".e1{margin-left:4px;right:0}");
    }
}
