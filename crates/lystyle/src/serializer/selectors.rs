//! Selector key expansion.
//!
//! A nested selector key is combined with the selectors of the block that
//! contains it:
//!
//! - `&` stands for the enclosing selector and every occurrence is replaced
//!   (`&:hover`, `& > span`, `:not(&)`)
//! - a key without `&` is a descendant (`span` → `.e0 span`)
//! - comma-separated lists expand pairwise, each parent with each child
//! - `{slot}` names another slot of the same style sheet and becomes its class

use crate::error::{Result, StyleError};
use std::borrow::Cow;
use std::collections::HashMap;

/// Replaces `{slot}` references with `.class` selectors.
///
/// Without a slot map every reference is an [`StyleError::UnknownSlot`].
pub fn substitute_slots<'a>(
    key: &'a str,
    slots: Option<&HashMap<String, String>>,
) -> Result<Cow<'a, str>> {
    if !key.contains('{') {
        return Ok(Cow::Borrowed(key));
    }

    let mut out = String::with_capacity(key.len());
    let mut rest = key;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        let name = &rest[open + 1..open + close];
        let class = slots
            .and_then(|slots| slots.get(name))
            .ok_or_else(|| StyleError::UnknownSlot(name.to_string()))?;
        out.push_str(&rest[..open]);
        out.push('.');
        out.push_str(class);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}

/// Splits a selector list on top-level commas.
///
/// Commas inside parentheses or brackets (`:is(a, b)`) do not split.
pub fn split_selector_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}

/// Combines every parent selector with every child selector.
pub fn combine_selectors(parents: &[String], children: &[&str]) -> Vec<String> {
    let mut combined = Vec::with_capacity(parents.len() * children.len());
    for parent in parents {
        for child in children {
            if child.contains('&') {
                combined.push(child.replace('&', parent));
            } else {
                combined.push(format!("{parent} {child}"));
            }
        }
    }
    combined
}

/// Expands one nested selector key against the enclosing selectors.
pub fn expand_selector(
    key: &str,
    parents: &[String],
    slots: Option<&HashMap<String, String>>,
) -> Result<Vec<String>> {
    let key = substitute_slots(key, slots)?;
    Ok(combine_selectors(parents, &split_selector_list(&key)))
}
