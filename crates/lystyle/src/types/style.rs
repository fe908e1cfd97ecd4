//! Nested style descriptions.
//!
//! A [`StyleObject`] is an ordered map from CSS-like keys to [`StyleValue`]s.
//! Keys are declaration names (`color`, `marginBottom`), selectors (`&:hover`,
//! `& {label}`, `span`) or at-rules (`@media (max-width: 599px)`); which one a
//! key is follows from its value: nested objects are blocks, everything else
//! is a declaration.
//!
//! Insertion order is preserved, and re-setting an existing key keeps its
//! original position while replacing the value. That mirrors how object
//! literals with spreads behave, which is what [`merge_deep`] and
//! [`StyleObject::extend`] rely on.

use crate::error::Result;
use crate::types::color::RgbaColor;

/// A single value in a style description.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Literal CSS text; may contain `$token` palette references.
    Str(String),
    /// A number, written without a unit (`line-height:1.125`, `flex:1`).
    Num(f64),
    /// A nested block.
    Object(StyleObject),
    /// An absent value; the declaration is skipped.
    Null,
}

impl StyleValue {
    /// Returns the string payload, if this is a [`StyleValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested block, if this is a [`StyleValue::Object`].
    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            StyleValue::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Str(value.clone())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Num(value as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Num(value as f64)
    }
}

impl From<RgbaColor> for StyleValue {
    fn from(value: RgbaColor) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        StyleValue::Object(value)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Null, Into::into)
    }
}

/// An ordered, nested style description.
///
/// Usually built with the [`style!`](crate::style) macro:
///
/// ```rust
/// use lystyle::{StyleValue, style};
///
/// let root = style! {
///     "display" => "inline-block",
///     "lineHeight" => 1.125,
///     "&:after" => { "content" => "''" },
/// };
/// assert_eq!(root.get("lineHeight"), Some(&StyleValue::Num(1.125)));
/// assert_eq!(root.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleObject {
    entries: Vec<(String, StyleValue)>,
}

impl StyleObject {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw declaration text such as `"font-size:24px;width:1em"`.
    pub fn parse(source: &str) -> Result<Self> {
        crate::parser::parse_declarations(source)
    }

    /// Sets `key` to `value`. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Adds a block that only applies inside the named theme breakpoint.
    ///
    /// The key is written as `@media $Name` and resolved against
    /// `Theme::breakpoints` at serialization time.
    pub fn at_breakpoint(self, name: &str, block: StyleObject) -> Self {
        self.with(format!("@media ${name}"), block)
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut StyleValue> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Shallow spread: every key of `other` is set on `self`, later keys win.
    pub fn extend(&mut self, other: StyleObject) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    /// Deep merge of `over` onto `self`; see [`merge_deep`].
    pub fn merged(mut self, over: StyleObject) -> Self {
        merge_deep(&mut self, over);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, StyleValue)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        let mut object = StyleObject::new();
        for (key, value) in iter {
            object.set(key, value);
        }
        object
    }
}

/// Deep, key-wise merge of `over` onto `base`.
///
/// When both sides hold a nested object under the same key the objects are
/// merged recursively; in every other case the value from `over` replaces
/// the one in `base`. This is how appearance fallbacks are layered: a `base`
/// fragment first, then the named variant on top.
pub fn merge_deep(base: &mut StyleObject, over: StyleObject) {
    for (key, value) in over.entries {
        let incoming = match value {
            StyleValue::Object(incoming) => incoming,
            value => {
                base.set(key, value);
                continue;
            }
        };
        if let Some(StyleValue::Object(existing)) = base.get_mut(&key) {
            merge_deep(existing, incoming);
            continue;
        }
        base.set(key, StyleValue::Object(incoming));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_set_keeps_original_position() {
        let mut object = style! { "a" => 1, "b" => 2 };
        object.set("a", 3);
        let keys: Vec<&str> = object.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(object.get("a"), Some(&StyleValue::Num(3.0)));
    }

    #[test]
    fn test_merge_deep_overrides_nested_keys() {
        let mut base = style! {
            "root" => { "color" => "red", "margin" => 0 },
            "label" => { "margin" => "0.4375em 0" },
        };
        let over = style! {
            "root" => { "color" => "blue" },
            "hint" => { "display" => "flex" },
        };
        merge_deep(&mut base, over);

        assert_eq!(
            base,
            style! {
                "root" => { "color" => "blue", "margin" => 0 },
                "label" => { "margin" => "0.4375em 0" },
                "hint" => { "display" => "flex" },
            }
        );
    }

    #[test]
    fn test_merge_deep_replaces_scalar_with_object() {
        let mut base = style! { "border" => "none" };
        merge_deep(&mut base, style! { "border" => { "width" => 0 } });
        assert!(base.get("border").and_then(StyleValue::as_object).is_some());
    }

    #[test]
    fn test_extend_is_shallow() {
        let mut base = style! { "&:after" => { "content" => "''", "color" => "red" } };
        base.extend(style! { "&:after" => { "color" => "blue" } });
        assert_eq!(base, style! { "&:after" => { "color" => "blue" } });
    }

    #[test]
    fn test_option_values_become_null() {
        let object = style! { "color" => None::<&str>, "width" => Some("1em") };
        assert_eq!(object.get("color"), Some(&StyleValue::Null));
        assert_eq!(object.get("width"), Some(&StyleValue::Str("1em".into())));
    }
}
