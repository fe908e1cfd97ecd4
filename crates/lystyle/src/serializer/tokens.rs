//! Theme references inside values and at-rules.
//!
//! `$name` in a declaration value is a palette token; `$Name` in an at-rule
//! key is a breakpoint. Both are resolved against the active [`Theme`] and
//! fail loudly when the theme does not define them.

use crate::error::Result;
use crate::types::Theme;
use std::borrow::Cow;

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.'
}

/// Replaces every `$name` reference in `input` using `lookup`.
///
/// A `$` that is not followed by a name is kept literally.
fn replace_references<'a, F>(input: &'a str, mut lookup: F) -> Result<Cow<'a, str>>
where
    F: FnMut(&str) -> Result<String>,
{
    if !input.contains('$') {
        return Ok(Cow::Borrowed(input));
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('$') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let len = after.find(|c: char| !is_token_char(c)).unwrap_or(after.len());
        // A trailing dot ends the sentence, not the token.
        let name = after[..len].trim_end_matches('.');
        if name.is_empty() {
            out.push('$');
        } else {
            out.push_str(&lookup(name)?);
        }
        rest = &after[name.len()..];
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}

/// Resolves `$token` palette references in a declaration value.
///
/// ```rust
/// use lystyle::{Theme, serializer::resolve_tokens};
///
/// let theme = Theme::light();
/// assert_eq!(resolve_tokens("1px solid $primary", &theme).unwrap(), "1px solid #6200ee");
/// ```
pub fn resolve_tokens<'a>(value: &'a str, theme: &Theme) -> Result<Cow<'a, str>> {
    replace_references(value, |token| theme.color_of(token))
}

/// Resolves `$Name` breakpoint references in an at-rule key.
pub fn resolve_at_rule<'a>(key: &'a str, theme: &Theme) -> Result<Cow<'a, str>> {
    replace_references(key, |name| theme.media_query(name).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleError;

    #[test]
    fn test_plain_values_are_borrowed() {
        let theme = Theme::light();
        assert!(matches!(resolve_tokens("0 8px", &theme), Ok(Cow::Borrowed("0 8px"))));
    }

    #[test]
    fn test_multiple_tokens() {
        let theme = Theme::light();
        let value = resolve_tokens("$primary $primary.contrast", &theme).unwrap();
        assert_eq!(value, "#6200ee #ffffff");
    }

    #[test]
    fn test_lone_dollar_is_literal() {
        let theme = Theme::light();
        assert_eq!(resolve_tokens("'$ '", &theme).unwrap(), "'$ '");
    }

    #[test]
    fn test_breakpoint_reference() {
        let theme = Theme::light();
        assert_eq!(
            resolve_at_rule("@media $XLarge", &theme).unwrap(),
            "@media (min-width: 1920px)"
        );
        assert_eq!(
            resolve_at_rule("@media $Tiny", &theme),
            Err(StyleError::UnknownBreakpoint("Tiny".into()))
        );
    }

    #[test]
    fn test_literal_at_rule_is_untouched() {
        let theme = Theme::light();
        assert_eq!(
            resolve_at_rule("@supports (display: grid)", &theme).unwrap(),
            "@supports (display: grid)"
        );
    }
}
