//! Property name casing.

use std::borrow::Cow;

/// Converts a camelCase property name to its hyphenated CSS form.
///
/// Custom properties (`--name`) and names without uppercase letters are
/// returned as-is. A leading capital marks a vendor prefix (`WebkitAppearance`
/// → `-webkit-appearance`), as does a leading `ms` (`msFlex` → `-ms-flex`).
pub fn hyphenate(name: &str) -> Cow<'_, str> {
    if name.starts_with("--") || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }

    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(hyphenate("marginBottom"), "margin-bottom");
        assert_eq!(hyphenate("borderTopBeforeRadius"), "border-top-before-radius");
    }

    #[test]
    fn test_vendor_prefixes() {
        assert_eq!(hyphenate("WebkitBoxSizing"), "-webkit-box-sizing");
        assert_eq!(hyphenate("msFlex"), "-ms-flex");
    }

    #[test]
    fn test_untouched_names() {
        assert!(matches!(hyphenate("font-size"), Cow::Borrowed("font-size")));
        assert_eq!(hyphenate("--Brand-Color"), "--Brand-Color");
        // Only a prefix when followed by a capital.
        assert_eq!(hyphenate("msg"), "msg");
    }
}
