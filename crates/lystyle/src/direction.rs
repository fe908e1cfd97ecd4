//! Writing direction and logical properties.
//!
//! Style descriptions may use `before` and `after` in place of `left` and
//! `right` (`paddingBefore`, `borderAfterWidth`, `before: 0`). Which physical
//! side they land on depends on the theme's [`Direction`]: in a left-to-right
//! theme `before` is `left`, in a right-to-left theme it is `right`.

use phf::phf_map;

/// The writing direction of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Physical side of `before` in this direction.
    pub fn before(self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }

    /// Physical side of `after` in this direction.
    pub fn after(self) -> &'static str {
        match self {
            Direction::Ltr => "right",
            Direction::Rtl => "left",
        }
    }

    /// The value of the CSS `direction` property.
    pub fn as_css(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Logical property → (left-to-right, right-to-left) physical property.
static LOGICAL_PROPERTIES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "before" => ("left", "right"),
    "after" => ("right", "left"),
    "margin-before" => ("margin-left", "margin-right"),
    "margin-after" => ("margin-right", "margin-left"),
    "padding-before" => ("padding-left", "padding-right"),
    "padding-after" => ("padding-right", "padding-left"),
    "border-before" => ("border-left", "border-right"),
    "border-after" => ("border-right", "border-left"),
    "border-before-width" => ("border-left-width", "border-right-width"),
    "border-after-width" => ("border-right-width", "border-left-width"),
    "border-before-style" => ("border-left-style", "border-right-style"),
    "border-after-style" => ("border-right-style", "border-left-style"),
    "border-before-color" => ("border-left-color", "border-right-color"),
    "border-after-color" => ("border-right-color", "border-left-color"),
    "border-top-before-radius" => ("border-top-left-radius", "border-top-right-radius"),
    "border-top-after-radius" => ("border-top-right-radius", "border-top-left-radius"),
    "border-bottom-before-radius" => ("border-bottom-left-radius", "border-bottom-right-radius"),
    "border-bottom-after-radius" => ("border-bottom-right-radius", "border-bottom-left-radius"),
};

/// Maps a hyphenated property name onto its physical name for `direction`.
///
/// Names that are not logical properties are returned unchanged.
///
/// ```rust
/// use lystyle::{Direction, resolve_property};
///
/// assert_eq!(resolve_property("padding-before", Direction::Ltr), "padding-left");
/// assert_eq!(resolve_property("padding-before", Direction::Rtl), "padding-right");
/// assert_eq!(resolve_property("padding-top", Direction::Rtl), "padding-top");
/// ```
pub fn resolve_property(name: &str, direction: Direction) -> &str {
    match LOGICAL_PROPERTIES.get(name) {
        Some(&(ltr, _)) if direction == Direction::Ltr => ltr,
        Some(&(_, rtl)) => rtl,
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_swap_with_direction() {
        assert_eq!(Direction::Ltr.before(), "left");
        assert_eq!(Direction::Rtl.before(), "right");
        assert_eq!(Direction::Rtl.after(), "left");
    }

    #[test]
    fn test_every_logical_property_mentions_its_side() {
        for (logical, (ltr, rtl)) in LOGICAL_PROPERTIES.entries() {
            let ltr_side = if logical.contains("before") { "left" } else { "right" };
            let rtl_side = if ltr_side == "left" { "right" } else { "left" };
            assert!(ltr.contains(ltr_side), "{logical} -> {ltr}");
            assert!(rtl.contains(rtl_side), "{logical} -> {rtl}");
        }
    }

    #[test]
    fn test_radius_corners() {
        assert_eq!(
            resolve_property("border-top-before-radius", Direction::Rtl),
            "border-top-right-radius"
        );
        assert_eq!(
            resolve_property("border-bottom-after-radius", Direction::Ltr),
            "border-bottom-right-radius"
        );
    }

    #[test]
    fn test_physical_properties_pass_through() {
        assert_eq!(resolve_property("left", Direction::Rtl), "left");
        assert_eq!(resolve_property("--before", Direction::Rtl), "--before");
    }
}
