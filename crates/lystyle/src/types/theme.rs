//! Theme definitions for the style engine.
//!
//! A [`Theme`] is everything a style description may depend on: the palette
//! that `$token` values resolve against, the breakpoints behind
//! `@media $Name` keys, the writing direction used for `before`/`after`
//! properties, and the per-component default fragments (field appearances,
//! button sizes, tooltip and icon defaults).
//!
//! ## Palette Tokens
//!
//! | Token                    | Resolves to                          |
//! |--------------------------|--------------------------------------|
//! | `$primary`               | `palette["primary"].default`         |
//! | `$primary.contrast`      | `palette["primary"].contrast`        |
//! | `$background.primary`    | `palette["background.primary"].default` |
//! | `$text.secondary`        | `palette["text.secondary"].default`  |
//!
//! Every lookup returns a [`Result`]: a missing palette entry, breakpoint,
//! appearance or size is a [`StyleError`], never a silent default.

use crate::direction::Direction;
use crate::error::{Result, StyleError};
use crate::style;
use crate::types::color::RgbaColor;
use crate::types::style::{StyleObject, merge_deep};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Field appearances every theme can fall back on.
static DEFAULT_FIELD_APPEARANCE: Lazy<HashMap<&'static str, StyleObject>> = Lazy::new(|| {
    let mut appearances = HashMap::new();
    appearances.insert(
        "standard",
        style! {
            "root" => {
                "&:not({disabled}) {container}:hover:after" => {
                    "borderBottomColor" => "currentColor",
                },
                "&{disabled} {container}:after" => {
                    "borderBottomStyle" => "dotted",
                    "borderColor" => "inherit",
                },
            },
            "container" => {
                "padding" => "1em 0 0",
                "&:after" => {
                    "borderBottomStyle" => "solid",
                    "borderBottomWidth" => "1px",
                },
            },
            "containerFocused" => {
                "&:after" => {
                    "borderWidth" => "2px",
                    "borderColor" => "currentColor",
                },
            },
            "containerLabelHover" => { "color" => "currentColor" },
            "label" => { "margin" => "0.4375em 0" },
            "placeholder" => { "margin" => "0.4375em 0" },
            "input" => { "margin" => "0.4375em 0" },
            "floatingLabel" => { "transform" => "translateY(-1.25em)" },
        },
    );
    appearances
});

/// A named palette color and the text color that reads on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteColor {
    pub default: RgbaColor,
    pub contrast: RgbaColor,
}

impl PaletteColor {
    /// Creates a palette color, deriving the contrast color from luminance.
    pub fn new(default: RgbaColor) -> Self {
        let contrast = default.contrast();
        Self { default, contrast }
    }

    /// Creates a palette color with an explicit contrast color.
    pub fn with_contrast(default: RgbaColor, contrast: RgbaColor) -> Self {
        Self { default, contrast }
    }
}

/// Colors used for disabled controls.
#[derive(Debug, Clone, PartialEq)]
pub struct DisabledColors {
    /// Background of a disabled control.
    pub default: RgbaColor,
    /// Text color of a disabled control.
    pub contrast: RgbaColor,
}

/// Easing curves shared by component transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCurves {
    pub standard: String,
    pub deceleration: String,
    pub acceleration: String,
    pub sharp: String,
}

/// Transition durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDurations {
    pub complex: u32,
    pub entering: u32,
    pub exiting: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animations {
    pub curves: AnimationCurves,
    pub durations: AnimationDurations,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            curves: AnimationCurves {
                standard: "cubic-bezier(0.4,0.0,0.2,1)".into(),
                deceleration: "cubic-bezier(0.0,0.0,0.2,1)".into(),
                acceleration: "cubic-bezier(0.4,0.0,1,1)".into(),
                sharp: "cubic-bezier(0.4,0.0,0.6,1)".into(),
            },
            durations: AnimationDurations {
                complex: 375,
                entering: 225,
                exiting: 195,
            },
        }
    }
}

/// Default fragments for form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTheme {
    pub border_color: RgbaColor,
    pub label_color: RgbaColor,
    /// Appearance name → slot fragments. The `base` entry is merged under
    /// every other appearance.
    pub appearance: HashMap<String, StyleObject>,
}

/// Default fragments for buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonTheme {
    pub size: HashMap<String, StyleObject>,
    pub appearance: HashMap<String, StyleObject>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipTheme {
    pub root: StyleObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconTheme {
    pub font_size: String,
}

/// The mutable configuration every style description is resolved against.
///
/// # Examples
///
/// ```rust
/// use lystyle::{Direction, Theme};
///
/// let theme = Theme::light().with_direction(Direction::Rtl);
/// assert_eq!(theme.color_of("primary").unwrap(), "#6200ee");
/// assert_eq!(theme.color_of("primary.contrast").unwrap(), "#ffffff");
/// assert!(theme.color_of("nope").is_err());
/// assert_eq!(theme.breakpoint("XSmall").unwrap(), "@media (max-width: 599px)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Unique name for this theme (e.g., "minima-light").
    pub name: String,
    /// Writing direction used for `before`/`after` properties.
    pub direction: Direction,
    /// Palette entries by token name.
    pub palette: HashMap<String, PaletteColor>,
    /// Breakpoint name → media query (without the `@media` prefix).
    pub breakpoints: HashMap<String, String>,
    /// Base color of elevation shadows.
    pub shadow: RgbaColor,
    pub disabled: DisabledColors,
    pub animations: Animations,
    pub field: FieldTheme,
    pub button: ButtonTheme,
    pub tooltip: TooltipTheme,
    pub icon: IconTheme,
}

impl Theme {
    /// The default light theme.
    pub fn light() -> Self {
        let mut palette = HashMap::new();
        palette.insert(
            "primary".into(),
            PaletteColor::with_contrast(RgbaColor::hex("#6200EE"), RgbaColor::white()),
        );
        palette.insert(
            "accent".into(),
            PaletteColor::with_contrast(RgbaColor::hex("#FF2997"), RgbaColor::white()),
        );
        palette.insert(
            "warn".into(),
            PaletteColor::with_contrast(RgbaColor::hex("#f5414e"), RgbaColor::white()),
        );
        palette.insert("background.default".into(), PaletteColor::new(RgbaColor::hex("#fafafa")));
        palette.insert("background.primary".into(), PaletteColor::new(RgbaColor::hex("#ffffff")));
        palette.insert("background.secondary".into(), PaletteColor::new(RgbaColor::hex("#fafafa")));
        palette.insert("background.tertiary".into(), PaletteColor::new(RgbaColor::hex("#efefef")));
        let text = RgbaColor::rgba(0, 0, 0, 0.87);
        palette.insert("text.default".into(), PaletteColor::new(text.clone()));
        palette.insert("text.primary".into(), PaletteColor::new(text));
        palette.insert("text.secondary".into(), PaletteColor::new(RgbaColor::rgba(0, 0, 0, 0.54)));
        palette.insert("text.disabled".into(), PaletteColor::new(RgbaColor::rgba(0, 0, 0, 0.38)));
        palette.insert("divider".into(), PaletteColor::new(RgbaColor::rgba(0, 0, 0, 0.12)));

        Self {
            name: "minima-light".into(),
            direction: Direction::Ltr,
            palette,
            breakpoints: default_breakpoints(),
            shadow: RgbaColor::hex("#333333"),
            disabled: DisabledColors {
                default: RgbaColor::rgba(0, 0, 0, 0.12),
                contrast: RgbaColor::rgba(0, 0, 0, 0.26),
            },
            animations: Animations::default(),
            field: FieldTheme {
                border_color: RgbaColor::rgba(0, 0, 0, 0.12),
                label_color: RgbaColor::rgba(0, 0, 0, 0.6),
                appearance: default_field_appearances(),
            },
            button: default_button_theme(),
            tooltip: TooltipTheme {
                root: style! {
                    "background" => RgbaColor::rgba(50, 50, 50, 0.85),
                    "color" => RgbaColor::white(),
                },
            },
            icon: IconTheme {
                font_size: "24px".into(),
            },
        }
    }

    /// The default dark theme.
    pub fn dark() -> Self {
        let mut palette = HashMap::new();
        palette.insert(
            "primary".into(),
            PaletteColor::with_contrast(RgbaColor::hex("#1DE9B6"), RgbaColor::rgba(0, 0, 0, 0.87)),
        );
        palette.insert(
            "accent".into(),
            PaletteColor::with_contrast(RgbaColor::hex("#9C27B0"), RgbaColor::white()),
        );
        palette.insert(
            "warn".into(),
            PaletteColor::with_contrast(RgbaColor::hex("#EA404C"), RgbaColor::white()),
        );
        palette.insert("background.default".into(), PaletteColor::new(RgbaColor::hex("#303030")));
        palette.insert("background.primary".into(), PaletteColor::new(RgbaColor::hex("#2b2b2b")));
        palette.insert("background.secondary".into(), PaletteColor::new(RgbaColor::hex("#303030")));
        palette.insert("background.tertiary".into(), PaletteColor::new(RgbaColor::hex("#212121")));
        palette.insert("text.default".into(), PaletteColor::new(RgbaColor::white()));
        palette.insert("text.primary".into(), PaletteColor::new(RgbaColor::white()));
        palette.insert(
            "text.secondary".into(),
            PaletteColor::new(RgbaColor::rgba(255, 255, 255, 0.7)),
        );
        palette.insert(
            "text.disabled".into(),
            PaletteColor::new(RgbaColor::rgba(255, 255, 255, 0.5)),
        );
        palette.insert("divider".into(), PaletteColor::new(RgbaColor::rgba(255, 255, 255, 0.12)));

        Self {
            name: "minima-dark".into(),
            direction: Direction::Ltr,
            palette,
            breakpoints: default_breakpoints(),
            shadow: RgbaColor::black(),
            disabled: DisabledColors {
                default: RgbaColor::rgba(255, 255, 255, 0.3),
                contrast: RgbaColor::rgba(255, 255, 255, 0.7),
            },
            animations: Animations::default(),
            field: FieldTheme {
                border_color: RgbaColor::rgba(255, 255, 255, 0.12),
                label_color: RgbaColor::rgba(255, 255, 255, 0.4),
                appearance: default_field_appearances(),
            },
            button: default_button_theme(),
            tooltip: TooltipTheme {
                root: style! {
                    "background" => RgbaColor::rgba(250, 250, 250, 0.85),
                    "color" => RgbaColor::rgba(0, 0, 0, 0.87),
                },
            },
            icon: IconTheme {
                font_size: "24px".into(),
            },
        }
    }

    /// Builder method to set the writing direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Builder method to rename the theme.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Builder method to add or replace a palette entry.
    pub fn with_color(mut self, token: &str, color: PaletteColor) -> Self {
        self.palette.insert(token.to_string(), color);
        self
    }

    /// Builder method to add or replace a breakpoint.
    pub fn with_breakpoint(mut self, name: &str, query: &str) -> Self {
        self.breakpoints.insert(name.to_string(), query.to_string());
        self
    }

    /// Resolves a palette token to CSS color text.
    ///
    /// `name` resolves to the entry's default color; `name.default` and
    /// `name.contrast` select a side explicitly.
    pub fn color_of(&self, token: &str) -> Result<String> {
        self.palette_color(token).map(|color| color.to_string())
    }

    /// Like [`color_of`](Self::color_of), but returns the parsed color.
    pub fn palette_color(&self, token: &str) -> Result<&RgbaColor> {
        if let Some(entry) = self.palette.get(token) {
            return Ok(&entry.default);
        }
        if let Some((base, variant)) = token.rsplit_once('.') {
            if let Some(entry) = self.palette.get(base) {
                match variant {
                    "default" => return Ok(&entry.default),
                    "contrast" => return Ok(&entry.contrast),
                    _ => {}
                }
            }
        }
        Err(StyleError::UnknownPaletteToken(token.to_string()))
    }

    /// Resolves a color that may be either a palette token or literal CSS.
    ///
    /// Palette tokens win; anything else must parse as a color.
    pub fn resolve_color(&self, value: &str) -> Result<RgbaColor> {
        if let Ok(color) = self.palette_color(value) {
            return Ok(color.clone());
        }
        RgbaColor::parse(value).map_err(|_| StyleError::UnknownPaletteToken(value.to_string()))
    }

    /// Returns the text color to use on top of `value` (token or literal).
    pub fn contrast_of(&self, value: &str) -> Result<RgbaColor> {
        if let Some(entry) = self.palette.get(value) {
            return Ok(entry.contrast.clone());
        }
        self.resolve_color(value).map(|color| color.contrast())
    }

    /// Returns the media query of a breakpoint, without the `@media` prefix.
    pub fn media_query(&self, name: &str) -> Result<&str> {
        self.breakpoints
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| StyleError::UnknownBreakpoint(name.to_string()))
    }

    /// Returns a ready-to-use at-rule key for a breakpoint.
    pub fn breakpoint(&self, name: &str) -> Result<String> {
        Ok(format!("@media {}", self.media_query(name)?))
    }

    /// Returns the slot fragments of a field appearance.
    ///
    /// The theme's `base` appearance is merged under the named one. Names
    /// missing from the theme fall back to the built-in appearances
    /// (`standard`); anything else is an [`StyleError::UnknownAppearance`].
    pub fn field_appearance(&self, name: &str) -> Result<StyleObject> {
        let variant = self
            .field
            .appearance
            .get(name)
            .or_else(|| DEFAULT_FIELD_APPEARANCE.get(name))
            .ok_or_else(|| StyleError::UnknownAppearance {
                domain: "field".into(),
                name: name.to_string(),
            })?;

        let mut merged = self.field.appearance.get("base").cloned().unwrap_or_default();
        merge_deep(&mut merged, variant.clone());
        Ok(merged)
    }

    /// Returns the fragment for a button size.
    pub fn button_size(&self, name: &str) -> Result<&StyleObject> {
        self.button.size.get(name).ok_or_else(|| StyleError::UnknownSize {
            domain: "button".into(),
            name: name.to_string(),
        })
    }

    /// Returns the fragment for a button appearance.
    pub fn button_appearance(&self, name: &str) -> Result<&StyleObject> {
        self.button
            .appearance
            .get(name)
            .ok_or_else(|| StyleError::UnknownAppearance {
                domain: "button".into(),
                name: name.to_string(),
            })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

fn default_breakpoints() -> HashMap<String, String> {
    [
        ("XSmall", "(max-width: 599px)"),
        ("Small", "(min-width: 600px) and (max-width: 959px)"),
        ("Medium", "(min-width: 960px) and (max-width: 1279px)"),
        ("Large", "(min-width: 1280px) and (max-width: 1919px)"),
        ("XLarge", "(min-width: 1920px)"),
        (
            "Handset",
            "(max-width: 599px) and (orientation: portrait), (max-width: 959px) and (orientation: landscape)",
        ),
        (
            "Tablet",
            "(min-width: 600px) and (max-width: 839px) and (orientation: portrait), (min-width: 960px) and (max-width: 1279px) and (orientation: landscape)",
        ),
        (
            "Web",
            "(min-width: 840px) and (orientation: portrait), (min-width: 1280px) and (orientation: landscape)",
        ),
        ("HandsetPortrait", "(max-width: 599px) and (orientation: portrait)"),
        (
            "TabletPortrait",
            "(min-width: 600px) and (max-width: 839px) and (orientation: portrait)",
        ),
        ("WebPortrait", "(min-width: 840px) and (orientation: portrait)"),
        ("HandsetLandscape", "(max-width: 959px) and (orientation: landscape)"),
        (
            "TabletLandscape",
            "(min-width: 960px) and (max-width: 1279px) and (orientation: landscape)",
        ),
        ("WebLandscape", "(min-width: 1280px) and (orientation: landscape)"),
    ]
    .into_iter()
    .map(|(name, query)| (name.to_string(), query.to_string()))
    .collect()
}

fn default_field_appearances() -> HashMap<String, StyleObject> {
    let mut appearances = HashMap::new();
    appearances.insert("base".into(), StyleObject::new());
    appearances.insert(
        "outlined".into(),
        style! {
            "root" => {
                "&:not({focused}):not({disabled}):hover {fieldset}" => {
                    "borderColor" => "currentColor",
                },
            },
            "container" => { "padding" => "0 0.75em" },
            "fieldset" => {
                "borderWidth" => "1px",
                "borderRadius" => "5px",
                "padding" => "0 0.5em",
            },
            "containerFocused" => {
                "& {fieldset}" => { "borderWidth" => "2px", "borderColor" => "inherit" },
            },
            "label" => { "margin" => "1em 0" },
            "placeholder" => { "margin" => "1em 0" },
            "input" => { "margin" => "1em 0" },
            "floatingLabel" => { "transform" => "translateY(-1.75em)" },
            "hint" => { "padding" => "0 0.75em" },
        },
    );
    appearances.insert(
        "filled".into(),
        style! {
            "container" => {
                "borderRadius" => "5px 5px 0 0",
                "padding" => "1.75em 0.75em 0",
                "&:after" => {
                    "borderBottomStyle" => "solid",
                    "borderBottomColor" => "currentColor",
                    "borderBottomWidth" => 0,
                },
            },
            "containerFocused" => {
                "&:after" => { "borderBottomWidth" => "2px" },
            },
            "label" => { "margin" => "0.75em 0" },
            "placeholder" => { "margin" => "0.75em 0" },
            "input" => { "margin" => "0.75em 0" },
            "floatingLabel" => { "transform" => "translateY(-0.5em)" },
            "hint" => { "padding" => "0 0.75em" },
        },
    );
    appearances
}

fn default_button_theme() -> ButtonTheme {
    let mut size = HashMap::new();
    size.insert(
        "small".into(),
        style! {
            "padding" => "0 8px",
            "fontSize" => "0.8125rem",
            "minHeight" => "32px",
            "minWidth" => "48px",
        },
    );
    size.insert(
        "medium".into(),
        style! {
            "padding" => "0 14px",
            "minHeight" => "36px",
            "minWidth" => "64px",
        },
    );
    size.insert(
        "large".into(),
        style! {
            "padding" => "0 21px",
            "fontSize" => "0.9375rem",
            "minHeight" => "40px",
            "minWidth" => "96px",
        },
    );

    let round = |side: &str| {
        style! {
            "minWidth" => side,
            "width" => side,
            "height" => side,
            "padding" => 0,
            "borderRadius" => "50%",
        }
    };
    let mut appearance = HashMap::new();
    appearance.insert("icon".into(), round("40px"));
    appearance.insert("fab".into(), round("56px"));
    appearance.insert("miniFab".into(), round("40px"));

    ButtonTheme { size, appearance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::style::StyleValue;

    #[test]
    fn test_palette_variants() {
        let theme = Theme::light();
        assert_eq!(theme.color_of("primary.default").unwrap(), "#6200ee");
        assert_eq!(theme.color_of("background.primary").unwrap(), "#ffffff");
        assert_eq!(theme.color_of("text.secondary").unwrap(), "rgba(0,0,0,0.54)");
        assert_eq!(
            theme.color_of("primary.shade"),
            Err(StyleError::UnknownPaletteToken("primary.shade".into()))
        );
    }

    #[test]
    fn test_resolve_color_accepts_literals() {
        let theme = Theme::dark();
        assert_eq!(theme.resolve_color("#000").unwrap(), RgbaColor::black());
        assert_eq!(theme.resolve_color("accent").unwrap(), RgbaColor::hex("#9C27B0"));
        assert!(theme.resolve_color("brand").is_err());
    }

    #[test]
    fn test_contrast_of_prefers_palette() {
        let theme = Theme::dark();
        assert_eq!(theme.contrast_of("primary").unwrap(), RgbaColor::rgba(0, 0, 0, 0.87));
        assert_eq!(theme.contrast_of("#ffffff").unwrap(), RgbaColor::rgba(0, 0, 0, 0.87));
    }

    #[test]
    fn test_standard_field_appearance_falls_back_to_builtin() {
        let theme = Theme::light();
        let standard = theme.field_appearance("standard").unwrap();
        let container = standard.get("container").and_then(StyleValue::as_object).unwrap();
        assert_eq!(container.get("padding"), Some(&StyleValue::Str("1em 0 0".into())));
    }

    #[test]
    fn test_field_appearance_merges_base() {
        let mut theme = Theme::light();
        theme.field.appearance.insert(
            "base".into(),
            style! { "container" => { "color" => "$text.secondary" }, "hint" => { "margin" => 0 } },
        );
        let outlined = theme.field_appearance("outlined").unwrap();
        let container = outlined.get("container").and_then(StyleValue::as_object).unwrap();
        assert_eq!(container.get("color"), Some(&StyleValue::Str("$text.secondary".into())));
        assert_eq!(container.get("padding"), Some(&StyleValue::Str("0 0.75em".into())));
        // Blocks present on both sides are merged, not replaced.
        let hint = outlined.get("hint").and_then(StyleValue::as_object).unwrap();
        assert!(hint.contains_key("margin"));
        assert!(hint.contains_key("padding"));
    }

    #[test]
    fn test_unknown_appearance_and_size() {
        let theme = Theme::light();
        assert_eq!(
            theme.field_appearance("glass"),
            Err(StyleError::UnknownAppearance {
                domain: "field".into(),
                name: "glass".into()
            })
        );
        assert!(matches!(
            theme.button_size("huge"),
            Err(StyleError::UnknownSize { .. })
        ));
        assert!(theme.button_appearance("fab").is_ok());
    }

    #[test]
    fn test_unknown_breakpoint() {
        let theme = Theme::light();
        assert_eq!(
            theme.breakpoint("Watch"),
            Err(StyleError::UnknownBreakpoint("Watch".into()))
        );
    }
}
