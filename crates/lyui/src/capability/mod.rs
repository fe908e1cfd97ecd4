//! Composable style contributions.
//!
//! A component's visual options (background, text color, elevation, outline,
//! disabled state) are independent [`StyleCapability`] values instead of a
//! chain of wrappers. [`CapabilityConfig`] lists the options that are set and
//! composes them in a fixed order; [`StyleUpdater`] turns the composition
//! into one themed style per distinct combination and keeps it bound to the
//! component's element.
//!
//! Order matters: [`Disabled`] is applied last so it can override colors and
//! remove shadows contributed by the others.

pub mod shadow;

use crate::binding::ClassBinding;
use crate::facade::LyTheme;
use crate::registry::StyleDefinition;
use crate::renderer::{ElementId, Renderer};
use lystyle::{Result, StyleObject, Theme, style};
use std::fmt;

pub use shadow::{MAX_ELEVATION, shadow};

/// One independent contribution to a component's style.
pub trait StyleCapability: fmt::Debug {
    /// Part of the style key that identifies this contribution, if any.
    fn key_fragment(&self) -> Option<String>;

    /// Adds this contribution to `style`.
    fn apply_to(&self, style: &mut StyleObject, theme: &Theme) -> Result<()>;
}

/// Background color; optionally sets a readable text color as well.
#[derive(Debug, Clone, PartialEq)]
pub struct Bg {
    pub color: String,
    pub auto_contrast: bool,
}

impl StyleCapability for Bg {
    fn key_fragment(&self) -> Option<String> {
        Some(format!("bg:{}", self.color))
    }

    fn apply_to(&self, style: &mut StyleObject, theme: &Theme) -> Result<()> {
        style.set("background", theme.resolve_color(&self.color)?);
        if self.auto_contrast {
            style.set("color", theme.contrast_of(&self.color)?);
        }
        Ok(())
    }
}

/// Text color.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub color: String,
}

impl StyleCapability for Color {
    fn key_fragment(&self) -> Option<String> {
        Some(format!("color:{}", self.color))
    }

    fn apply_to(&self, style: &mut StyleObject, theme: &Theme) -> Result<()> {
        style.set("color", theme.resolve_color(&self.color)?);
        Ok(())
    }
}

/// A 1px border in the current text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outlined;

impl StyleCapability for Outlined {
    fn key_fragment(&self) -> Option<String> {
        Some("outlined".to_string())
    }

    fn apply_to(&self, style: &mut StyleObject, _theme: &Theme) -> Result<()> {
        style.set("border", "1px solid currentColor");
        Ok(())
    }
}

fn shadow_base(color: Option<&str>, theme: &Theme) -> Result<lystyle::RgbaColor> {
    match color {
        Some(color) => theme.resolve_color(color),
        None => Ok(theme.shadow.clone()),
    }
}

/// Raised surface: elevation 3 at rest, 8 while pressed.
///
/// Surfaces without a background get `background.primary`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raised {
    pub shadow_color: Option<String>,
}

impl StyleCapability for Raised {
    fn key_fragment(&self) -> Option<String> {
        Some(match &self.shadow_color {
            Some(color) => format!("raised:{color}"),
            None => "raised".to_string(),
        })
    }

    fn apply_to(&self, style: &mut StyleObject, theme: &Theme) -> Result<()> {
        if !style.contains_key("background") {
            style.set("background", theme.color_of("background.primary")?);
        }
        let base = shadow_base(self.shadow_color.as_deref(), theme)?;
        style.set("boxShadow", shadow(3, &base));
        style.set("&:active", style! { "boxShadow" => shadow(8, &base) });
        Ok(())
    }
}

/// Fixed elevation shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct Elevation {
    pub level: u8,
    pub shadow_color: Option<String>,
}

impl StyleCapability for Elevation {
    fn key_fragment(&self) -> Option<String> {
        Some(match &self.shadow_color {
            Some(color) => format!("elevation:{}:{color}", self.level),
            None => format!("elevation:{}", self.level),
        })
    }

    fn apply_to(&self, style: &mut StyleObject, theme: &Theme) -> Result<()> {
        let base = shadow_base(self.shadow_color.as_deref(), theme)?;
        style.set("boxShadow", shadow(self.level, &base));
        Ok(())
    }
}

/// Disabled state. Must be applied after every other capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disabled;

impl StyleCapability for Disabled {
    fn key_fragment(&self) -> Option<String> {
        Some("disabled".to_string())
    }

    fn apply_to(&self, style: &mut StyleObject, theme: &Theme) -> Result<()> {
        if style.contains_key("background") {
            style.set("background", theme.disabled.default.clone());
        }
        style.set("color", theme.disabled.contrast.clone());
        style.set("cursor", "default");
        style.set("pointerEvents", "none");
        style.remove("boxShadow");
        style.remove("&:active");
        Ok(())
    }
}

/// The visual options of a component.
///
/// A `color` of `"auto"` (or no color at all next to a `bg`) means the text
/// color is derived from the background.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilityConfig {
    pub bg: Option<String>,
    pub color: Option<String>,
    pub raised: bool,
    pub elevation: Option<u8>,
    pub shadow_color: Option<String>,
    pub outlined: bool,
    pub disabled: bool,
}

impl CapabilityConfig {
    pub fn with_bg(mut self, color: &str) -> Self {
        self.bg = Some(color.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_raised(mut self, raised: bool) -> Self {
        self.raised = raised;
        self
    }

    pub fn with_elevation(mut self, level: u8) -> Self {
        self.elevation = Some(level);
        self
    }

    pub fn with_shadow_color(mut self, color: &str) -> Self {
        self.shadow_color = Some(color.to_string());
        self
    }

    pub fn with_outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The capabilities that are set, in application order.
    pub fn compose(&self) -> Vec<Box<dyn StyleCapability>> {
        let mut capabilities: Vec<Box<dyn StyleCapability>> = Vec::new();
        let auto_color = self.color.as_deref().is_none_or(|color| color == "auto");

        if let Some(bg) = &self.bg {
            capabilities.push(Box::new(Bg {
                color: bg.clone(),
                auto_contrast: auto_color,
            }));
        }
        if let Some(color) = self.color.as_ref().filter(|_| !auto_color) {
            capabilities.push(Box::new(Color {
                color: color.clone(),
            }));
        }
        if self.outlined {
            capabilities.push(Box::new(Outlined));
        }

        // Shadows follow the background unless told otherwise.
        let shadow_color = self.shadow_color.clone().or_else(|| self.bg.clone());
        if let Some(level) = self.elevation {
            capabilities.push(Box::new(Elevation {
                level,
                shadow_color,
            }));
        } else if self.raised {
            capabilities.push(Box::new(Raised { shadow_color }));
        }

        if self.disabled {
            capabilities.push(Box::new(Disabled));
        }
        capabilities
    }

    /// Style key of this combination, e.g. `lyButton|bg:primary|raised`.
    pub fn style_key(&self, prefix: &str) -> String {
        self.compose()
            .iter()
            .filter_map(|capability| capability.key_fragment())
            .fold(prefix.to_string(), |key, fragment| format!("{key}|{fragment}"))
    }
}

/// Applies a component's capabilities to its element.
#[derive(Debug)]
pub struct StyleUpdater {
    prefix: String,
    priority: i32,
    binding: ClassBinding,
}

impl StyleUpdater {
    pub fn new(prefix: &str, element: ElementId, priority: i32) -> Self {
        Self {
            prefix: prefix.to_string(),
            priority,
            binding: ClassBinding::new(element),
        }
    }

    pub fn binding(&self) -> &ClassBinding {
        &self.binding
    }

    /// Registers the style for `config` and binds it to the element.
    ///
    /// Components sharing a combination share one class.
    pub fn update_style(
        &mut self,
        theme: &mut LyTheme,
        renderer: &mut dyn Renderer,
        config: &CapabilityConfig,
    ) -> Result<String> {
        let key = config.style_key(&self.prefix);
        let capabilities = config.compose();
        let definition = StyleDefinition::themed(move |theme: &Theme| {
            let mut style = StyleObject::new();
            for capability in &capabilities {
                capability.apply_to(&mut style, theme)?;
            }
            Ok(style)
        });
        self.binding
            .bind(theme, renderer, &key, definition, self.priority)
    }

    /// Removes the class from the element and releases the style.
    pub fn release(&mut self, theme: &mut LyTheme, renderer: &mut dyn Renderer) -> bool {
        self.binding.unbind(theme, renderer)
    }
}
