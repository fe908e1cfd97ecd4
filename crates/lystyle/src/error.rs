//! Error types for style resolution.
//!
//! Every variant except [`StyleError::ThemeRebuild`] is a configuration
//! error: a style description referenced something the active theme does not
//! define. These are raised synchronously to whoever registered the style and
//! are never replaced with a default value.

use thiserror::Error;

/// Errors that can occur while resolving or serializing a style description.
///
/// # Examples
///
/// ```rust
/// use lystyle::{SerializeContext, StyleError, Theme, serialize, style};
///
/// let theme = Theme::light();
/// let description = style! { "color" => "$not-a-color" };
///
/// let err = serialize(&description, &SerializeContext::new(&theme, "e0")).unwrap_err();
/// assert_eq!(err, StyleError::UnknownPaletteToken("not-a-color".into()));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// A `@media $Name` key named a breakpoint the theme does not define.
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    /// A `$token` value (or a capability color) named a palette entry the
    /// theme does not define.
    #[error("Unknown palette token: ${0}")]
    UnknownPaletteToken(String),

    /// A component asked for an appearance that neither the theme nor the
    /// built-in fallbacks provide.
    #[error("{name} not found in theme.{domain}.appearance")]
    UnknownAppearance { domain: String, name: String },

    /// A component asked for a size the theme does not define.
    #[error("{name} not found in theme.{domain}.size")]
    UnknownSize { domain: String, name: String },

    /// A selector referenced `{slot}` outside of a style sheet that has it.
    #[error("Unknown style slot: {{{0}}}")]
    UnknownSlot(String),

    /// Raw declaration text could not be parsed.
    #[error("Invalid declaration block: {0}")]
    InvalidDeclaration(String),

    /// Some entries could not be rebuilt after the theme was replaced.
    ///
    /// Each failing style key is listed with its cause. Entries that failed
    /// keep serving the CSS of the previous theme.
    #[error("{} style entries failed to rebuild after theme change", .0.len())]
    ThemeRebuild(Vec<(String, StyleError)>),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, StyleError>;
