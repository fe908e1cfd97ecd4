//! # lystyle - Style objects and themes
//!
//! The pure half of the lyui style engine. Components describe their look as
//! nested [`StyleObject`]s (CSS-like keys mapped to values or nested blocks);
//! this crate turns those descriptions into flat CSS rule text against a
//! [`Theme`]. It holds no caches and touches no document, that is the job of
//! the `lyui` runtime crate.
//!
//! This crate provides:
//!
//! - **Types**: [`StyleObject`], [`StyleValue`], [`RgbaColor`] and the [`Theme`] model
//! - **Serialization**: [`serialize`] expands nesting, `&` self references,
//!   `{slot}` references, at-rules and breakpoints into CSS text
//! - **Direction**: [`resolve_property`] maps `before`/`after` logical
//!   properties onto `left`/`right` for the active [`Direction`]
//! - **Parsing**: [`StyleObject::parse`] reads raw declaration text
//!
//! ## Quick Start
//!
//! ```rust
//! use lystyle::{SerializeContext, Theme, serialize, style};
//!
//! let theme = Theme::light();
//! let button = style! {
//!     "display" => "inline-flex",
//!     "paddingBefore" => "8px",
//!     "&:hover" => {
//!         "color" => "$accent",
//!     },
//! };
//!
//! let css = serialize(&button, &SerializeContext::new(&theme, "e0")).unwrap();
//! assert_eq!(
//!     css,
//!     ".e0{display:inline-flex;padding-left:8px}.e0:hover{color:#ff2997}"
//! );
//! ```
//!
//! ## Description Syntax
//!
//! - `&` in a selector key is the enclosing selector: `&:hover`, `& > span`
//! - Selector keys without `&` are descendants: `span` → `.e0 span`
//! - `{slot}` refers to a sibling slot class of the same style sheet
//! - `@media ...` and `@supports ...` keys wrap their block
//! - `@media $XSmall` refers to a theme breakpoint
//! - `$primary`, `$primary.contrast` in values refer to palette colors
//! - camelCase keys are hyphenated: `marginBottom` → `margin-bottom`
//!
//! ## Modules
//!
//! - [`types`]: Style objects, colors and themes
//! - [`serializer`]: Description → CSS text
//! - [`direction`]: Writing direction and logical properties
//! - [`parser`]: Raw declaration block parsing
//! - [`error`]: Configuration error taxonomy

pub mod direction;
pub mod error;
mod macros;
pub mod parser;
pub mod serializer;
pub mod types;

pub use direction::{Direction, resolve_property};
pub use error::{Result, StyleError};
pub use serializer::{SerializeContext, serialize};
pub use types::{
    PaletteColor, RgbaColor, StyleObject, StyleValue, Theme, merge_deep,
};
