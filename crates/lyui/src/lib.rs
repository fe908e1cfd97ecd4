//! # lyui - Runtime style engine
//!
//! Turns [`lystyle`] descriptions into live CSS: every distinct style key is
//! serialized once, gets a stable class name, and is inserted into an ordered
//! stylesheet at its priority. Elements receive classes through a
//! [`Renderer`]; replacing the theme rebuilds every rule in place.
//!
//! ## Quick Start
//!
//! ```rust
//! use lyui::{Document, LyTheme, StyleDefinition, Theme, style};
//!
//! let mut theme = LyTheme::new(Theme::light());
//! let mut document = Document::new();
//! let button = document.create_element();
//!
//! let definition = StyleDefinition::themed(|theme: &Theme| {
//!     Ok(style! { "color" => theme.color_of("primary")? })
//! });
//! let class = theme
//!     .add_style_to(&mut document, button, "button.root", definition, None, -2)
//!     .unwrap();
//!
//! assert_eq!(class, "e0");
//! assert_eq!(theme.css_text(), ".e0{color:#6200ee}");
//! assert!(document.classes(button).unwrap().contains(&"e0".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`facade`]: [`LyTheme`], the single entry point components talk to
//! - [`registry`]: Style entries, sheets and reference counting
//! - [`injector`]: The priority-ordered rule list
//! - [`class_name`]: Stable class name allocation
//! - [`theme_store`]: The active theme and its generation
//! - [`renderer`]: Element class mutation and the in-memory [`Document`]
//! - [`binding`]: One style key bound to one element
//! - [`frame`]: Per-frame batching of style updates
//! - [`capability`]: Composable style contributions (background, elevation, ...)

pub mod binding;
pub mod capability;
pub mod class_name;
pub mod facade;
pub mod frame;
pub mod injector;
mod log_init;
pub mod registry;
pub mod renderer;
pub mod theme_store;

pub use binding::ClassBinding;
pub use capability::{CapabilityConfig, StyleCapability, StyleUpdater};
pub use class_name::{ClassNameAllocator, ClassNameStyle};
pub use facade::{FrameTask, LyTheme, ThemeConfig};
pub use frame::{FrameKey, FrameScheduler};
pub use injector::{InsertedRule, RuleHandle, StyleInjector, StyleSink};
pub use log_init::{init_logger, init_logger_with_level};
pub use registry::{SheetClasses, StyleDefinition, StyleEntry, StyleRegistry, StyleSheetDefinition};
pub use renderer::{Document, ElementId, Renderer};
pub use theme_store::ThemeStore;

// Re-export the log crate so users can use lyui::log::info!, etc.
pub use log;
pub use lystyle::{
    Direction, PaletteColor, Result, RgbaColor, StyleError, StyleObject, StyleValue, Theme,
    merge_deep, style,
};
