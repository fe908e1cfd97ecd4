//! # lyui-rs
//!
//! Umbrella crate for the lyui style engine:
//!
//! - [`lystyle`]: style descriptions, themes and CSS serialization
//! - [`lyui`]: the runtime (class names, stylesheet, theme switching, frames)
//!
//! Most applications only need the [`prelude`].

pub use lystyle;
pub use lyui;

pub mod prelude {
    pub use lystyle::{
        Direction, Result, RgbaColor, StyleError, StyleObject, StyleValue, Theme, style,
    };
    pub use lyui::{
        CapabilityConfig, ClassBinding, Document, ElementId, FrameKey, LyTheme, Renderer,
        SheetClasses, StyleDefinition, StyleSheetDefinition, StyleUpdater, ThemeConfig,
    };
}
