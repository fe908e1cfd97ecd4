pub mod color;
pub mod style;
pub mod theme;

pub use color::{ColorParseError, RgbaColor};
pub use style::{StyleObject, StyleValue, merge_deep};
pub use theme::{
    AnimationCurves, AnimationDurations, Animations, ButtonTheme, DisabledColors, FieldTheme,
    IconTheme, PaletteColor, Theme, TooltipTheme,
};
