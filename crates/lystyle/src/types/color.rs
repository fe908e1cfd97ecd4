//! RGBA color type with parsing and CSS output.
//!
//! Palette entries, shadow colors and disabled colors in a [`Theme`](super::Theme)
//! are stored as [`RgbaColor`] so the engine can derive alpha variants (for
//! elevation shadows) and contrast colors (for auto-contrast text) before
//! writing them back out as CSS.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **Named**: a small set of CSS names (`black`, `white`, `red`, ...)
//! - **Special**: `transparent`
//!
//! ## CSS Output
//!
//! Opaque colors print as lowercase `#rrggbb`; translucent colors print as
//! `rgba(r,g,b,a)`.

use std::fmt;

/// Error returned when color parsing fails.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorParseError {
    /// Human-readable description of the parsing error.
    pub message: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// An sRGB color with alpha.
///
/// # Examples
///
/// ```
/// use lystyle::RgbaColor;
///
/// let red = RgbaColor::rgb(255, 0, 0);
/// assert_eq!(red.to_string(), "#ff0000");
///
/// let shadow = RgbaColor::parse("#333").unwrap().with_alpha(0.2);
/// assert_eq!(shadow.to_string(), "rgba(51,51,51,0.2)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl RgbaColor {
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color string (e.g., "#ff0000").
    ///
    /// Panics if the hex string is invalid. For fallible parsing, use `parse()`.
    pub fn hex(hex: &str) -> Self {
        Self::parse(hex).expect("invalid hex color")
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha,
            ..self.clone()
        }
    }

    /// Returns true if the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Calculates the relative luminance of this color.
    ///
    /// Uses the sRGB luminance formula (ITU-R BT.709).
    /// Returns a value between 0.0 (black) and 1.0 (white).
    pub fn luminance(&self) -> f32 {
        let r = Self::srgb_to_linear(self.r as f32 / 255.0);
        let g = Self::srgb_to_linear(self.g as f32 / 255.0);
        let b = Self::srgb_to_linear(self.b as f32 / 255.0);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    fn srgb_to_linear(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Returns the text color that reads best on top of this color.
    ///
    /// Light backgrounds get translucent black (`rgba(0,0,0,0.87)`), dark
    /// ones get white.
    pub fn contrast(&self) -> Self {
        if self.luminance() > 0.5 {
            Self::rgba(0, 0, 0, 0.87)
        } else {
            Self::white()
        }
    }

    /// Parse a color string in various formats.
    ///
    /// Supported formats:
    /// - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    /// - RGB: `rgb(r,g,b)`, `rgba(r,g,b,a)`
    /// - Named: basic CSS color names
    /// - Special: `transparent`
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError {
                message: "empty color string".to_string(),
            });
        }

        let lower = input.to_lowercase();

        if lower == "transparent" {
            return Ok(Self::transparent());
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }

        Self::parse_named(&lower)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .chars()
            .map(Self::parse_hex_digit)
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            [r, g, b, a] => Ok(Self::rgba(r * 17, g * 17, b * 17, (a * 17) as f32 / 255.0)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::rgba(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
                (a1 * 16 + a2) as f32 / 255.0,
            )),
            _ => Err(ColorParseError {
                message: format!("invalid hex color length: {}", digits.len()),
            }),
        }
    }

    fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
        c.to_digit(16).map(|d| d as u8).ok_or_else(|| ColorParseError {
            message: format!("invalid hex digit: {}", c),
        })
    }

    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let start = input.find('(').ok_or_else(|| ColorParseError {
            message: "missing '(' in rgb function".to_string(),
        })?;
        let end = input.rfind(')').ok_or_else(|| ColorParseError {
            message: "missing ')' in rgb function".to_string(),
        })?;
        if end < start {
            return Err(ColorParseError {
                message: format!("')' before '(' in rgb function: {input}"),
            });
        }

        let parts: Vec<&str> = input[start + 1..end].split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return Err(ColorParseError {
                message: "rgb requires at least 3 components".to_string(),
            });
        }

        let r = Self::parse_u8(parts[0])?;
        let g = Self::parse_u8(parts[1])?;
        let b = Self::parse_u8(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => alpha.parse().map_err(|_| ColorParseError {
                message: format!("invalid alpha: {}", alpha),
            })?,
            None => 1.0,
        };

        Ok(Self::rgba(r, g, b, a))
    }

    fn parse_u8(s: &str) -> Result<u8, ColorParseError> {
        s.parse().map_err(|_| ColorParseError {
            message: format!("invalid color component (0-255): {}", s),
        })
    }

    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        match name {
            "black" => Ok(Self::rgb(0, 0, 0)),
            "white" => Ok(Self::rgb(255, 255, 255)),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "blue" => Ok(Self::rgb(0, 0, 255)),
            "yellow" => Ok(Self::rgb(255, 255, 0)),
            "orange" => Ok(Self::rgb(255, 165, 0)),
            "purple" => Ok(Self::rgb(128, 0, 128)),
            "gray" | "grey" => Ok(Self::rgb(128, 128, 128)),
            _ => Err(ColorParseError {
                message: format!("unknown color name: {}", name),
            }),
        }
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}
