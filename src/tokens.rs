//! Design tokens mirrored for programmatic use.
//!
//! The styling layer owns the canonical values; this module exports the
//! same tokens for code that needs them outside stylesheets (canvas
//! drawing, inline styles, native views).

use thiserror::Error;

pub mod colors {
    pub const PRIMARY: &str = "#0ea5e9"; // blue-500
    pub const SECONDARY: &str = "#a855f7"; // purple-500
    pub const SUCCESS: &str = "#10b981"; // green-500
    pub const ERROR: &str = "#ef4444"; // red-500
    pub const TEXT: &str = "#171717"; // gray-900
    pub const TEXT_LIGHT: &str = "#737373"; // gray-500
    pub const TEXT_DISABLED: &str = "#a3a3a3"; // gray-400
    pub const BG: &str = "#ffffff";
    pub const BG_LIGHT: &str = "#fafafa"; // gray-50
    pub const BG_TERTIARY: &str = "#f5f5f5"; // gray-100
    pub const BORDER: &str = "#e5e5e5"; // gray-200
}

pub mod spacing {
    pub const XS: &str = "0.5rem";
    pub const SM: &str = "1rem";
    pub const MD: &str = "1.5rem";
    pub const LG: &str = "2rem";
    pub const XL: &str = "3rem";
}

pub mod radius {
    pub const SM: &str = "0.5rem";
    pub const MD: &str = "1rem";
    pub const LG: &str = "1.5rem";
    pub const FULL: &str = "9999px";
}

pub mod shadows {
    pub const SM: &str = "0 1px 2px rgba(0,0,0,0.05)";
    pub const MD: &str = "0 4px 6px rgba(0,0,0,0.1)";
    pub const LG: &str = "0 10px 15px rgba(0,0,0,0.1)";
}

pub mod font_size {
    pub const XS: &str = "0.75rem";
    pub const SM: &str = "0.875rem";
    pub const BASE: &str = "1rem";
    pub const LG: &str = "1.125rem";
    pub const XL: &str = "1.5rem";
    pub const XL2: &str = "2rem";
    pub const XL3: &str = "2.5rem";
    pub const XL4: &str = "3rem";
}

pub mod opacity {
    pub const DISABLED: f32 = 0.5;
    pub const HOVER: f32 = 0.9;
    pub const FOCUS: f32 = 0.1;
}

/// A hex color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{value}'")]
pub struct InvalidHexColor {
    pub value: String,
}

/// A color broken out into channels plus an alpha, rendering as a CSS
/// `rgba(...)` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

/// Convert a `#rrggbb` token into its `rgba(...)` form with the given
/// alpha. Anything other than a seven-character `#`-prefixed string is
/// rejected.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Result<Rgba, InvalidHexColor> {
    let invalid = || InvalidHexColor {
        value: hex.to_string(),
    };

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };

    Ok(Rgba {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
        alpha,
    })
}
