//! Per-family color themes.
//!
//! Every document family maps to a fixed primary color; the dark and light
//! companions are derived with fixed alpha blends (20% toward black, 15%
//! toward white) so the palette stays consistent without a second lookup
//! table.

use crate::classify::DocumentFamily;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a `#RRGGBB` hex string.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Blend toward another color: `self * (1 - alpha) + other * alpha`,
    /// rounded per channel.
    pub fn blend(&self, other: Rgb, alpha: f32) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) * (1.0 - alpha) + f32::from(b) * alpha).round() as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Relative luminance (ITU-R BT.601 weights), 0.0–255.0.
    pub fn luminance(&self) -> f32 {
        0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Fraction of black mixed into the dark variant.
const DARK_ALPHA: f32 = 0.20;
/// Fraction of white mixed into the light variant.
const LIGHT_ALPHA: f32 = 0.15;

/// Color palette applied to a rendered document's chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSpec {
    /// Family the palette was derived from
    pub family: DocumentFamily,
    /// Primary brand color
    pub primary: Rgb,
    /// Primary blended 20% toward black (headers, borders)
    pub dark: Rgb,
    /// Primary blended 15% toward white (accents, table stripes)
    pub light: Rgb,
    /// Glyph shown next to the document title
    pub icon_glyph: char,
}

/// Resolve the theme for a document family.
///
/// Total function: every family has a palette, and the plain-text palette
/// doubles as the default. Never errors.
pub fn resolve_theme(family: DocumentFamily) -> ThemeSpec {
    let (primary, icon_glyph) = match family {
        DocumentFamily::Word => (Rgb::new(0x2B, 0x57, 0x9A), '\u{1F4C4}'),       // 📄
        DocumentFamily::Excel => (Rgb::new(0x21, 0x73, 0x46), '\u{1F4CA}'),      // 📊
        DocumentFamily::PowerPoint => (Rgb::new(0xD2, 0x47, 0x26), '\u{1F4FD}'), // 📽
        DocumentFamily::Pdf => (Rgb::new(0xF4, 0x0F, 0x02), '\u{1F4D5}'),        // 📕
        DocumentFamily::Code => (Rgb::new(0x00, 0x78, 0xD7), '\u{2328}'),        // ⌨
        DocumentFamily::Markdown => (Rgb::new(0x76, 0x4A, 0xBC), '\u{1F4DD}'),   // 📝
        // Plain text shares the default blue palette.
        DocumentFamily::Text => (Rgb::new(0x00, 0x78, 0xD7), '\u{1F4C3}'),       // 📃
    };

    ThemeSpec {
        family,
        primary,
        dark: primary.blend(BLACK, DARK_ALPHA),
        light: primary.blend(WHITE, LIGHT_ALPHA),
        icon_glyph,
    }
}
