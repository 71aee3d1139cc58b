// File: crates/tickline-core/src/style.rs
// Summary: Line/axis styling, read once from a TOML config source, plus light/dark presets.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// ARGB8 color, backend agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::from_rgb(0xff, 0xff, 0xff);
    pub const DARK_GRAY: Color = Color::from_rgb(0x44, 0x44, 0x44);
    pub const GRAY: Color = Color::from_rgb(0x88, 0x88, 0x88);
    pub const LIGHT_GRAY: Color = Color::from_rgb(0xcc, 0xcc, 0xcc);
    pub const RED: Color = Color::from_rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::from_rgb(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::from_rgb(0x00, 0x00, 0xff);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xff, r, g, b)
    }

    /// Packed `0xAARRGGBB`.
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse `#RRGGBB`, `#AARRGGBB` or a color name.
    pub fn parse(s: &str) -> ChartResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            // from_str_radix alone would accept a leading sign
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ChartError::Config(format!("bad color '{s}'")));
            }
            let packed = u32::from_str_radix(hex, 16)
                .map_err(|_| ChartError::Config(format!("bad color '{s}'")))?;
            return match hex.len() {
                6 => Ok(Self::from_rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)),
                8 => Ok(Self::from_argb((packed >> 24) as u8, (packed >> 16) as u8, (packed >> 8) as u8, packed as u8)),
                _ => Err(ChartError::Config(format!("bad color '{s}'"))),
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "dark-gray" | "darkgray" | "dkgray" => Ok(Self::DARK_GRAY),
            "gray" => Ok(Self::GRAY),
            "light-gray" | "lightgray" | "ltgray" => Ok(Self::LIGHT_GRAY),
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "blue" => Ok(Self::BLUE),
            _ => Err(ChartError::Config(format!("unknown color '{s}'"))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:08x}", self.to_u32())
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Stroke and fill settings for one chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChartStyle {
    /// Series stroke width in pixels; 0 draws a hairline.
    pub line_thickness: f32,
    pub line_color: Color,
    pub axis_color: Color,
    pub axis_thickness: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_thickness: 0.0,
            line_color: Color::BLACK,
            axis_color: Color::DARK_GRAY,
            axis_thickness: 1,
        }
    }
}

impl ChartStyle {
    pub fn from_toml_str(src: &str) -> ChartResult<Self> {
        let style: ChartStyle = toml::from_str(src).map_err(|e| ChartError::Config(e.to_string()))?;
        if !style.line_thickness.is_finite() || style.line_thickness < 0.0 {
            return Err(ChartError::Config(format!("line-thickness must be >= 0, got {}", style.line_thickness)));
        }
        Ok(style)
    }

    pub fn load(path: impl AsRef<Path>) -> ChartResult<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn to_toml_string(&self) -> ChartResult<String> {
        toml::to_string(self).map_err(|e| ChartError::Config(e.to_string()))
    }

    pub fn dark() -> Self {
        Self {
            line_thickness: 2.0,
            line_color: Color::from_rgb(64, 160, 255),
            axis_color: Color::from_rgb(180, 180, 190),
            axis_thickness: 1,
        }
    }

    pub fn light() -> Self {
        Self {
            line_thickness: 2.0,
            line_color: Color::from_rgb(32, 120, 200),
            axis_color: Color::from_rgb(60, 60, 70),
            axis_thickness: 1,
        }
    }
}

/// Return the built-in presets as `(name, style)` pairs.
pub fn presets() -> Vec<(&'static str, ChartStyle)> {
    vec![
        ("default", ChartStyle::default()),
        ("dark", ChartStyle::dark()),
        ("light", ChartStyle::light()),
    ]
}

/// Find a preset by name, falling back to the default style.
pub fn find(name: &str) -> ChartStyle {
    for (n, s) in presets() { if n.eq_ignore_ascii_case(name) { return s; } }
    ChartStyle::default()
}
