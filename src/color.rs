//! Hex color arithmetic and speckle color selection

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Moss green tones used for algae speckles
pub const GREEN_MOSS_COLORS: [&str; 6] = [
    "#2d5a27", // dark green
    "#3f7d2f",
    "#4e9935",
    "#60b044",
    "#72c753",
    "#85de62", // very light green
];

/// Weathered brown tones used for the bare moss surface
pub const BROWN_MOSS_COLORS: [&str; 12] = [
    "#c4b7a6", // light tan
    "#d2c6b5",
    "#b5a088",
    "#e0d5c5",
    "#c2b2a3",
    "#baa89a",
    "#d4c8b9",
    "#cdbfae",
    "#b8a695",
    "#c7baaa",
    "#af9d8c",
    "#d8ccbd", // light brown
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid hex color '{0}'")]
pub struct InvalidColor(pub String);

/// A `#RRGGBB` color that remembers how it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    raw: String,
    rgb: [u8; 3],
}

impl HexColor {
    /// Build a color from channel values; the spelling is lowercase hex
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            raw: format!("#{:02x}{:02x}{:02x}", r, g, b),
            rgb: [r, g, b],
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// The color exactly as it appeared in the input
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Shift every channel by `delta`, clamping to `0..=255`.
    ///
    /// The result is always spelled in lowercase, so `adjust(0)` normalizes
    /// case without changing the color.
    pub fn adjust(&self, delta: i32) -> HexColor {
        let shift = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
        let [r, g, b] = self.rgb;
        HexColor::from_rgb(shift(r), shift(g), shift(b))
    }
}

impl FromStr for HexColor {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| InvalidColor(s.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| InvalidColor(s.to_string()))
        };

        Ok(Self {
            raw: s.to_string(),
            rgb: [channel(0)?, channel(2)?, channel(4)?],
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// A source of uniform floats in `[0, 1)`
///
/// Every `rand` generator is a source; tests can plug in fixed sequences.
pub trait RandomSource {
    fn next_float(&mut self) -> f64;
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_float(&mut self) -> f64 {
        rand::Rng::gen::<f64>(self)
    }
}

/// Roll whether a speckle cell shows algae, with `probability_percent` in `0..=100`
pub fn decide_accent(probability_percent: u8, source: &mut dyn RandomSource) -> bool {
    source.next_float() * 100.0 < f64::from(probability_percent)
}

/// Pick a speckle color from the green palette for accents, brown otherwise
pub fn pick_speckle_color(is_accent: bool, source: &mut dyn RandomSource) -> &'static str {
    let palette: &[&'static str] = if is_accent {
        &GREEN_MOSS_COLORS
    } else {
        &BROWN_MOSS_COLORS
    };
    let index = (source.next_float() * palette.len() as f64) as usize;
    palette[index.min(palette.len() - 1)]
}
