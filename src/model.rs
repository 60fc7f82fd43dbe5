//! Validated care guide document
//!
//! Values of these types only come out of [`crate::validate`], so every field
//! is present and within range. Serializing a [`Document`] produces the input
//! schema with all defaults filled in.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::color::HexColor;

pub const DEFAULT_ALGAE_PERCENTAGE: u8 = 10;
pub const DEFAULT_POLES_PER_ROW: u8 = 4;
pub const MAX_POLES_PER_ROW: u8 = 4;
pub const DEFAULT_TITLE: &str = "Moss Pole Care Guide";
pub const DEFAULT_TIPS: [&str; 4] = [
    "Mist 1-2× daily",
    "Check moisture",
    "Higher humidity in growing season",
    "Monitor moss moisture level",
];
/// Pot fill for poles without a `potColor`
pub const DEFAULT_POT_COLOR: &str = "#cc7f63";
/// Rim fill for poles without a `potColor`
pub const DEFAULT_POT_RIM_COLOR: &str = "#b26b52";
/// Channel shift from a pot color to its rim
pub const POT_RIM_DARKEN: i32 = -20;

/// A complete, validated care guide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub config: Config,
    pub poles: Vec<Pole>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub visual: VisualConfig,
    pub title: TitleConfig,
    pub care_tips: CareTipsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualConfig {
    pub background_color: HexColor,
    pub text_color: HexColor,
    /// Chance in percent that a speckle cell is algae green
    pub algae_percentage: u8,
    pub poles_per_row: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleConfig {
    pub enabled: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareTipsConfig {
    pub enabled: bool,
    pub tips: Vec<String>,
}

/// One plant on its moss pole
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pole {
    pub name: String,
    pub humidity_top: HumidityRange,
    pub humidity_middle: HumidityRange,
    pub humidity_bottom: HumidityRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pot_color: Option<HexColor>,
    pub display_sensor_place: bool,
}

impl Pole {
    /// The pole a freshly added plant starts from
    pub fn template() -> Self {
        Self {
            name: "New Plant".to_string(),
            humidity_top: HumidityRange::new(70, 80),
            humidity_middle: HumidityRange::new(65, 75),
            humidity_bottom: HumidityRange::new(60, 70),
            pot_color: Some(HexColor::from_rgb(0xcc, 0xcc, 0xcc)),
            display_sensor_place: false,
        }
    }

    /// Pot fill, falling back to [`DEFAULT_POT_COLOR`]
    pub fn resolved_pot_color(&self) -> HexColor {
        self.pot_color.clone().unwrap_or_else(default_pot_color)
    }

    /// Rim fill: the pot color darkened, or [`DEFAULT_POT_RIM_COLOR`] without one
    pub fn rim_color(&self) -> HexColor {
        match &self.pot_color {
            Some(color) => color.adjust(POT_RIM_DARKEN),
            None => default_pot_rim_color(),
        }
    }
}

pub fn default_pot_color() -> HexColor {
    HexColor::from_rgb(0xcc, 0x7f, 0x63)
}

pub fn default_pot_rim_color() -> HexColor {
    HexColor::from_rgb(0xb2, 0x6b, 0x52)
}

pub fn default_background_color() -> HexColor {
    HexColor::from_rgb(0xff, 0xff, 0xff)
}

pub fn default_text_color() -> HexColor {
    HexColor::from_rgb(0x33, 0x33, 0x33)
}

/// A `DD-DD` humidity band, kept verbatim for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumidityRange {
    raw: String,
    pub low: u8,
    pub high: u8,
}

impl HumidityRange {
    pub fn new(low: u8, high: u8) -> Self {
        Self {
            raw: format!("{:02}-{:02}", low, high),
            low,
            high,
        }
    }

    /// Parse the exact `DD-DD` shape; no ordering check between the bounds
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b'-' {
            return None;
        }
        let two_digits = |b: &[u8]| -> Option<u8> {
            match b {
                [t, u] if t.is_ascii_digit() && u.is_ascii_digit() => {
                    Some((t - b'0') * 10 + (u - b'0'))
                }
                _ => None,
            }
        };
        Some(Self {
            raw: s.to_string(),
            low: two_digits(&bytes[0..2])?,
            high: two_digits(&bytes[3..5])?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for HumidityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for HumidityRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
