use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgba8Premul,
    error::{ShotError, ShotResult},
};

/// Straight-alpha RGBA8 colour as entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }

    /// Look up a named swatch (case-insensitive).
    pub fn swatch(name: &str) -> Option<Self> {
        SWATCHES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(_, c)| *c)
    }
}

/// Built-in background palette offered next to the free colour picker.
pub const SWATCHES: &[(&str, Color)] = &[
    ("slate", Color::rgb(0x0f, 0x17, 0x2a)),
    ("indigo", Color::rgb(0x4f, 0x46, 0xe5)),
    ("violet", Color::rgb(0x7c, 0x3a, 0xed)),
    ("rose", Color::rgb(0xe1, 0x1d, 0x48)),
    ("amber", Color::rgb(0xf5, 0x9e, 0x0b)),
    ("emerald", Color::rgb(0x10, 0xb9, 0x81)),
    ("sky", Color::rgb(0x0e, 0xa5, 0xe9)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
];

impl Default for Color {
    fn default() -> Self {
        SWATCHES[0].1
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = ShotError;

    fn from_str(s: &str) -> ShotResult<Self> {
        if let Some(c) = Color::swatch(s) {
            return Ok(c);
        }
        parse_hex(s).map_err(ShotError::validation)
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid colour \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err(format!(
            "colour \"{s}\" must be a swatch name, #RRGGBB or #RRGGBBAA"
        )),
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s
                .parse::<Color>()
                .map_err(|e| serde::de::Error::custom(e.to_string())),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/color.rs"]
mod tests;
