use std::{path::Path, str::FromStr};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    config::color::Color,
    foundation::{
        core::non_negative,
        error::{ShotError, ShotResult},
    },
};

/// Final canvas shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aspect {
    /// Card plus padding, no reshaping.
    #[default]
    Auto,
    /// Both sides become the larger one.
    #[serde(alias = "1", alias = "1:1")]
    Square,
    /// Height is forced to `width * 9 / 16`.
    #[serde(alias = "16:9", alias = "16/9")]
    Widescreen,
}

/// Named padding presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaddingPreset {
    None,
    Small,
    Medium,
    Large,
}

impl PaddingPreset {
    pub fn px(self) -> f64 {
        match self {
            PaddingPreset::None => 0.0,
            PaddingPreset::Small => 32.0,
            PaddingPreset::Medium => 64.0,
            PaddingPreset::Large => 128.0,
        }
    }
}

/// Outer margin around the card, as a preset or in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Preset(PaddingPreset),
    Px(f64),
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Preset(PaddingPreset::Medium)
    }
}

impl Padding {
    /// Resolved padding; negative or non-finite values clamp to zero.
    pub fn px(self) -> f64 {
        match self {
            Padding::Preset(p) => p.px(),
            Padding::Px(v) => non_negative(v),
        }
    }
}

/// Named shadow presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowPreset {
    None,
    #[serde(alias = "little")]
    Light,
    Medium,
    Heavy,
}

/// Drop shadow strength, as a preset or a number in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shadow {
    Preset(ShadowPreset),
    Strength(f64),
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::Preset(ShadowPreset::Light)
    }
}

/// Concrete drop shadow parameters in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowParams {
    pub blur: f64,
    pub offset_y: f64,
    pub alpha: f64,
}

impl Shadow {
    /// `None` when no shadow should be cast.
    pub fn params(self) -> Option<ShadowParams> {
        let p = |blur, offset_y, alpha| ShadowParams {
            blur,
            offset_y,
            alpha,
        };
        match self {
            Shadow::Preset(ShadowPreset::None) => None,
            Shadow::Preset(ShadowPreset::Light) => Some(p(30.0, 20.0, 0.35)),
            Shadow::Preset(ShadowPreset::Medium) => Some(p(45.0, 30.0, 0.42)),
            Shadow::Preset(ShadowPreset::Heavy) => Some(p(60.0, 40.0, 0.50)),
            Shadow::Strength(s) => {
                let s = non_negative(s).min(1.0);
                if s <= 0.0 {
                    return None;
                }
                Some(p(60.0 * s, 40.0 * s, 0.2 + 0.3 * s))
            }
        }
    }
}

/// Placement of the card inside the padded canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    Center,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Faux browser title bar drawn above the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChromeTheme {
    #[default]
    None,
    Light,
    Dark,
}

/// Grain overlay settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Noise {
    pub enabled: bool,
    /// Speckle density in `0.0..=1.0`.
    pub amount: f64,
}

impl Default for Noise {
    fn default() -> Self {
        Self {
            enabled: false,
            amount: 0.5,
        }
    }
}

impl Noise {
    /// Effective density, zero when disabled.
    pub fn density(self) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        non_negative(self.amount).min(1.0)
    }
}

/// Everything the compositor needs besides the bitmap.
///
/// Built fresh from the current control values for each render; never
/// patched in place by the compositor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub aspect: Aspect,
    pub padding: Padding,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub shadow: Shadow,
    pub position: Position,
    pub background: Color,
    pub noise: Noise,
    pub chrome: ChromeTheme,
}

impl LayoutConfig {
    pub fn from_json_str(s: &str) -> ShotResult<Self> {
        serde_json::from_str(s).map_err(|e| ShotError::validation(format!("config: {e}")))
    }

    pub fn from_path(path: &Path) -> ShotResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

/// Parse a kebab-case control value through the same names serde accepts.
fn parse_named<T: serde::de::DeserializeOwned>(what: &str, s: &str) -> ShotResult<T> {
    let v = serde_json::Value::String(s.trim().to_ascii_lowercase());
    serde_json::from_value(v).map_err(|_| ShotError::validation(format!("unknown {what} \"{s}\"")))
}

impl FromStr for Aspect {
    type Err = ShotError;

    fn from_str(s: &str) -> ShotResult<Self> {
        parse_named("aspect", s)
    }
}

impl FromStr for Position {
    type Err = ShotError;

    fn from_str(s: &str) -> ShotResult<Self> {
        parse_named("position", s)
    }
}

impl FromStr for ChromeTheme {
    type Err = ShotError;

    fn from_str(s: &str) -> ShotResult<Self> {
        parse_named("chrome theme", s)
    }
}

impl FromStr for Padding {
    type Err = ShotError;

    fn from_str(s: &str) -> ShotResult<Self> {
        if let Ok(v) = s.trim().parse::<f64>() {
            return Ok(Padding::Px(v));
        }
        parse_named("padding", s).map(Padding::Preset)
    }
}

impl FromStr for Shadow {
    type Err = ShotError;

    fn from_str(s: &str) -> ShotResult<Self> {
        if let Ok(v) = s.trim().parse::<f64>() {
            return Ok(Shadow::Strength(v));
        }
        parse_named("shadow", s).map(Shadow::Preset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
