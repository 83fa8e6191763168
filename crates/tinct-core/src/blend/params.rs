//! Serializable blend configuration.
//!
//! `BlendParams` is what a host stores or sends over the wire to describe a
//! composite; [`BlendParams::apply`] is the single dispatch point into the
//! mix functions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::blend::mix::{opacity_mix, overlay_mix, soft_light_mix};
use crate::color::Color;
use crate::error::{ColorError, Result};

/// Compositing model used to combine a blend color with a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Plain linear mix of the blend color over the base.
    #[default]
    Normal,
    /// Soft light, keyed on the blend channel.
    SoftLight,
    /// Overlay, keyed on the base channel.
    Overlay,
}

impl BlendMode {
    /// Every supported mode, in UI order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::SoftLight, Self::Overlay];

    /// Human-readable label for menus and logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::SoftLight => "soft-light",
            Self::Overlay => "overlay",
        }
    }

    /// Composite `blend` over `base` with this mode at `opacity` percent.
    pub fn apply(self, base: Color, blend: Color, opacity: i32) -> Color {
        match self {
            Self::Normal => opacity_mix(blend, base, opacity),
            Self::SoftLight => soft_light_mix(base, blend, opacity),
            Self::Overlay => overlay_mix(base, blend, opacity),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "soft-light" | "soft_light" | "softlight" => Ok(Self::SoftLight),
            "overlay" => Ok(Self::Overlay),
            _ => Err(ColorError::UnknownBlendMode(s.to_string())),
        }
    }
}

/// Blend mode plus opacity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendParams {
    /// Compositing model. Default: `Normal`.
    pub mode: BlendMode,
    /// Opacity percentage, nominally `0..=100`. Default: 100.
    ///
    /// Not clamped; values outside the nominal range extrapolate.
    pub opacity: i32,
}

impl Default for BlendParams {
    /// Full-strength normal blend: the blend color replaces the base.
    fn default() -> Self {
        Self {
            mode: BlendMode::Normal,
            opacity: 100,
        }
    }
}

impl BlendParams {
    pub const fn new(mode: BlendMode, opacity: i32) -> Self {
        Self { mode, opacity }
    }

    /// Whether the opacity lies in the nominal `0..=100` range.
    pub const fn is_nominal(&self) -> bool {
        self.opacity >= 0 && self.opacity <= 100
    }

    /// Composite `blend` over `base` with these parameters.
    pub fn apply(&self, base: Color, blend: Color) -> Color {
        if !self.is_nominal() {
            tracing::debug!(
                "{} blend with opacity {} outside 0..=100, extrapolating",
                self.mode,
                self.opacity
            );
        }
        self.mode.apply(base, blend, self.opacity)
    }

    /// Parse params from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        tracing::debug!("loaded blend params: {} @ {}%", params.mode, params.opacity);
        Ok(params)
    }

    /// Serialize params to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
