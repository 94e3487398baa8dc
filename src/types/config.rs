use crate::error::{GaugeError, Result};
use crate::types::scoring::Tier;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GaugeConfig {
    pub theme: Option<ThemeConfig>,
    pub render: Option<RenderConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    pub good: Option<String>,
    pub medium: Option<String>,
    pub poor: Option<String>,
    pub track: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    pub target: Option<String>,
}

/// Resolved display colors. Defaults match the original page styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub good: String,
    pub medium: String,
    pub poor: String,
    pub track: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            good: "#2ecc71".to_string(),
            medium: "#f1c40f".to_string(),
            poor: "#e74c3c".to_string(),
            track: "#e0e0e0".to_string(),
        }
    }
}

impl Theme {
    /// Applies `[theme]` overrides on top of the defaults. Every override
    /// must be a `#RGB` or `#RRGGBB` color.
    pub fn from_config(config: Option<&GaugeConfig>) -> Result<Self> {
        let mut theme = Self::default();
        let Some(overrides) = config.and_then(|cfg| cfg.theme.as_ref()) else {
            return Ok(theme);
        };

        if let Some(color) = &overrides.good {
            theme.good = validated_hex("theme.good", color)?;
        }
        if let Some(color) = &overrides.medium {
            theme.medium = validated_hex("theme.medium", color)?;
        }
        if let Some(color) = &overrides.poor {
            theme.poor = validated_hex("theme.poor", color)?;
        }
        if let Some(color) = &overrides.track {
            theme.track = validated_hex("theme.track", color)?;
        }
        Ok(theme)
    }

    pub fn color_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::Good => &self.good,
            Tier::Medium => &self.medium,
            Tier::Poor => &self.poor,
        }
    }
}

fn validated_hex(key: &str, value: &str) -> Result<String> {
    let digits = value.strip_prefix('#').unwrap_or("");
    let well_formed = matches!(digits.len(), 3 | 6)
        && digits.chars().all(|ch| ch.is_ascii_hexdigit());
    if well_formed {
        Ok(value.to_string())
    } else {
        Err(GaugeError::ConfigParse(format!(
            "{key}: '{value}' is not a #RGB or #RRGGBB color"
        )))
    }
}
