//! Serializable label style

use serde::{Deserialize, Serialize};

use super::Config;
use crate::render::color;

/// # Label Style
///
/// Every display option of a [`TextLabel`](crate::TextLabel) except its
/// string and position. Missing fields fall back to the label defaults, so a
/// style file only needs the options it changes.
///
/// ```toml
/// color = 0xFF55FF55
/// align = "center"
/// width = 120
/// max_lines = 3
/// scale = 1.5
/// shadow = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Packed ARGB color; a zero alpha byte is fixed up when applied
    pub color: u32,
    /// Interpret (`true`) or strip (`false`) formatting codes
    pub formatted: bool,
    /// Draw a drop shadow
    pub shadow: bool,
    /// Alignment name, matched case-insensitively; unknown names mean left
    pub align: String,
    /// Wrap width in pixels, 0 disables wrapping
    pub width: i64,
    /// Line cap while wrapping
    pub max_lines: i64,
    /// Uniform scale factor
    pub scale: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: color::WHITE,
            formatted: true,
            shadow: false,
            align: "LEFT".to_string(),
            width: 0,
            max_lines: 0,
            scale: 1.0,
        }
    }
}

impl LabelStyle {
    /// Validate the style
    ///
    /// Labels accept any value, so this is only a sanity check for tools
    /// that load styles from disk.
    pub fn validate(&self) -> Result<(), String> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(format!("Scale must be a positive number, got {}", self.scale));
        }
        if self.width < 0 {
            return Err(format!("Wrap width cannot be negative, got {}", self.width));
        }
        Ok(())
    }
}

impl Config for LabelStyle {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let style = LabelStyle::parse_as(
            ConfigFormat::Toml,
            "align = \"center\"\nwidth = 120\nshadow = true\n",
        )
        .unwrap();

        assert_eq!(style.align, "center");
        assert_eq!(style.width, 120);
        assert!(style.shadow);
        assert!(style.formatted);
        assert_eq!(style.color, color::WHITE);
        assert_eq!(style.max_lines, 0);
    }

    #[test]
    fn test_ron_style() {
        let style = LabelStyle::parse_as(
            ConfigFormat::Ron,
            "(color: 0x00FF0000, align: \"RIGHT\", scale: 2.0, max_lines: 4)",
        )
        .unwrap();

        assert_eq!(style.color, 0x00FF_0000);
        assert_eq!(style.align, "RIGHT");
        assert_eq!(style.max_lines, 4);
        assert!((style.scale - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ron_output_parses_back() {
        let style = LabelStyle {
            align: "center".to_string(),
            scale: 0.5,
            ..LabelStyle::default()
        };
        let text = style.render_as(ConfigFormat::Ron).unwrap();
        assert_eq!(LabelStyle::parse_as(ConfigFormat::Ron, &text).unwrap(), style);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result = LabelStyle::parse_as(ConfigFormat::Toml, "width = \"wide\"");
        assert!(matches!(result, Err(crate::config::ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate() {
        assert!(LabelStyle::default().validate().is_ok());
        assert!(LabelStyle { scale: 0.0, ..LabelStyle::default() }.validate().is_err());
        assert!(LabelStyle { scale: f64::NAN, ..LabelStyle::default() }.validate().is_err());
        assert!(LabelStyle { width: -5, ..LabelStyle::default() }.validate().is_err());
    }
}
