use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Name of the base palette / base theme this mode is derived from.
    pub fn base_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Picks between the light and dark value of a per-mode constant.
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())
    }
}

/// Which rule template a theme is composed with.
///
/// `Extended` adds html-tag and logic-operator accents on top of the four-color
/// template, plus a `parameter.declaration` semantic rule.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RuleSet {
    #[default]
    Standard,
    Extended,
}

impl RuleSet {
    pub fn is_extended(self) -> bool {
        self == Self::Extended
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Hue {
    Gray,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Pink,
}

impl Hue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseHexColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 3, 4, 6 or 8 hex digits: {0:?}")]
    BadLength(String),

    #[error("color contains a non-hex digit: {0:?}")]
    BadDigit(String),
}

/// A `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` color, kept in its source spelling.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self, ParseHexColorError> {
        let Some(digits) = value.strip_prefix('#') else {
            return Err(ParseHexColorError::MissingHash(value.to_string()));
        };
        if !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return Err(ParseHexColorError::BadLength(value.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseHexColorError::BadDigit(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Same color as `#rrggbbaa`. Short forms are expanded first and an
    /// existing alpha is replaced.
    pub fn with_alpha(&self, alpha: u8) -> HexColor {
        let digits = self.0.trim_start_matches('#');
        let rgb: String = match digits.len() {
            3 | 4 => digits[..3].chars().flat_map(|c| [c, c]).collect(),
            _ => digits[..6].to_string(),
        };
        HexColor(format!("#{rgb}{alpha:02x}"))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParseHexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_lengths() {
        for value in ["#fff", "#ffff", "#0d1117", "#0969da1a"] {
            let color = HexColor::parse(value).expect("parse");
            assert_eq!(color.as_str(), value);
        }
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(
            HexColor::parse("0d1117"),
            Err(ParseHexColorError::MissingHash("0d1117".to_string()))
        );
        assert_eq!(
            HexColor::parse("#12345"),
            Err(ParseHexColorError::BadLength("#12345".to_string()))
        );
        assert_eq!(
            HexColor::parse("#12345g"),
            Err(ParseHexColorError::BadDigit("#12345g".to_string()))
        );
    }

    #[test]
    fn with_alpha_appends_two_digits() {
        let color = HexColor::parse("#0969da").expect("parse");
        assert_eq!(color.with_alpha(0x1a).as_str(), "#0969da1a");
        let translucent = HexColor::parse("#0969da1a").expect("parse");
        assert_eq!(translucent.with_alpha(0x40).as_str(), "#0969da40");
    }

    #[test]
    fn with_alpha_expands_short_forms() {
        let white = HexColor::parse("#fff").expect("parse");
        assert_eq!(white.with_alpha(0x1a).as_str(), "#ffffff1a");
        let short = HexColor::parse("#0af8").expect("parse");
        assert_eq!(short.with_alpha(0x40).as_str(), "#00aaff40");
    }

    #[test]
    fn deserializing_validates() {
        let ok: HexColor = serde_json::from_str("\"#abc\"").expect("decode");
        assert_eq!(ok.as_str(), "#abc");
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }

    #[test]
    fn mode_picks_matching_value() {
        assert_eq!(ThemeMode::Light.pick(5, 2), 5);
        assert_eq!(ThemeMode::Dark.pick(5, 2), 2);
        assert_eq!(ThemeMode::Dark.base_name(), "dark");
    }
}
