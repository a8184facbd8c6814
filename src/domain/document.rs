use crate::domain::{HexColor, StyleRule, StyleSettings, ThemeMode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const EDITOR_FOREGROUND: &str = "editor.foreground";

/// A complete editor theme, laid out the way the editor's theme loader reads it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub mode: ThemeMode,
    pub colors: IndexMap<String, HexColor>,
    pub semantic_highlighting: bool,
    pub token_colors: Vec<StyleRule>,
    pub semantic_token_colors: IndexMap<String, StyleSettings>,
}

impl ThemeDocument {
    pub fn new(name: &str, mode: ThemeMode, colors: IndexMap<String, HexColor>) -> Self {
        Self {
            name: name.to_string(),
            mode,
            colors,
            semantic_highlighting: true,
            token_colors: Vec::new(),
            semantic_token_colors: IndexMap::new(),
        }
    }

    pub fn color(&self, key: &str) -> Option<&HexColor> {
        self.colors.get(key)
    }

    /// UI color keys whose values differ from `other` (including keys missing on either side).
    pub fn changed_colors<'a>(&'a self, other: &'a ThemeDocument) -> Vec<&'a str> {
        let mut changed: Vec<&'a str> = self
            .colors
            .iter()
            .filter(|(key, value)| other.colors.get(key.as_str()) != Some(*value))
            .map(|(key, _)| key.as_str())
            .collect();
        changed.extend(
            other
                .colors
                .keys()
                .filter(|key| !self.colors.contains_key(key.as_str()))
                .map(String::as_str),
        );
        changed
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
