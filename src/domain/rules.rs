use crate::domain::{HexColor, SemanticPalette};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scopes the rule templates deliberately leave alone so they render in the
/// editor's default foreground.
pub const UNSTYLED_SCOPES: &[&str] = &[
    "keyword",
    "storage",
    "storage.type",
    "variable.other",
    "variable.language",
    "support",
    "meta.property-name",
    "entity.name.tag",
    "support.class.component",
    "constant.other",
    "entity.other",
];

#[derive(Debug, Error, Eq, PartialEq)]
#[error("unknown font style: {0:?}")]
pub struct ParseFontStyleError(String);

/// Emphasis flags, written as a space-joined `fontStyle` string.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl FontStyle {
    pub const BOLD: FontStyle = FontStyle {
        bold: true,
        italic: false,
        underline: false,
        strikethrough: false,
    };
    pub const ITALIC: FontStyle = FontStyle {
        bold: false,
        italic: true,
        underline: false,
        strikethrough: false,
    };
    pub const UNDERLINE: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: true,
        strikethrough: false,
    };
    pub const STRIKETHROUGH: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: false,
        strikethrough: true,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.italic, "italic"),
            (self.bold, "bold"),
            (self.underline, "underline"),
            (self.strikethrough, "strikethrough"),
        ];
        let tokens: Vec<&str> = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, token)| *token)
            .collect();
        f.write_str(&tokens.join(" "))
    }
}

impl FromStr for FontStyle {
    type Err = ParseFontStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = FontStyle::default();
        for token in s.split_whitespace() {
            match token {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                "strikethrough" => style.strikethrough = true,
                other => return Err(ParseFontStyleError(other.to_string())),
            }
        }
        Ok(style)
    }
}

impl TryFrom<String> for FontStyle {
    type Error = ParseFontStyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontStyle> for String {
    fn from(value: FontStyle) -> Self {
        value.to_string()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<HexColor>,
    #[serde(default, skip_serializing_if = "FontStyle::is_empty")]
    pub font_style: FontStyle,
}

impl StyleSettings {
    pub fn foreground(color: &HexColor) -> Self {
        Self {
            foreground: Some(color.clone()),
            ..Self::default()
        }
    }

    pub fn font_style(font_style: FontStyle) -> Self {
        Self {
            font_style,
            ..Self::default()
        }
    }

    pub fn with_background(mut self, color: &HexColor) -> Self {
        self.background = Some(color.clone());
        self
    }

    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

/// A rule's `scope`: the editor accepts a bare string or a list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
    One(String),
    Many(Vec<String>),
}

impl ScopeSelector {
    pub fn one(scope: &str) -> Self {
        Self::One(scope.to_string())
    }

    pub fn many(scopes: &[&str]) -> Self {
        Self::Many(scopes.iter().map(|s| (*s).to_string()).collect())
    }

    pub fn scopes(&self) -> Vec<&str> {
        match self {
            Self::One(scope) => vec![scope.as_str()],
            Self::Many(scopes) => scopes.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.scopes().contains(&scope)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub scope: ScopeSelector,
    pub settings: StyleSettings,
}

impl StyleRule {
    fn new(scope: ScopeSelector, settings: StyleSettings) -> Self {
        Self { scope, settings }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SemanticRule {
    pub semantic_scopes: Vec<&'static str>,
    pub settings: StyleSettings,
}

/// Builds the ordered `tokenColors` list. Order matters: editors resolve
/// overlapping scopes by list position.
pub fn build_token_colors(palette: &SemanticPalette) -> Vec<StyleRule> {
    let mut rules = vec![
        StyleRule::new(
            ScopeSelector::many(&["comment", "punctuation.definition.comment", "string.comment"]),
            StyleSettings::foreground(&palette.comment),
        ),
        StyleRule::new(
            ScopeSelector::many(&["string"]),
            StyleSettings::foreground(&palette.string_constant),
        ),
        StyleRule::new(
            ScopeSelector::many(&[
                "constant.numeric",
                "constant.language.boolean",
                "constant.language.null",
                "constant.language.undefined",
            ]),
            StyleSettings::foreground(&palette.string_constant),
        ),
        StyleRule::new(
            ScopeSelector::many(&[
                "variable.parameter",
                "meta.definition.variable",
                "variable.object.property",
                "variable.other.constant.property",
            ]),
            StyleSettings::foreground(&palette.declaration),
        ),
        // Dimmed so names stand out.
        StyleRule::new(
            ScopeSelector::many(&["punctuation", "meta.brace", "meta.delimiter"]),
            StyleSettings::foreground(&palette.punctuation),
        ),
    ];

    if let Some(extended) = &palette.extended {
        rules.push(StyleRule::new(
            ScopeSelector::many(&["entity.name.tag.html", "entity.name.tag.xml"]),
            StyleSettings::foreground(&extended.html_tag),
        ));
        rules.push(StyleRule::new(
            ScopeSelector::many(&["keyword.operator.logical"]),
            StyleSettings::foreground(&extended.logic_operator),
        ));
    }

    rules.extend([
        StyleRule::new(
            ScopeSelector::many(&["source.regexp", "string.regexp"]),
            StyleSettings::foreground(&palette.string_constant),
        ),
        StyleRule::new(
            ScopeSelector::many(&["markup.heading", "markup.heading entity.name"]),
            StyleSettings::foreground(&palette.function_declaration)
                .with_font_style(FontStyle::BOLD),
        ),
        StyleRule::new(
            ScopeSelector::one("markup.quote"),
            StyleSettings::foreground(&palette.string_constant),
        ),
        StyleRule::new(
            ScopeSelector::one("markup.inline.raw"),
            StyleSettings::foreground(&palette.string_constant),
        ),
        StyleRule::new(
            ScopeSelector::one("markup.italic"),
            StyleSettings::foreground(&palette.base).with_font_style(FontStyle::ITALIC),
        ),
        StyleRule::new(
            ScopeSelector::one("markup.bold"),
            StyleSettings::foreground(&palette.base).with_font_style(FontStyle::BOLD),
        ),
        StyleRule::new(
            ScopeSelector::many(&["markup.underline"]),
            StyleSettings::font_style(FontStyle::UNDERLINE),
        ),
        StyleRule::new(
            ScopeSelector::many(&["markup.strikethrough"]),
            StyleSettings::font_style(FontStyle::STRIKETHROUGH),
        ),
        StyleRule::new(
            ScopeSelector::many(&[
                "markup.deleted",
                "meta.diff.header.from-file",
                "punctuation.definition.deleted",
            ]),
            StyleSettings::foreground(&palette.diff_deleted)
                .with_background(&palette.diff_deleted_bg),
        ),
        StyleRule::new(
            ScopeSelector::many(&[
                "markup.inserted",
                "meta.diff.header.to-file",
                "punctuation.definition.inserted",
            ]),
            StyleSettings::foreground(&palette.diff_added).with_background(&palette.diff_added_bg),
        ),
        StyleRule::new(
            ScopeSelector::many(&["markup.changed", "punctuation.definition.changed"]),
            StyleSettings::foreground(&palette.diff_changed)
                .with_background(&palette.diff_changed_bg),
        ),
        StyleRule::new(
            ScopeSelector::many(&[
                "invalid.broken",
                "invalid.deprecated",
                "invalid.illegal",
                "invalid.unimplemented",
            ]),
            StyleSettings::foreground(&palette.error).with_font_style(FontStyle::ITALIC),
        ),
        StyleRule::new(
            ScopeSelector::one("message.error"),
            StyleSettings::foreground(&palette.error),
        ),
    ]);

    rules
}

pub fn semantic_rules(palette: &SemanticPalette) -> Vec<SemanticRule> {
    let mut rules = vec![SemanticRule {
        semantic_scopes: vec![
            "function.declaration",
            "class.declaration",
            "type.declaration",
            "interface.declaration",
        ],
        settings: StyleSettings::foreground(&palette.function_declaration),
    }];
    if palette.extended.is_some() {
        rules.push(SemanticRule {
            semantic_scopes: vec!["parameter.declaration"],
            settings: StyleSettings::foreground(&palette.declaration),
        });
    }
    rules
}

/// Flattens semantic rules into `semanticTokenColors`. A scope named twice keeps
/// its first position and its last settings.
pub fn flatten_semantic_rules(rules: &[SemanticRule]) -> IndexMap<String, StyleSettings> {
    let mut map = IndexMap::new();
    for rule in rules {
        for scope in &rule.semantic_scopes {
            map.insert((*scope).to_string(), rule.settings.clone());
        }
    }
    map
}

pub fn build_semantic_token_colors(palette: &SemanticPalette) -> IndexMap<String, StyleSettings> {
    flatten_semantic_rules(&semantic_rules(palette))
}
