use crate::domain::{HexColor, Hue, RuleSet, ThemeMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Shades of one hue, ordered by intensity. Index 0 is the faintest shade of a
/// light palette and the brightest shade of a dark one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(Vec<HexColor>);

impl ColorScale {
    pub fn new(shades: Vec<HexColor>) -> Self {
        Self(shades)
    }

    pub fn shade(&self, index: usize) -> Option<&HexColor> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, color: &HexColor) -> bool {
        self.0.contains(color)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Foreground {
    pub default: HexColor,
}

/// Everything a color source knows about one base mode.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ModeColors {
    pub scales: BTreeMap<String, ColorScale>,
    pub foreground: Foreground,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ShadeLookupError {
    #[error("color scale not found: {hue}")]
    MissingScale { hue: Hue },

    #[error("shade {index} not found in {hue} scale ({len} shades)")]
    MissingShade { hue: Hue, index: usize, len: usize },
}

impl ModeColors {
    pub fn scale(&self, hue: Hue) -> Result<&ColorScale, ShadeLookupError> {
        self.scales
            .get(hue.name())
            .ok_or(ShadeLookupError::MissingScale { hue })
    }

    pub fn shade(&self, hue: Hue, index: usize) -> Result<HexColor, ShadeLookupError> {
        let scale = self.scale(hue)?;
        scale
            .shade(index)
            .cloned()
            .ok_or(ShadeLookupError::MissingShade {
                hue,
                index,
                len: scale.len(),
            })
    }
}

/// A fixed (hue, light index, dark index) choice for one palette role.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ShadePick {
    pub hue: Hue,
    pub light: usize,
    pub dark: usize,
}

impl ShadePick {
    pub const fn new(hue: Hue, light: usize, dark: usize) -> Self {
        Self { hue, light, dark }
    }

    pub fn index(self, mode: ThemeMode) -> usize {
        mode.pick(self.light, self.dark)
    }

    pub fn resolve(
        self,
        colors: &ModeColors,
        mode: ThemeMode,
    ) -> Result<HexColor, ShadeLookupError> {
        colors.shade(self.hue, self.index(mode))
    }
}

// Purple comments: bright, not grey.
pub const COMMENT: ShadePick = ShadePick::new(Hue::Purple, 5, 2);
pub const STRING_CONSTANT: ShadePick = ShadePick::new(Hue::Green, 6, 2);
pub const FUNCTION_DECLARATION: ShadePick = ShadePick::new(Hue::Yellow, 6, 2);
pub const DECLARATION: ShadePick = ShadePick::new(Hue::Blue, 6, 2);
pub const PUNCTUATION: ShadePick = ShadePick::new(Hue::Gray, 5, 4);
pub const ERROR: ShadePick = ShadePick::new(Hue::Red, 7, 2);
pub const DIFF_ADDED: ShadePick = ShadePick::new(Hue::Green, 6, 1);
pub const DIFF_DELETED: ShadePick = ShadePick::new(Hue::Red, 7, 2);
pub const DIFF_CHANGED: ShadePick = ShadePick::new(Hue::Orange, 6, 2);
pub const DIFF_ADDED_BG: ShadePick = ShadePick::new(Hue::Green, 0, 9);
pub const DIFF_DELETED_BG: ShadePick = ShadePick::new(Hue::Red, 0, 9);
pub const DIFF_CHANGED_BG: ShadePick = ShadePick::new(Hue::Orange, 1, 8);
pub const HTML_TAG: ShadePick = ShadePick::new(Hue::Orange, 5, 2);
pub const LOGIC_OPERATOR: ShadePick = ShadePick::new(Hue::Pink, 5, 2);

/// Resolved colors for every syntax role a composed theme assigns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SemanticPalette {
    pub comment: HexColor,
    pub string_constant: HexColor,
    pub function_declaration: HexColor,
    pub declaration: HexColor,
    pub punctuation: HexColor,
    pub base: HexColor,
    pub error: HexColor,
    pub diff_added: HexColor,
    pub diff_deleted: HexColor,
    pub diff_changed: HexColor,
    pub diff_added_bg: HexColor,
    pub diff_deleted_bg: HexColor,
    pub diff_changed_bg: HexColor,
    /// Present exactly when the palette was resolved for [`RuleSet::Extended`].
    pub extended: Option<ExtendedRoles>,
}

/// Roles only the extended rule template uses.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtendedRoles {
    pub html_tag: HexColor,
    pub logic_operator: HexColor,
}

impl SemanticPalette {
    pub fn resolve(
        colors: &ModeColors,
        mode: ThemeMode,
        rule_set: RuleSet,
    ) -> Result<Self, ShadeLookupError> {
        let extended = if rule_set.is_extended() {
            Some(ExtendedRoles {
                html_tag: HTML_TAG.resolve(colors, mode)?,
                logic_operator: LOGIC_OPERATOR.resolve(colors, mode)?,
            })
        } else {
            None
        };

        Ok(Self {
            comment: COMMENT.resolve(colors, mode)?,
            string_constant: STRING_CONSTANT.resolve(colors, mode)?,
            function_declaration: FUNCTION_DECLARATION.resolve(colors, mode)?,
            declaration: DECLARATION.resolve(colors, mode)?,
            punctuation: PUNCTUATION.resolve(colors, mode)?,
            base: colors.foreground.default.clone(),
            error: ERROR.resolve(colors, mode)?,
            diff_added: DIFF_ADDED.resolve(colors, mode)?,
            diff_deleted: DIFF_DELETED.resolve(colors, mode)?,
            diff_changed: DIFF_CHANGED.resolve(colors, mode)?,
            diff_added_bg: DIFF_ADDED_BG.resolve(colors, mode)?,
            diff_deleted_bg: DIFF_DELETED_BG.resolve(colors, mode)?,
            diff_changed_bg: DIFF_CHANGED_BG.resolve(colors, mode)?,
            extended,
        })
    }

    /// The rule template this palette was resolved for.
    pub fn rule_set(&self) -> RuleSet {
        if self.extended.is_some() {
            RuleSet::Extended
        } else {
            RuleSet::Standard
        }
    }

    pub fn roles(&self) -> Vec<(&'static str, &HexColor)> {
        let mut roles = vec![
            ("comment", &self.comment),
            ("stringConstant", &self.string_constant),
            ("functionDeclaration", &self.function_declaration),
            ("declaration", &self.declaration),
            ("punctuation", &self.punctuation),
            ("base", &self.base),
            ("error", &self.error),
            ("diffAdded", &self.diff_added),
            ("diffDeleted", &self.diff_deleted),
            ("diffChanged", &self.diff_changed),
            ("diffAddedBg", &self.diff_added_bg),
            ("diffDeletedBg", &self.diff_deleted_bg),
            ("diffChangedBg", &self.diff_changed_bg),
        ];
        if let Some(extended) = &self.extended {
            roles.push(("htmlTag", &extended.html_tag));
            roles.push(("logicOperator", &extended.logic_operator));
        }
        roles
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_colors() -> ModeColors {
        let hues = [
            Hue::Gray,
            Hue::Blue,
            Hue::Green,
            Hue::Yellow,
            Hue::Orange,
            Hue::Red,
            Hue::Purple,
            Hue::Pink,
        ];
        let mut scales = BTreeMap::new();
        for (h, hue) in hues.iter().enumerate() {
            let shades = (0..10)
                .map(|i| HexColor::parse(&format!("#{h:02x}{i:02x}00")).expect("color"))
                .collect();
            scales.insert(hue.name().to_string(), ColorScale::new(shades));
        }
        ModeColors {
            scales,
            foreground: Foreground {
                default: HexColor::parse("#111111").expect("color"),
            },
        }
    }

    #[test]
    fn core_roles_use_documented_shades() {
        let colors = sample_colors();

        let light = SemanticPalette::resolve(&colors, ThemeMode::Light, RuleSet::Standard)
            .expect("light palette");
        assert_eq!(light.comment, colors.shade(Hue::Purple, 5).expect("shade"));
        assert_eq!(light.string_constant, colors.shade(Hue::Green, 6).expect("shade"));
        assert_eq!(light.function_declaration, colors.shade(Hue::Yellow, 6).expect("shade"));
        assert_eq!(light.declaration, colors.shade(Hue::Blue, 6).expect("shade"));

        let dark = SemanticPalette::resolve(&colors, ThemeMode::Dark, RuleSet::Standard)
            .expect("dark palette");
        assert_eq!(dark.comment, colors.shade(Hue::Purple, 2).expect("shade"));
        assert_eq!(dark.string_constant, colors.shade(Hue::Green, 2).expect("shade"));
        assert_eq!(dark.function_declaration, colors.shade(Hue::Yellow, 2).expect("shade"));
        assert_eq!(dark.declaration, colors.shade(Hue::Blue, 2).expect("shade"));
    }

    #[test]
    fn standard_palette_skips_extended_roles() {
        let palette =
            SemanticPalette::resolve(&sample_colors(), ThemeMode::Dark, RuleSet::Standard)
                .expect("palette");
        assert_eq!(palette.extended, None);
        assert_eq!(palette.rule_set(), RuleSet::Standard);
        assert_eq!(palette.roles().len(), 13);
    }

    #[test]
    fn extended_palette_resolves_extra_roles() {
        let colors = sample_colors();
        let palette = SemanticPalette::resolve(&colors, ThemeMode::Light, RuleSet::Extended)
            .expect("palette");
        let extended = palette.extended.as_ref().expect("extended roles");
        assert_eq!(extended.html_tag, colors.shade(Hue::Orange, 5).expect("shade"));
        assert_eq!(extended.logic_operator, colors.shade(Hue::Pink, 5).expect("shade"));
        assert_eq!(palette.rule_set(), RuleSet::Extended);
        assert_eq!(palette.roles().len(), 15);
    }

    #[test]
    fn base_role_is_the_default_foreground() {
        let colors = sample_colors();
        let palette = SemanticPalette::resolve(&colors, ThemeMode::Light, RuleSet::Standard)
            .expect("palette");
        assert_eq!(palette.base, colors.foreground.default);
    }

    #[test]
    fn missing_scale_is_fatal() {
        let mut colors = sample_colors();
        colors.scales.remove("purple");
        let err = SemanticPalette::resolve(&colors, ThemeMode::Dark, RuleSet::Standard)
            .expect_err("missing purple");
        assert_eq!(err, ShadeLookupError::MissingScale { hue: Hue::Purple });
    }

    #[test]
    fn missing_shade_is_fatal() {
        let mut colors = sample_colors();
        let short = ColorScale::new(vec![HexColor::parse("#000000").expect("color")]);
        colors.scales.insert("green".to_string(), short);
        let err = SemanticPalette::resolve(&colors, ThemeMode::Light, RuleSet::Standard)
            .expect_err("short green");
        assert_eq!(
            err,
            ShadeLookupError::MissingShade {
                hue: Hue::Green,
                index: 6,
                len: 1
            }
        );
    }
}
