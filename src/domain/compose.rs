use crate::domain::{
    EDITOR_FOREGROUND, HexColor, ModeColors, ParseHexColorError, RuleSet, SemanticPalette,
    ShadeLookupError, ThemeDocument, ThemeMode, build_semantic_token_colors, build_token_colors,
};
use thiserror::Error;

/// Near-white foreground patched into dark themes.
pub const DARK_EDITOR_FOREGROUND: &str = "#e6edf3";

#[derive(Debug, Error)]
pub enum ColorSourceError {
    #[error("failed to parse {mode} palette: {source}")]
    Parse {
        mode: ThemeMode,
        #[source]
        source: serde_json::Error,
    },

    #[error("{mode} palette has an empty {hue} scale")]
    EmptyScale { mode: ThemeMode, hue: String },
}

#[derive(Debug, Error)]
pub enum BaseThemeError {
    #[error(transparent)]
    ColorSource(#[from] ColorSourceError),

    #[error("base theme color lookup failed: {0}")]
    Lookup(#[from] ShadeLookupError),

    #[error("invalid base theme color: {0}")]
    Literal(#[from] ParseHexColorError),
}

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to build base theme: {0}")]
    BaseTheme(#[from] BaseThemeError),

    #[error(transparent)]
    ColorSource(#[from] ColorSourceError),

    #[error("palette lookup failed: {0}")]
    Palette(#[from] ShadeLookupError),

    #[error("invalid override color: {0}")]
    Override(#[from] ParseHexColorError),
}

/// Supplies named color scales for a base mode.
pub trait ColorSource {
    fn colors_for_mode(&self, mode: ThemeMode) -> Result<ModeColors, ColorSourceError>;
}

/// Supplies a theme document with UI colors populated and no syntax rules.
pub trait BaseThemeBuilder {
    fn base_theme(&self, mode: ThemeMode, name: &str) -> Result<ThemeDocument, BaseThemeError>;
}

impl<T: ColorSource + ?Sized> ColorSource for &T {
    fn colors_for_mode(&self, mode: ThemeMode) -> Result<ModeColors, ColorSourceError> {
        (**self).colors_for_mode(mode)
    }
}

impl<T: BaseThemeBuilder + ?Sized> BaseThemeBuilder for &T {
    fn base_theme(&self, mode: ThemeMode, name: &str) -> Result<ThemeDocument, BaseThemeError> {
        (**self).base_theme(mode, name)
    }
}

/// Composes a finished theme: the base document's UI colors, the dark-mode
/// foreground patch, and the rule templates for `rule_set`.
pub fn compose(
    mode: ThemeMode,
    name: &str,
    rule_set: RuleSet,
    source: &dyn ColorSource,
    base: &dyn BaseThemeBuilder,
) -> Result<ThemeDocument, ComposeError> {
    let mut document = base.base_theme(mode, name)?;
    let colors = source.colors_for_mode(mode)?;
    let palette = SemanticPalette::resolve(&colors, mode, rule_set)?;

    if mode == ThemeMode::Dark {
        document.colors.insert(
            EDITOR_FOREGROUND.to_string(),
            HexColor::parse(DARK_EDITOR_FOREGROUND)?,
        );
    }

    document.token_colors = build_token_colors(&palette);
    document.semantic_token_colors = build_semantic_token_colors(&palette);
    Ok(document)
}
