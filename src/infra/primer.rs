use crate::domain::{ColorSource, ColorSourceError, ModeColors, ThemeMode};

const LIGHT_PALETTE: &str = include_str!("../../palettes/light.json");
const DARK_PALETTE: &str = include_str!("../../palettes/dark.json");

/// Primer color scales bundled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimerColorSource;

impl PrimerColorSource {
    fn raw(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => LIGHT_PALETTE,
            ThemeMode::Dark => DARK_PALETTE,
        }
    }
}

impl ColorSource for PrimerColorSource {
    fn colors_for_mode(&self, mode: ThemeMode) -> Result<ModeColors, ColorSourceError> {
        parse_palette(mode, Self::raw(mode))
    }
}

/// Decodes a palette file, rejecting empty scales.
pub fn parse_palette(mode: ThemeMode, raw: &str) -> Result<ModeColors, ColorSourceError> {
    let colors: ModeColors =
        serde_json::from_str(raw).map_err(|source| ColorSourceError::Parse { mode, source })?;
    if let Some((hue, _)) = colors.scales.iter().find(|(_, scale)| scale.is_empty()) {
        return Err(ColorSourceError::EmptyScale {
            mode,
            hue: hue.clone(),
        });
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Hue, RuleSet, SemanticPalette};

    #[test]
    fn bundled_palettes_parse() {
        for mode in ThemeMode::ALL {
            let colors = PrimerColorSource.colors_for_mode(mode).expect("palette");
            for scale in colors.scales.values() {
                assert_eq!(scale.len(), 10);
            }
        }
    }

    #[test]
    fn every_role_resolves_to_a_scale_color() {
        for mode in ThemeMode::ALL {
            let colors = PrimerColorSource.colors_for_mode(mode).expect("palette");
            let palette =
                SemanticPalette::resolve(&colors, mode, RuleSet::Extended).expect("resolve");
            for (role, color) in palette.roles() {
                if role == "base" {
                    assert_eq!(color, &colors.foreground.default);
                    continue;
                }
                assert!(
                    colors.scales.values().any(|scale| scale.contains(color)),
                    "{mode} {role} = {color} is not a scale color"
                );
            }
        }
    }

    #[test]
    fn empty_scale_is_rejected() {
        let raw = r##"{
            "scales": { "gray": ["#ffffff"], "pink": [] },
            "foreground": { "default": "#24292f" }
        }"##;
        let err = parse_palette(ThemeMode::Light, raw).expect_err("empty pink");
        assert!(matches!(
            err,
            ColorSourceError::EmptyScale { mode: ThemeMode::Light, ref hue } if hue == "pink"
        ));
    }

    #[test]
    fn malformed_palette_is_a_parse_error() {
        let err = parse_palette(ThemeMode::Dark, "{}").expect_err("no scales");
        assert!(matches!(
            err,
            ColorSourceError::Parse {
                mode: ThemeMode::Dark,
                ..
            }
        ));
    }

    #[test]
    fn dark_accents_match_primer_shades() {
        let colors = PrimerColorSource
            .colors_for_mode(ThemeMode::Dark)
            .expect("palette");
        assert_eq!(colors.shade(Hue::Purple, 2).expect("shade").as_str(), "#d2a8ff");
        assert_eq!(colors.shade(Hue::Yellow, 2).expect("shade").as_str(), "#e3b341");
        assert_eq!(colors.foreground.default.as_str(), "#c9d1d9");
    }
}
