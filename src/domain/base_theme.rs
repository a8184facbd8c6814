use crate::domain::{
    BaseThemeBuilder, BaseThemeError, ColorSource, HexColor, Hue, ModeColors, ThemeDocument,
    ThemeMode,
};
use indexmap::IndexMap;

/// How one UI color key is derived from a mode's palette.
#[derive(Clone, Copy, Debug)]
enum UiColor {
    /// The palette's default foreground.
    Fg,
    /// White in light mode, the darkest gray in dark mode.
    Canvas,
    /// (hue, light index, dark index)
    Shade(Hue, usize, usize),
    /// A shade with an alpha suffix.
    Alpha(Hue, usize, usize, u8),
    /// (light, dark) literal colors.
    Literal(&'static str, &'static str),
}

use Hue::{Blue, Gray, Green, Orange, Purple, Red, Yellow};
use UiColor::{Alpha, Canvas, Fg, Literal, Shade};

const WHITE: UiColor = Literal("#ffffff", "#ffffff");
const BORDER: UiColor = Shade(Gray, 2, 6);
const BORDER_MUTED: UiColor = Shade(Gray, 1, 7);
const SUBTLE: UiColor = Shade(Gray, 0, 8);
const MUTED: UiColor = Shade(Gray, 6, 3);
const ACCENT: UiColor = Shade(Blue, 5, 3);
const ACCENT_EMPHASIS: UiColor = Shade(Blue, 5, 5);
const ACTIVE_BORDER: UiColor = Shade(Orange, 3, 3);

const UI_COLORS: &[(&str, UiColor)] = &[
    ("focusBorder", ACCENT_EMPHASIS),
    ("foreground", Fg),
    ("descriptionForeground", MUTED),
    ("errorForeground", Shade(Red, 5, 4)),
    ("textLink.foreground", ACCENT),
    ("textLink.activeForeground", ACCENT),
    ("textBlockQuote.background", SUBTLE),
    ("textBlockQuote.border", BORDER),
    ("textCodeBlock.background", Alpha(Gray, 4, 4, 0x33)),
    ("textPreformat.foreground", MUTED),
    ("textSeparator.foreground", BORDER_MUTED),
    ("icon.foreground", MUTED),
    ("keybindingLabel.foreground", Fg),
    ("button.background", Shade(Green, 5, 5)),
    ("button.foreground", WHITE),
    ("button.hoverBackground", Shade(Green, 6, 4)),
    ("button.secondaryBackground", Shade(Gray, 1, 6)),
    ("button.secondaryForeground", Fg),
    ("button.secondaryHoverBackground", Shade(Gray, 2, 5)),
    ("checkbox.background", SUBTLE),
    ("checkbox.border", BORDER),
    ("dropdown.background", Canvas),
    ("dropdown.border", BORDER),
    ("dropdown.foreground", Fg),
    ("dropdown.listBackground", Canvas),
    ("input.background", Canvas),
    ("input.border", BORDER),
    ("input.foreground", Fg),
    ("input.placeholderForeground", Shade(Gray, 5, 4)),
    ("badge.foreground", WHITE),
    ("badge.background", ACCENT_EMPHASIS),
    ("progressBar.background", ACCENT_EMPHASIS),
    ("titleBar.activeForeground", MUTED),
    ("titleBar.activeBackground", Canvas),
    ("titleBar.inactiveForeground", MUTED),
    ("titleBar.inactiveBackground", SUBTLE),
    ("titleBar.border", BORDER),
    ("activityBar.foreground", Fg),
    ("activityBar.inactiveForeground", MUTED),
    ("activityBar.background", Canvas),
    ("activityBarBadge.foreground", WHITE),
    ("activityBarBadge.background", ACCENT_EMPHASIS),
    ("activityBar.activeBorder", ACTIVE_BORDER),
    ("activityBar.border", BORDER),
    ("sideBar.foreground", Fg),
    ("sideBar.background", SUBTLE),
    ("sideBar.border", BORDER),
    ("sideBarTitle.foreground", Fg),
    ("sideBarSectionHeader.foreground", Fg),
    ("sideBarSectionHeader.background", SUBTLE),
    ("sideBarSectionHeader.border", BORDER),
    ("list.hoverForeground", Fg),
    ("list.inactiveSelectionForeground", Fg),
    ("list.activeSelectionForeground", Fg),
    ("list.hoverBackground", Alpha(Gray, 4, 5, 0x1a)),
    ("list.inactiveSelectionBackground", Alpha(Gray, 4, 5, 0x26)),
    ("list.activeSelectionBackground", Alpha(Gray, 4, 5, 0x33)),
    ("list.focusForeground", Fg),
    ("list.focusBackground", Alpha(Blue, 5, 5, 0x26)),
    ("list.highlightForeground", ACCENT),
    ("tree.indentGuidesStroke", BORDER_MUTED),
    ("notificationCenterHeader.foreground", MUTED),
    ("notificationCenterHeader.background", SUBTLE),
    ("notifications.foreground", Fg),
    ("notifications.background", Canvas),
    ("notifications.border", BORDER),
    ("notificationsErrorIcon.foreground", Shade(Red, 5, 4)),
    ("notificationsWarningIcon.foreground", Shade(Yellow, 5, 3)),
    ("notificationsInfoIcon.foreground", ACCENT),
    ("pickerGroup.border", BORDER_MUTED),
    ("pickerGroup.foreground", MUTED),
    ("quickInput.background", Canvas),
    ("quickInput.foreground", Fg),
    ("statusBar.foreground", MUTED),
    ("statusBar.background", Canvas),
    ("statusBar.border", BORDER),
    ("statusBar.focusBorder", Alpha(Blue, 5, 5, 0x80)),
    ("statusBar.noFolderBackground", Canvas),
    ("statusBar.debuggingForeground", WHITE),
    ("statusBar.debuggingBackground", Shade(Red, 5, 5)),
    ("statusBarItem.prominentBackground", Alpha(Gray, 4, 5, 0x33)),
    ("statusBarItem.remoteForeground", Fg),
    ("statusBarItem.remoteBackground", BORDER_MUTED),
    ("statusBarItem.hoverBackground", Alpha(Gray, 9, 0, 0x14)),
    ("statusBarItem.activeBackground", Alpha(Gray, 9, 0, 0x1f)),
    ("editorGroupHeader.tabsBackground", SUBTLE),
    ("editorGroupHeader.tabsBorder", BORDER),
    ("editorGroup.border", BORDER),
    ("tab.activeForeground", Fg),
    ("tab.inactiveForeground", MUTED),
    ("tab.inactiveBackground", SUBTLE),
    ("tab.activeBackground", Canvas),
    ("tab.hoverBackground", Canvas),
    ("tab.unfocusedHoverBackground", Alpha(Gray, 4, 5, 0x1a)),
    ("tab.border", BORDER),
    ("tab.unfocusedActiveBorderTop", BORDER),
    ("tab.activeBorder", Canvas),
    ("tab.unfocusedActiveBorder", Canvas),
    ("tab.activeBorderTop", ACTIVE_BORDER),
    ("breadcrumb.foreground", MUTED),
    ("breadcrumb.focusForeground", Fg),
    ("breadcrumb.activeSelectionForeground", MUTED),
    ("breadcrumbPicker.background", Canvas),
    ("editor.foreground", Fg),
    ("editor.background", Canvas),
    ("editorWidget.background", Canvas),
    ("editor.foldBackground", Alpha(Gray, 4, 4, 0x1a)),
    ("editor.lineHighlightBackground", Alpha(Gray, 1, 4, 0x40)),
    ("editorLineNumber.foreground", Shade(Gray, 4, 4)),
    ("editorLineNumber.activeForeground", Fg),
    ("editorIndentGuide.background", Alpha(Gray, 9, 1, 0x1f)),
    ("editorIndentGuide.activeBackground", Alpha(Gray, 9, 1, 0x3d)),
    ("editorWhitespace.foreground", Shade(Gray, 3, 5)),
    ("editorCursor.foreground", ACCENT),
    ("editor.findMatchBackground", Shade(Yellow, 2, 5)),
    ("editor.findMatchHighlightBackground", Alpha(Yellow, 2, 3, 0x80)),
    ("editor.linkedEditingBackground", Alpha(Blue, 5, 3, 0x12)),
    ("editor.selectionHighlightBackground", Alpha(Green, 3, 3, 0x40)),
    ("editor.wordHighlightBackground", Alpha(Gray, 1, 4, 0x80)),
    ("editor.wordHighlightStrongBackground", Alpha(Gray, 3, 4, 0x4d)),
    ("editorBracketMatch.background", Alpha(Green, 3, 3, 0x40)),
    ("editorBracketMatch.border", Alpha(Green, 3, 3, 0x99)),
    ("editorInlayHint.background", Alpha(Gray, 3, 3, 0x33)),
    ("editorInlayHint.foreground", MUTED),
    ("editorGutter.modifiedBackground", Shade(Yellow, 3, 4)),
    ("editorGutter.addedBackground", Shade(Green, 3, 5)),
    ("editorGutter.deletedBackground", Shade(Red, 4, 4)),
    ("diffEditor.insertedLineBackground", Alpha(Green, 3, 5, 0x33)),
    ("diffEditor.insertedTextBackground", Alpha(Green, 3, 3, 0x66)),
    ("diffEditor.removedLineBackground", Alpha(Red, 3, 4, 0x33)),
    ("diffEditor.removedTextBackground", Alpha(Red, 3, 4, 0x66)),
    ("scrollbar.shadow", Alpha(Gray, 4, 9, 0x33)),
    ("scrollbarSlider.background", Alpha(Gray, 4, 4, 0x33)),
    ("scrollbarSlider.hoverBackground", Alpha(Gray, 4, 4, 0x3d)),
    ("scrollbarSlider.activeBackground", Alpha(Gray, 4, 4, 0x47)),
    ("editorOverviewRuler.border", Canvas),
    ("minimapSlider.background", Alpha(Gray, 4, 4, 0x33)),
    ("minimapSlider.hoverBackground", Alpha(Gray, 4, 4, 0x3d)),
    ("minimapSlider.activeBackground", Alpha(Gray, 4, 4, 0x47)),
    ("panel.background", SUBTLE),
    ("panel.border", BORDER),
    ("panelTitle.activeBorder", ACTIVE_BORDER),
    ("panelTitle.activeForeground", Fg),
    ("panelTitle.inactiveForeground", MUTED),
    ("panelInput.border", BORDER),
    ("debugIcon.breakpointForeground", Shade(Red, 5, 4)),
    ("debugConsole.infoForeground", MUTED),
    ("debugConsole.warningForeground", Shade(Yellow, 6, 2)),
    ("debugConsole.errorForeground", Shade(Red, 6, 2)),
    ("debugConsole.sourceForeground", Shade(Yellow, 5, 2)),
    ("debugConsoleInputIcon.foreground", Shade(Purple, 5, 2)),
    ("debugTokenExpression.name", Shade(Blue, 6, 2)),
    ("debugTokenExpression.value", Shade(Blue, 8, 1)),
    ("debugTokenExpression.string", Shade(Blue, 8, 1)),
    ("debugTokenExpression.boolean", Shade(Green, 6, 2)),
    ("debugTokenExpression.number", Shade(Green, 6, 2)),
    ("debugTokenExpression.error", Shade(Red, 6, 2)),
    ("debugToolBar.background", Canvas),
    ("terminal.foreground", Fg),
    ("terminal.ansiBlack", Shade(Gray, 9, 5)),
    ("terminal.ansiRed", Shade(Red, 5, 3)),
    ("terminal.ansiGreen", Shade(Green, 6, 3)),
    ("terminal.ansiYellow", Shade(Yellow, 7, 3)),
    ("terminal.ansiBlue", Shade(Blue, 5, 3)),
    ("terminal.ansiMagenta", Shade(Purple, 5, 3)),
    ("terminal.ansiCyan", Literal("#1b7c83", "#39c5cf")),
    ("terminal.ansiWhite", Shade(Gray, 6, 2)),
    ("terminal.ansiBrightBlack", Shade(Gray, 5, 4)),
    ("terminal.ansiBrightRed", Shade(Red, 4, 2)),
    ("terminal.ansiBrightGreen", Shade(Green, 5, 2)),
    ("terminal.ansiBrightYellow", Shade(Yellow, 6, 2)),
    ("terminal.ansiBrightBlue", Shade(Blue, 4, 2)),
    ("terminal.ansiBrightMagenta", Shade(Purple, 4, 2)),
    ("terminal.ansiBrightCyan", Literal("#3192aa", "#56d4dd")),
    ("terminal.ansiBrightWhite", Shade(Gray, 5, 0)),
    ("gitDecoration.addedResourceForeground", Shade(Green, 5, 3)),
    ("gitDecoration.modifiedResourceForeground", Shade(Yellow, 5, 3)),
    ("gitDecoration.deletedResourceForeground", Shade(Red, 5, 4)),
    ("gitDecoration.untrackedResourceForeground", Shade(Green, 5, 3)),
    ("gitDecoration.ignoredResourceForeground", Shade(Gray, 5, 4)),
    ("gitDecoration.conflictingResourceForeground", Shade(Orange, 5, 4)),
    ("gitDecoration.submoduleResourceForeground", MUTED),
    ("editor.stackFrameHighlightBackground", Alpha(Yellow, 2, 3, 0x66)),
    ("editor.focusedStackFrameHighlightBackground", Alpha(Green, 2, 3, 0x66)),
    ("peekViewEditor.matchHighlightBackground", Alpha(Yellow, 2, 3, 0x66)),
    ("peekViewResult.matchHighlightBackground", Alpha(Yellow, 2, 3, 0x66)),
    ("peekViewEditor.background", SUBTLE),
    ("peekViewResult.background", Canvas),
    ("settings.headerForeground", Fg),
    ("settings.modifiedItemIndicator", Alpha(Yellow, 4, 4, 0x66)),
    ("welcomePage.buttonBackground", Shade(Gray, 0, 7)),
    ("welcomePage.buttonHoverBackground", Shade(Gray, 1, 6)),
];

/// GitHub-style UI chrome derived from a [`ColorSource`].
#[derive(Clone, Debug)]
pub struct GithubBaseTheme<S> {
    source: S,
}

impl<S: ColorSource> GithubBaseTheme<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn resolve(
        color: UiColor,
        colors: &ModeColors,
        mode: ThemeMode,
    ) -> Result<HexColor, BaseThemeError> {
        let resolved = match color {
            Fg => colors.foreground.default.clone(),
            Canvas => match mode {
                ThemeMode::Light => HexColor::parse("#ffffff")?,
                ThemeMode::Dark => colors.shade(Gray, 9)?,
            },
            Shade(hue, light, dark) => colors.shade(hue, mode.pick(light, dark))?,
            Alpha(hue, light, dark, alpha) => colors
                .shade(hue, mode.pick(light, dark))?
                .with_alpha(alpha),
            Literal(light, dark) => HexColor::parse(mode.pick(light, dark))?,
        };
        Ok(resolved)
    }
}

impl<S: ColorSource> BaseThemeBuilder for GithubBaseTheme<S> {
    fn base_theme(&self, mode: ThemeMode, name: &str) -> Result<ThemeDocument, BaseThemeError> {
        let colors = self.source.colors_for_mode(mode)?;
        let mut ui = IndexMap::with_capacity(UI_COLORS.len());
        for (key, color) in UI_COLORS {
            ui.insert((*key).to_string(), Self::resolve(*color, &colors, mode)?);
        }
        Ok(ThemeDocument::new(name, mode, ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::tests::sample_colors;
    use crate::domain::{ColorSourceError, EDITOR_FOREGROUND, ShadeLookupError};

    struct FixedSource(ModeColors);

    impl ColorSource for FixedSource {
        fn colors_for_mode(&self, _mode: ThemeMode) -> Result<ModeColors, ColorSourceError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn base_theme_has_every_ui_key_and_no_rules() {
        let builder = GithubBaseTheme::new(FixedSource(sample_colors()));
        let document = builder.base_theme(ThemeMode::Dark, "Base").expect("base");

        assert_eq!(document.name, "Base");
        assert_eq!(document.colors.len(), UI_COLORS.len());
        assert!(document.token_colors.is_empty());
        assert!(document.semantic_token_colors.is_empty());
        assert!(document.semantic_highlighting);
    }

    #[test]
    fn editor_foreground_is_the_palette_default() {
        let colors = sample_colors();
        let builder = GithubBaseTheme::new(FixedSource(colors.clone()));
        for mode in ThemeMode::ALL {
            let document = builder.base_theme(mode, "Base").expect("base");
            assert_eq!(
                document.color(EDITOR_FOREGROUND),
                Some(&colors.foreground.default)
            );
        }
    }

    #[test]
    fn canvas_depends_on_mode() {
        let colors = sample_colors();
        let builder = GithubBaseTheme::new(FixedSource(colors.clone()));

        let light = builder.base_theme(ThemeMode::Light, "L").expect("light");
        assert_eq!(
            light.color("editor.background").map(HexColor::as_str),
            Some("#ffffff")
        );
        let dark = builder.base_theme(ThemeMode::Dark, "D").expect("dark");
        assert_eq!(
            dark.color("editor.background"),
            Some(&colors.shade(Gray, 9).expect("shade"))
        );
    }

    #[test]
    fn alpha_entries_carry_a_suffix() {
        let builder = GithubBaseTheme::new(FixedSource(sample_colors()));
        let document = builder.base_theme(ThemeMode::Light, "L").expect("light");
        let color = document.color("list.hoverBackground").expect("key");
        assert_eq!(color.as_str().len(), 9);
        assert!(color.as_str().ends_with("1a"));
    }

    #[test]
    fn missing_scale_fails() {
        let mut colors = sample_colors();
        colors.scales.remove("gray");
        let builder = GithubBaseTheme::new(FixedSource(colors));
        let err = builder.base_theme(ThemeMode::Light, "L").expect_err("no gray");
        assert!(matches!(
            err,
            BaseThemeError::Lookup(ShadeLookupError::MissingScale { hue: Gray })
        ));
    }
}
