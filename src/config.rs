use crate::domain::{RuleSet, ThemeMode};
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "./themes";

/// One generated theme file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThemeTarget {
    pub file_name: String,
    pub display_name: String,
    pub mode: ThemeMode,
    pub rule_set: RuleSet,
}

impl ThemeTarget {
    pub fn new(file_name: &str, display_name: &str, mode: ThemeMode, rule_set: RuleSet) -> Self {
        Self {
            file_name: file_name.to_string(),
            display_name: display_name.to_string(),
            mode,
            rule_set,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub targets: Vec<ThemeTarget>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            targets: vec![
                ThemeTarget::new(
                    "light-abs.json",
                    "GitHub Light ABS",
                    ThemeMode::Light,
                    RuleSet::Standard,
                ),
                ThemeTarget::new(
                    "dark-abs.json",
                    "GitHub Dark ABS",
                    ThemeMode::Dark,
                    RuleSet::Standard,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_light_and_dark() {
        let config = GeneratorConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("./themes"));
        let targets: Vec<(&str, ThemeMode)> = config
            .targets
            .iter()
            .map(|t| (t.file_name.as_str(), t.mode))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("light-abs.json", ThemeMode::Light),
                ("dark-abs.json", ThemeMode::Dark)
            ]
        );
        assert!(config.targets.iter().all(|t| t.rule_set == RuleSet::Standard));
    }
}
