use crate::config::GeneratorConfig;
use crate::domain::{BaseThemeBuilder, ColorSource, ComposeError, compose};
use crate::infra::{ThemeFile, WriteOutcome, WriteThemesError, write_themes};
use thiserror::Error;
use tracing::info;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CliInvocation {
    PrintHelp,
    PrintVersion,
    Generate,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CliParseError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Generation takes no options; only `--help` and `--version` are understood.
pub fn parse_invocation(args: &[String]) -> Result<CliInvocation, CliParseError> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(CliInvocation::PrintHelp);
    }
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return Ok(CliInvocation::PrintVersion);
    }

    match args.get(1) {
        None => Ok(CliInvocation::Generate),
        Some(arg) if arg.starts_with('-') => Err(CliParseError::UnknownFlag(arg.to_string())),
        Some(arg) => Err(CliParseError::UnexpectedArgument(arg.to_string())),
    }
}

pub fn help_text(name: &str) -> String {
    format!(
        "{name} - generate the GitHub ABS (Alabaster-Based Syntax) editor themes\n\nUSAGE:\n  {name}                 Write light-abs.json and dark-abs.json into ./themes\n  {name} --help | --version\n\nENV:\n  RUST_LOG   Log filter for diagnostics on stderr (default: warn)\n"
    )
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to compose {file_name}: {source}")]
    Compose {
        file_name: String,
        #[source]
        source: ComposeError,
    },

    #[error(transparent)]
    Write(#[from] WriteThemesError),
}

/// Composes every configured target, then writes them. Nothing is written if
/// any composition fails.
pub fn run(
    config: &GeneratorConfig,
    source: &dyn ColorSource,
    base: &dyn BaseThemeBuilder,
) -> Result<WriteOutcome, GenerateError> {
    let mut files = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let document = compose(
            target.mode,
            &target.display_name,
            target.rule_set,
            source,
            base,
        )
        .map_err(|error| GenerateError::Compose {
            file_name: target.file_name.clone(),
            source: error,
        })?;
        info!(
            file = %target.file_name,
            mode = %target.mode,
            token_rules = document.token_colors.len(),
            semantic_rules = document.semantic_token_colors.len(),
            "composed theme"
        );
        files.push(ThemeFile {
            file_name: target.file_name.clone(),
            document,
        });
    }

    let outcome = write_themes(&config.out_dir, &files)?;
    info!(
        out_dir = %config.out_dir.display(),
        files = outcome.written.len(),
        "themes written"
    );
    Ok(outcome)
}
