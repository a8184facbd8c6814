use abs_theme::cli::{self, CliInvocation};
use abs_theme::config::GeneratorConfig;
use abs_theme::domain::GithubBaseTheme;
use abs_theme::infra::PrimerColorSource;
use std::io::{self, Write};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum MainError {
    #[error(transparent)]
    Generate(#[from] cli::GenerateError),
}

fn main() {
    init_logging();

    if let Err(error) = run_main() {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{error}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_main() -> Result<(), MainError> {
    let args = std::env::args().collect::<Vec<_>>();
    let invocation = match cli::parse_invocation(&args) {
        Ok(invocation) => invocation,
        Err(error) => {
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "{error}");
            let _ = writeln!(err);
            print_help();
            std::process::exit(2);
        }
    };

    match invocation {
        CliInvocation::PrintHelp => {
            print_help();
            Ok(())
        }
        CliInvocation::PrintVersion => {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliInvocation::Generate => {
            let source = PrimerColorSource;
            let base = GithubBaseTheme::new(source);
            let outcome = cli::run(&GeneratorConfig::default(), &source, &base)?;
            let mut out = io::stdout().lock();
            for path in &outcome.written {
                let _ = writeln!(out, "{}", path.display());
            }
            Ok(())
        }
    }
}

fn print_help() {
    let text = cli::help_text(env!("CARGO_PKG_NAME"));
    let mut out = io::stdout().lock();
    let _ = write!(out, "{text}");
}
