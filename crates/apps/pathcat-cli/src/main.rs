//! pathcat CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use pathcat_cli::{
    cli::{Cli, Commands},
    commands::{self, ExtractRequest},
    config::{default_config_path, CliConfig},
    error::{CliError, CliResult},
    output::OutputFormat,
};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on --verbose flag or RUST_LOG env var
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool) {
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !verbose && !has_rust_log {
        return;
    }

    let mut filter = EnvFilter::from_default_env();
    if verbose {
        if let Ok(directive) = "pathcat=debug".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print a user-friendly error message with error code and recovery hint.
fn print_error(e: &CliError) {
    let code = e.error_code();

    // Error line with code
    eprintln!(
        "{} [{}]: {}",
        "Error".red().bold(),
        code.to_string().yellow(),
        e
    );

    // Suggestion if available
    if let Some(suggestion) = code.suggestion() {
        eprintln!("{}: {}", "Hint".cyan(), suggestion);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let format: OutputFormat = cli.format.into();

    let output = match cli.command {
        Commands::Init { force } => commands::init(&config_path, format, force)?,

        Commands::Classify { path } => commands::classify(format, &path)?,

        Commands::Extract {
            paths,
            input,
            namespace,
            lower_case,
            s3_model_version,
            keep_going,
            known,
        } => {
            let config = CliConfig::load(&config_path)?.with_overrides(
                namespace,
                lower_case,
                s3_model_version,
            );
            if !config.display.color {
                colored::control::set_override(false);
            }
            let request = ExtractRequest {
                paths,
                input,
                keep_going,
                show_known: known,
            };
            commands::extract(config, format, request)?
        }
    };

    println!("{}", output);

    Ok(())
}
