//! tokinc: increment letter-prefixed numeric tokens
//!
//! ## Usage
//!
//! ```bash
//! tokinc next A009 fx001 A9999   # A010 fx002 A0000
//! tokinc seq inv098 -n 3         # inv099 inv100 inv101
//! tokinc check A1B2              # exit 1
//! tokinc batch ids.txt --format json
//! ```

use clap::Parser;
use std::process::ExitCode;
use tokinc::{handlers, logging, Cli, CliConfig, CliResult, Commands, Reporter, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    logging::init_logging(&config)?;
    tracing::debug!(?config, "effective configuration");

    let reporter = Reporter::new(config.color.should_color_stderr(), config.verbosity.is_quiet());

    match cli.command {
        Commands::Next(args) => handlers::execute_next(&config, &reporter, &args),
        Commands::Seq(args) => handlers::execute_seq(&config, &reporter, &args),
        Commands::Check(args) => handlers::execute_check(&reporter, &args),
        Commands::Batch(args) => handlers::execute_batch(&config, &reporter, &args),
        Commands::Config(args) => handlers::execute_config(&config, &reporter, &args),
    }
}

/// Config file first, then command-line overrides
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    Ok(config)
}
