//! Seq command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, Reporter};
use crate::SeqArgs;
use token_increment::{Sequence, Token};

/// Execute the seq command
pub fn execute_seq(config: &CliConfig, reporter: &Reporter, args: &SeqArgs) -> CliResult<()> {
    let tokens = generate(&args.token, args.count)?;
    tracing::info!(start = %args.token, count = tokens.len(), "generated sequence");

    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            for token in &tokens {
                reporter.result(&token.to_string())?;
            }
        }
        OutputFormat::Json => {
            reporter.result(&serde_json::to_string_pretty(&tokens)?)?;
        }
    }
    Ok(())
}

/// The `count` tokens following `start`
pub fn generate(start: &str, count: usize) -> CliResult<Vec<Token>> {
    Ok(Sequence::parse(start)?.take(count).collect())
}
