//! Check command handler

use crate::error::CliResult;
use crate::output::Reporter;
use crate::CheckArgs;
use token_increment::Token;

/// Execute the check command
///
/// A rejected input is reported, then returned as an error so the process
/// exits non-zero.
pub fn execute_check(reporter: &Reporter, args: &CheckArgs) -> CliResult<()> {
    match Token::parse(&args.input) {
        Ok(token) => {
            reporter.success(&describe_token(&token));
            Ok(())
        }
        Err(err) => {
            reporter.failure(&format!("{:?} is not a token", args.input));
            Err(err.into())
        }
    }
}

/// One-line description of a valid token
#[must_use]
pub fn describe_token(token: &Token) -> String {
    format!(
        "{token}: prefix {:?}, suffix {:?} (width {}), next {}",
        token.prefix(),
        token.suffix(),
        token.width(),
        token.successor()
    )
}
