use crate::error::{Result, RoloError};

/// Arity gate every handler runs first. A mismatch reports the command's
/// usage line so the user sees what was expected.
pub fn expect_arity(args: &[String], expected: usize, usage: &str) -> Result<()> {
    if args.len() != expected {
        return Err(RoloError::InvalidCommand {
            usage: usage.to_string(),
        });
    }
    Ok(())
}

/// Parse a positional index argument. Anything that is not a non-negative
/// integer (including `-1`) is a malformed argument, not a missing entry.
pub fn parse_index(args: &[String], raw: &str) -> Result<usize> {
    raw.parse().map_err(|_| RoloError::InvalidArguments {
        args: args.to_vec(),
        message: format!("'{raw}' is not a valid index; expected a non-negative integer."),
    })
}
