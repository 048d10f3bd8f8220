//! Parser for the find command.

use super::invalid_format;
use crate::commands::FindCommand;
use crate::error::ParseResult;

/// Parse `KEYWORD [MORE_KEYWORDS]...`.
pub fn parse(args: &str) -> ParseResult<FindCommand> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(invalid_format(FindCommand::USAGE));
    }

    let keywords = trimmed.split_whitespace().map(str::to_string).collect();
    Ok(FindCommand::new(keywords))
}
