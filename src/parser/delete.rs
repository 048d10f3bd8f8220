//! Parser for the delete command.

use super::invalid_format;
use crate::commands::DeleteCommand;
use crate::error::ParseResult;
use crate::parser::util;

/// Parse `INDEX`.
pub fn parse(args: &str) -> ParseResult<DeleteCommand> {
    let index = util::parse_index(args).map_err(|_| invalid_format(DeleteCommand::USAGE))?;
    Ok(DeleteCommand::new(index))
}
