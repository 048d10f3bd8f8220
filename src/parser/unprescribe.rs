//! Parser for the unprescribe command.

use super::invalid_format;
use super::tokenizer::{tokenize, PREFIX_MEDICINE};
use crate::commands::UnprescribeCommand;
use crate::error::ParseResult;
use crate::parser::util;

/// Parse `INDEX m/MEDICINE [m/MEDICINE]...` where `m/all` removes everything.
pub fn parse(args: &str) -> ParseResult<UnprescribeCommand> {
    let map = tokenize(args, &[PREFIX_MEDICINE]);

    let index = util::parse_index(map.preamble())
        .map_err(|_| invalid_format(UnprescribeCommand::USAGE))?;

    let inputs = map.all_values(PREFIX_MEDICINE);
    if inputs.is_empty() {
        return Err(invalid_format(UnprescribeCommand::USAGE));
    }
    let removal = util::parse_medicines_for_removal(inputs)?;

    Ok(UnprescribeCommand::new(index, removal))
}
