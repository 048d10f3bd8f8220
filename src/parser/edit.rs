//! Parser for the edit command.

use super::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_LAST_VISIT, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_TAG,
};
use super::invalid_format;
use crate::commands::{EditCommand, EditPatientDescriptor};
use crate::domain::Tag;
use crate::error::{ParseError, ParseResult};
use crate::parser::util;
use std::collections::BTreeSet;

/// Parse `INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [v/LAST_VISIT] [t/TAG]...`.
pub fn parse(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_LAST_VISIT,
            PREFIX_TAG,
        ],
    );

    let index =
        util::parse_index(map.preamble()).map_err(|_| invalid_format(EditCommand::USAGE))?;
    map.ensure_no_repeats(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_LAST_VISIT,
    ])?;

    let descriptor = EditPatientDescriptor {
        name: map.value_of(PREFIX_NAME).map(util::parse_name).transpose()?,
        phone: map.value_of(PREFIX_PHONE).map(util::parse_phone).transpose()?,
        email: map.value_of(PREFIX_EMAIL).map(util::parse_email).transpose()?,
        address: map
            .value_of(PREFIX_ADDRESS)
            .map(util::parse_address)
            .transpose()?,
        last_visit: map
            .value_of(PREFIX_LAST_VISIT)
            .map(util::parse_last_visit)
            .transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_set() {
        return Err(ParseError::new(EditCommand::MESSAGE_NOT_EDITED));
    }

    Ok(EditCommand::new(index, descriptor))
}

/// A single empty `t/` clears the tags; otherwise tags are parsed as usual.
fn parse_tags_for_edit(inputs: Vec<&str>) -> ParseResult<Option<BTreeSet<Tag>>> {
    if inputs.is_empty() {
        return Ok(None);
    }
    if inputs.len() == 1 && inputs[0].is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    Ok(Some(util::parse_tags(inputs)?))
}
