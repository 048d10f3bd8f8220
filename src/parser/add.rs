//! Parser for the add command.

use super::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_LAST_VISIT, PREFIX_MEDICINE, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_TAG,
};
use super::{invalid_format, require_value};
use crate::commands::AddCommand;
use crate::error::ParseResult;
use crate::model::Patient;
use crate::parser::util;

/// Parse `n/NAME p/PHONE e/EMAIL a/ADDRESS v/LAST_VISIT [t/TAG]... [m/MEDICINE]...`.
pub fn parse(args: &str) -> ParseResult<AddCommand> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_LAST_VISIT,
            PREFIX_TAG,
            PREFIX_MEDICINE,
        ],
    );

    if !map.preamble().is_empty() {
        return Err(invalid_format(AddCommand::USAGE));
    }
    map.ensure_no_repeats(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_LAST_VISIT,
    ])?;

    let name = util::parse_name(require_value(&map, PREFIX_NAME, AddCommand::USAGE)?)?;
    let phone = util::parse_phone(require_value(&map, PREFIX_PHONE, AddCommand::USAGE)?)?;
    let email = util::parse_email(require_value(&map, PREFIX_EMAIL, AddCommand::USAGE)?)?;
    let address = util::parse_address(require_value(&map, PREFIX_ADDRESS, AddCommand::USAGE)?)?;
    let last_visit =
        util::parse_last_visit(require_value(&map, PREFIX_LAST_VISIT, AddCommand::USAGE)?)?;
    let tags = util::parse_tags(map.all_values(PREFIX_TAG))?;
    let medicines = util::parse_medicines(map.all_values(PREFIX_MEDICINE))?;

    Ok(AddCommand::new(Patient::new(
        name, phone, email, address, last_visit, tags, medicines,
    )))
}
