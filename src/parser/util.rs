//! Shared string-to-value conversions used by the command parsers.
//!
//! Every function trims its input and returns a [`ParseError`] carrying the
//! field's constraint message when the input does not satisfy the rule.

use crate::commands::MedicineRemoval;
use crate::domain::{
    Address, Email, Index, LastVisit, Medicine, Name, Phone, Tag, ValidationError,
};
use crate::error::{ParseError, ParseResult};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

pub const MESSAGE_INVALID_INDEX: &str = "Index should be a non-zero unsigned integer";

/// The medicine token that asks unprescribe to remove everything.
const REMOVE_ALL_KEYWORD: &str = "all";

/// Parse a one-based index.
pub fn parse_index(input: &str) -> ParseResult<Index> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX));
    }

    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_INDEX))
}

/// Parse a patient name.
pub fn parse_name(input: &str) -> ParseResult<Name> {
    Ok(Name::new(input.trim())?)
}

/// Parse a phone number.
pub fn parse_phone(input: &str) -> ParseResult<Phone> {
    Ok(Phone::new(input.trim())?)
}

/// Parse an email address.
pub fn parse_email(input: &str) -> ParseResult<Email> {
    Ok(Email::new(input.trim())?)
}

/// Parse an address.
pub fn parse_address(input: &str) -> ParseResult<Address> {
    Ok(Address::new(input.trim())?)
}

/// Parse a last-visit date: ISO-8601, no later than today.
pub fn parse_last_visit(input: &str) -> ParseResult<LastVisit> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))?;
    Ok(LastVisit::new(date)?)
}

/// Parse a single tag.
pub fn parse_tag(input: &str) -> ParseResult<Tag> {
    Ok(Tag::new(input.trim())?)
}

/// Parse a single medicine name.
pub fn parse_medicine(input: &str) -> ParseResult<Medicine> {
    Ok(Medicine::new(input.trim())?)
}

/// Parse repeated tag inputs into a set, rejecting case-insensitive repeats.
pub fn parse_tags<'a, I>(inputs: I) -> ParseResult<BTreeSet<Tag>>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    if let Some(duplicate) = find_duplicate(inputs.clone()) {
        return Err(duplicate_input_error(duplicate));
    }
    inputs.into_iter().map(parse_tag).collect()
}

/// Parse repeated medicine inputs into a set, rejecting case-insensitive
/// repeats.
pub fn parse_medicines<'a, I>(inputs: I) -> ParseResult<BTreeSet<Medicine>>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    if let Some(duplicate) = find_duplicate(inputs.clone()) {
        return Err(duplicate_input_error(duplicate));
    }
    inputs.into_iter().map(parse_medicine).collect()
}

/// Parse medicine inputs for unprescribe. The keyword `all` (any case, any
/// position) short-circuits to [`MedicineRemoval::All`].
pub fn parse_medicines_for_removal<'a, I>(inputs: I) -> ParseResult<MedicineRemoval>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let remove_all = inputs
        .clone()
        .into_iter()
        .any(|input| input.trim().eq_ignore_ascii_case(REMOVE_ALL_KEYWORD));
    if remove_all {
        return Ok(MedicineRemoval::All);
    }
    Ok(MedicineRemoval::Medicines(parse_medicines(inputs)?))
}

/// The first input repeated case-insensitively, or `None` if all distinct.
pub fn find_duplicate<'a, I>(inputs: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    inputs
        .into_iter()
        .find(|input| !seen.insert(input.trim().to_ascii_lowercase()))
}

fn duplicate_input_error(duplicate: &str) -> ParseError {
    ParseError::new(format!("Duplicate input detected: {}", duplicate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_valid() {
        assert_eq!(parse_index("1").unwrap(), Index::from_one_based(1).unwrap());
        assert_eq!(parse_index("  42  ").unwrap(), Index::from_one_based(42).unwrap());
    }

    #[test]
    fn test_parse_index_invalid() {
        for input in ["", "0", "-1", "+1", "1.5", "one", "10 a", "99999999999999999999999999"] {
            let err = parse_index(input).unwrap_err();
            assert_eq!(err.message(), MESSAGE_INVALID_INDEX, "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_field_values_trim_whitespace() {
        assert_eq!(parse_name("  Alice Pauline  ").unwrap().as_str(), "Alice Pauline");
        assert_eq!(parse_phone(" 94351253 ").unwrap().as_str(), "94351253");
        assert_eq!(parse_tag(" friends ").unwrap().as_str(), "friends");
    }

    #[test]
    fn test_parse_field_values_surface_constraint_messages() {
        let err = parse_phone("12a").unwrap_err();
        assert!(err.message().contains("only digits"));

        let err = parse_email("not-an-email").unwrap_err();
        assert!(err.message().contains("local@domain"));
    }

    #[test]
    fn test_parse_last_visit_accepts_past_iso_dates() {
        let visit = parse_last_visit("2020-01-01").unwrap();
        assert_eq!(visit.to_string(), "2020-01-01");
    }

    #[test]
    fn test_parse_last_visit_rejects_unparsable_strings() {
        for input in ["", "01/01/2020", "2020-13-01", "2020-01-32", "yesterday"] {
            let err = parse_last_visit(input).unwrap_err();
            assert!(err.message().contains("YYYY-MM-DD"), "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_last_visit_rejects_future_dates() {
        let err = parse_last_visit("9999-12-31").unwrap_err();
        assert!(err.message().contains("after today"));
    }

    #[test]
    fn test_parse_tags_is_order_independent() {
        let a = parse_tags(["friends", "owesMoney"]).unwrap();
        let b = parse_tags(["owesMoney", "friends"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_parse_tags_rejects_case_insensitive_repeats() {
        let err = parse_tags(["friends", "Friends"]).unwrap_err();
        assert!(err.message().contains("Friends"));
    }

    #[test]
    fn test_parse_medicines_is_order_independent() {
        let a = parse_medicines(["paracetamol", "ibuprofen"]).unwrap();
        let b = parse_medicines(["ibuprofen", "paracetamol"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_medicines_for_removal_all_keyword() {
        assert_eq!(parse_medicines_for_removal(["all"]).unwrap(), MedicineRemoval::All);
        assert_eq!(parse_medicines_for_removal(["ALL"]).unwrap(), MedicineRemoval::All);
        // "all" anywhere wins, even next to real medicine names
        assert_eq!(
            parse_medicines_for_removal(["paracetamol", "All"]).unwrap(),
            MedicineRemoval::All
        );
    }

    #[test]
    fn test_parse_medicines_for_removal_named_set() {
        let removal = parse_medicines_for_removal(["paracetamol"]).unwrap();
        match removal {
            MedicineRemoval::Medicines(set) => {
                assert!(set.contains(&Medicine::new("paracetamol").unwrap()))
            }
            MedicineRemoval::All => panic!("expected a named set"),
        }
    }

    #[test]
    fn test_find_duplicate_returns_first_case_insensitive_repeat() {
        assert_eq!(find_duplicate(["a", "b", "A", "B"]), Some("A"));
        assert_eq!(find_duplicate(["para", "ibu", "Para", "para"]), Some("Para"));
        assert_eq!(find_duplicate(["a", "b", "c"]), None);
        assert_eq!(find_duplicate(std::iter::empty::<&str>()), None);
    }
}
