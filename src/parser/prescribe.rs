//! Parser for the prescribe command.

use super::invalid_format;
use super::tokenizer::{tokenize, PREFIX_MEDICINE};
use crate::commands::PrescribeCommand;
use crate::error::ParseResult;
use crate::parser::util;

/// Parse `INDEX m/MEDICINE [m/MEDICINE]...`.
pub fn parse(args: &str) -> ParseResult<PrescribeCommand> {
    let map = tokenize(args, &[PREFIX_MEDICINE]);

    let index =
        util::parse_index(map.preamble()).map_err(|_| invalid_format(PrescribeCommand::USAGE))?;

    let inputs = map.all_values(PREFIX_MEDICINE);
    if inputs.is_empty() {
        return Err(invalid_format(PrescribeCommand::USAGE));
    }
    let medicines = util::parse_medicines(inputs)?;

    Ok(PrescribeCommand::new(index, medicines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Index, Medicine};

    #[test]
    fn test_parse_single_medicine() {
        let cmd = parse("1 m/paracetamol").unwrap();
        assert_eq!(cmd.index, Index::from_one_based(1).unwrap());
        assert!(cmd.medicines.contains(&Medicine::new("paracetamol").unwrap()));
    }

    #[test]
    fn test_parse_multiple_medicines() {
        let cmd = parse("2 m/paracetamol m/ibuprofen").unwrap();
        assert_eq!(cmd.medicines.len(), 2);
    }

    #[test]
    fn test_parse_missing_index_fails_with_usage() {
        let err = parse("m/paracetamol").unwrap_err();
        assert!(err.message().starts_with("Invalid command format!"));
        assert!(err.message().contains("prescribe:"));
    }

    #[test]
    fn test_parse_missing_medicines_fails_with_usage() {
        let err = parse("1").unwrap_err();
        assert!(err.message().starts_with("Invalid command format!"));
    }

    #[test]
    fn test_parse_duplicate_medicine_inputs_fail() {
        let err = parse("1 m/paracetamol m/Paracetamol").unwrap_err();
        assert!(err.message().contains("Duplicate input"));
    }

    #[test]
    fn test_parse_invalid_medicine_surfaces_constraint() {
        let err = parse("1 m/beta blocker").unwrap_err();
        assert!(err.message().contains("alphanumeric"));
    }
}
