//! Prefix-based argument tokenizing.
//!
//! Command arguments use prefixed fields (`n/NAME p/PHONE ...`). A prefix
//! opens a value that runs until the next prefix or the end of input; the
//! text before the first prefix is the preamble. A prefix only counts when
//! it starts the argument string or follows whitespace, so values may
//! contain slashes (`a/Block 123/4`).

use crate::error::{ParseError, ParseResult};
use std::fmt;

/// A field prefix such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_LAST_VISIT: Prefix = Prefix("v/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_MEDICINE: Prefix = Prefix("m/");

/// Tokenized arguments: the preamble plus prefixed values in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMap {
    /// The text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if any.
    pub fn value_of(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether `prefix` appeared at least once.
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }

    /// Reject repeated occurrences of single-valued prefixes.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` naming every repeated prefix.
    pub fn ensure_no_repeats(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let repeated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.values.iter().filter(|(p, _)| p == *prefix).count() > 1)
            .map(|prefix| prefix.0)
            .collect();

        if repeated.is_empty() {
            return Ok(());
        }
        Err(ParseError::new(format!(
            "Multiple values specified for the following single-valued field(s): {}",
            repeated.join(" ")
        )))
    }
}

/// Split `args` into a preamble and prefixed values.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMap {
    // Every prefix occurrence that starts the string or follows whitespace,
    // in input order
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        for (pos, _) in args.match_indices(prefix.0) {
            let at_word_start = pos == 0
                || args[..pos]
                    .chars()
                    .next_back()
                    .map(char::is_whitespace)
                    .unwrap_or(false);
            if at_word_start {
                positions.push((pos, prefix));
            }
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let preamble = args[..preamble_end].trim().to_string();

    let mut values = Vec::with_capacity(positions.len());
    for (i, &(pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.0.len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        values.push((prefix, args[value_start..value_end].trim().to_string()));
    }

    ArgumentMap { preamble, values }
}
