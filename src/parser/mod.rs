//! Command parsing: raw input lines to command values.
//!
//! The dispatcher splits an input line into command word and arguments and
//! hands the arguments to the matching per-command parser. All failures are
//! [`ParseError`]s carrying the message shown to the user.

pub mod tokenizer;
pub mod util;

mod add;
mod delete;
mod edit;
mod find;
mod prescribe;
mod unprescribe;

use crate::commands::{
    AddCommand, ClearCommand, CommandKind, DeleteCommand, EditCommand, ExitCommand, FindCommand,
    HelpCommand, ListCommand, PrescribeCommand, UnprescribeCommand,
};
use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tokenizer::{ArgumentMap, Prefix};

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

static COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<word>\S+)(?P<args>.*)$").expect("Failed to compile command format regex")
});

/// Build the "Invalid command format!" error carrying a usage string.
pub(crate) fn invalid_format(usage: &str) -> ParseError {
    ParseError::new(format!("Invalid command format!\n{}", usage))
}

/// The value of a required prefix, or the invalid-format error for `usage`.
pub(crate) fn require_value<'a>(
    map: &'a ArgumentMap,
    prefix: Prefix,
    usage: &str,
) -> ParseResult<&'a str> {
    map.value_of(prefix).ok_or_else(|| invalid_format(usage))
}

/// Parse a full input line into a command.
pub fn parse_command(input: &str) -> ParseResult<CommandKind> {
    let captures = COMMAND_FORMAT
        .captures(input.trim())
        .ok_or_else(|| invalid_format(HelpCommand::MESSAGE_HELP))?;

    let word = &captures["word"];
    let args = &captures["args"];

    match word {
        AddCommand::COMMAND_WORD => add::parse(args).map(CommandKind::Add),
        ClearCommand::COMMAND_WORD => Ok(CommandKind::Clear(ClearCommand)),
        DeleteCommand::COMMAND_WORD => delete::parse(args).map(CommandKind::Delete),
        EditCommand::COMMAND_WORD => edit::parse(args).map(CommandKind::Edit),
        ExitCommand::COMMAND_WORD => Ok(CommandKind::Exit(ExitCommand)),
        FindCommand::COMMAND_WORD => find::parse(args).map(CommandKind::Find),
        HelpCommand::COMMAND_WORD => Ok(CommandKind::Help(HelpCommand)),
        ListCommand::COMMAND_WORD => Ok(CommandKind::List(ListCommand)),
        PrescribeCommand::COMMAND_WORD => prescribe::parse(args).map(CommandKind::Prescribe),
        UnprescribeCommand::COMMAND_WORD => unprescribe::parse(args).map(CommandKind::Unprescribe),
        _ => Err(ParseError::new(MESSAGE_UNKNOWN_COMMAND)),
    }
}
