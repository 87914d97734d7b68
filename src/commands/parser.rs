//! Tokenizer for raw input lines.

use super::CommandKind;

/// Command selected by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandName {
    /// A keyword from the command table
    Known(CommandKind),
    /// No keyword matched; holds the lower-cased line
    Unknown(String),
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: CommandName,
    /// At most two trimmed fields: the first word and the rest of the line
    pub args: Vec<String>,
}

/// Tokenize a raw input line.
///
/// Keywords are matched case-insensitively against the leading words of
/// the line, in table order, and must end on a word boundary: any character
/// other than a letter, digit or `_` ends the keyword, so `hello!` greets. The remainder is split into at most two fields on the first
/// run of whitespace, so `add John 555 0101` yields `["John", "555 0101"]`.
pub fn parse_input(line: &str) -> ParsedInput {
    let line = line.trim();

    for kind in CommandKind::ALL {
        if let Some(rest) = strip_keyword(line, kind.keyword()) {
            return ParsedInput {
                command: CommandName::Known(kind),
                args: split_args(rest),
            };
        }
    }

    ParsedInput {
        command: CommandName::Unknown(line.to_lowercase()),
        args: Vec::new(),
    }
}

/// Strip `keyword` from the front of `line`, returning what follows it.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let mut rest = line;
    for expected in keyword.split_whitespace() {
        rest = rest.trim_start();
        let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        if word.to_lowercase() != expected {
            return None;
        }
        rest = tail;
    }
    Some(rest)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn split_args(rest: &str) -> Vec<String> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Vec::new();
    }

    match rest.find(char::is_whitespace) {
        Some(end) => {
            let (first, remainder) = rest.split_at(end);
            vec![first.to_string(), remainder.trim().to_string()]
        }
        None => vec![rest.to_string()],
    }
}
