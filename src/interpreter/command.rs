use super::error::CommandError;
use arrayvec::ArrayVec;
use std::num::IntErrorKind;

/// How a key token that is not a valid `i64` is handled
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyMode {
    /// Garbage becomes key 0 and out-of-range numbers saturate
    Lenient,
    /// The whole command is rejected
    Strict,
}

impl Default for KeyMode {
    fn default() -> Self {
        KeyMode::Lenient
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { key: i64, value: String },
    Find { key: i64 },
    Delete { key: i64 },
    InOrder,
}

/// The first tokens of a line. No command takes more than three
struct Tokens<'a> {
    words: ArrayVec<[&'a str; 3]>,
    overflow: bool,
}

impl<'a> Tokens<'a> {
    fn split(line: &'a str) -> Self {
        let mut words = ArrayVec::new();
        let mut overflow = false;
        for word in line.split_whitespace() {
            if words.try_push(word).is_err() {
                overflow = true;
                break;
            }
        }
        Tokens { words, overflow }
    }

    /// Return the tokens only if there are exactly `count` of them
    fn exactly(&self, count: usize) -> Option<&[&'a str]> {
        if !self.overflow && self.words.len() == count {
            Some(&self.words[..])
        } else {
            None
        }
    }
}

impl Command {
    /// Parse one input line.
    /// Return `Ok(None)` for lines that are silently ignored: blank lines,
    /// unknown command names and wrong argument counts
    pub fn parse(line: &str, mode: KeyMode) -> Result<Option<Command>, CommandError> {
        let tokens = Tokens::split(line);
        let name = match tokens.words.first() {
            Some(name) => *name,
            None => return Ok(None),
        };

        let command = match name {
            "Insert" => match tokens.exactly(3) {
                Some(args) => Command::Insert {
                    key: parse_key(args[1], mode)?,
                    value: args[2].to_string(),
                },
                None => return Ok(None),
            },
            "Find" => match tokens.exactly(2) {
                Some(args) => Command::Find {
                    key: parse_key(args[1], mode)?,
                },
                None => return Ok(None),
            },
            "Delete" => match tokens.exactly(2) {
                Some(args) => Command::Delete {
                    key: parse_key(args[1], mode)?,
                },
                None => return Ok(None),
            },
            "InOrder" => Command::InOrder,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn parse_key(token: &str, mode: KeyMode) -> Result<i64, CommandError> {
    match token.parse::<i64>() {
        Ok(key) => Ok(key),
        Err(source) => match mode {
            KeyMode::Strict => Err(CommandError::InvalidKey {
                token: token.to_string(),
                source,
            }),
            KeyMode::Lenient => Ok(match source.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 0,
            }),
        },
    }
}
