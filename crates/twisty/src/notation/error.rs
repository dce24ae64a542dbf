//! Notation errors. Any error rejects the whole submission.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedChar { ch: char, pos: usize },
    UnmatchedBracket { pos: usize },
    MismatchedBracket { open: usize, close: usize },
    /// A term with no tokens (`R,,U`, `()`, or empty input).
    EmptyTerm,
    CannotParse { text: String },
    BadQuantifier { text: String },
    UnknownIdentifier { name: String },
    /// Assignment to a generator label or built-in axis notation.
    ReservedName { name: String },
    MisplacedAssignment { pos: usize },
    RecursiveSequence { name: String },
    TooManyMoves { limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedChar { ch, pos } => {
                write!(f, "unexpected character '{ch}' at {pos}")
            }
            ParseError::UnmatchedBracket { pos } => write!(f, "unmatched bracket at {pos}"),
            ParseError::MismatchedBracket { open, close } => write!(
                f,
                "bracket opened at {open} is closed by a different kind at {close}"
            ),
            ParseError::EmptyTerm => write!(f, "encountered an empty term"),
            ParseError::CannotParse { text } => write!(f, "can't parse sub-string: {text}"),
            ParseError::BadQuantifier { text } => write!(f, "bad quantifier: {text}"),
            ParseError::UnknownIdentifier { name } => write!(f, "unknown identifier: {name}"),
            ParseError::ReservedName { name } => {
                write!(f, "cannot assign to reserved name: {name}")
            }
            ParseError::MisplacedAssignment { pos } => {
                write!(f, "'=' at {pos} must follow a single leading name")
            }
            ParseError::RecursiveSequence { name } => {
                write!(f, "stored sequence {name} refers to itself")
            }
            ParseError::TooManyMoves { limit } => {
                write!(f, "notation expands to more than {limit} moves")
            }
        }
    }
}

impl std::error::Error for ParseError {}
