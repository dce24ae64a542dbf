//! Move notation: text such as `R,U,R',U'` or `2{R,U}` turned into moves.
//!
//! Grammar (whitespace is removed first):
//! - sequence: terms separated by `,` or `;`; one trailing delimiter is allowed.
//! - term: `[digits] core ['|~]*` where core is an identifier or a bracketed
//!   sequence. `'` inverts, `~` reverses; both toggle.
//! - `( )` groups, `[ ]` repeats the group, `{ }` repeats each move in place.
//! - `name = sequence` stores a sequence under `name` for later submissions.
//!
//! Identifiers resolve to a generator label, then a stored sequence, then a
//! built-in viewer axis (`R`, `UR`, `RUF`, ...) mapped through the current
//! orientation.

mod axes;
mod error;
mod parse;
mod sequence;
mod token;

pub use axes::{builtin_axis, is_builtin_axis};
pub use error::ParseError;
pub use parse::{parse_statement, GroupModifier, Node, NodeBody, Statement};
pub use sequence::{Sequencer, MAX_MOVES};
pub use token::{strip_whitespace, tokenize, Bracket, Token, TokenKind};

#[cfg(test)]
mod tests;
