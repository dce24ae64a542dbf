//! Tokenizer. Whitespace is removed before scanning; positions index the
//! whitespace-free text.

use super::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    /// `( )` plain grouping.
    Round,
    /// `[ ]` repeat the whole group.
    Square,
    /// `{ }` distribute the quantifier over each move.
    Curly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier(String),
    Number(String),
    Delimiter,
    Open(Bracket),
    Close(Bracket),
    Assign,
    Inverse,
    Reverse,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte span in the whitespace-free text.
    pub start: usize,
    pub end: usize,
}

/// Strip whitespace from `text`.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Tokenize already-stripped text.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let c = bytes[i];
        i += 1;
        let kind = if c.is_ascii_alphabetic() {
            while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                i += 1;
            }
            TokenKind::Identifier(text[start..i].to_string())
        } else if c.is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            TokenKind::Number(text[start..i].to_string())
        } else {
            match c {
                b',' | b';' => TokenKind::Delimiter,
                b'(' => TokenKind::Open(Bracket::Round),
                b')' => TokenKind::Close(Bracket::Round),
                b'[' => TokenKind::Open(Bracket::Square),
                b']' => TokenKind::Close(Bracket::Square),
                b'{' => TokenKind::Open(Bracket::Curly),
                b'}' => TokenKind::Close(Bracket::Curly),
                b'=' => TokenKind::Assign,
                b'\'' => TokenKind::Inverse,
                b'~' => TokenKind::Reverse,
                _ => {
                    let ch = text[start..].chars().next().unwrap_or('?');
                    return Err(ParseError::UnexpectedChar { ch, pos: start });
                }
            }
        };
        tokens.push(Token {
            kind,
            start,
            end: i,
        });
    }
    Ok(tokens)
}
