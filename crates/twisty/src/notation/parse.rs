//! Recursive-descent parser over a token slice.
//!
//! Bracket pairs are matched once up front; every later step works on
//! `[lo, hi)` index ranges into the token vector.

use super::error::ParseError;
use super::token::{Bracket, Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupModifier {
    /// `( )`: the quantifier repeats the whole group.
    Plain,
    /// `[ ]`: repeat the whole group.
    Repeat,
    /// `{ }`: repeat each move in place.
    Distribute,
}

impl From<Bracket> for GroupModifier {
    fn from(b: Bracket) -> Self {
        match b {
            Bracket::Round => GroupModifier::Plain,
            Bracket::Square => GroupModifier::Repeat,
            Bracket::Curly => GroupModifier::Distribute,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeBody {
    Identifier(String),
    Group {
        modifier: GroupModifier,
        body: Box<Node>,
    },
    Sequence(Vec<Node>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub quantifier: usize,
    pub inverse: bool,
    pub reverse: bool,
    pub body: NodeBody,
}

impl Node {
    fn plain(body: NodeBody) -> Self {
        Self {
            quantifier: 1,
            inverse: false,
            reverse: false,
            body,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Sequence(Node),
    Assignment { name: String, body: Node },
}

struct Parser<'a> {
    text: &'a str,
    tokens: &'a [Token],
    /// For each open bracket, the index of its closing partner.
    partner: Vec<Option<usize>>,
}

/// Parse a whole submission (already tokenized from `text`).
pub fn parse_statement(text: &str, tokens: &[Token]) -> Result<Statement, ParseError> {
    let parser = Parser::new(text, tokens)?;
    let assign: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind == TokenKind::Assign)
        .map(|(i, _)| i)
        .collect();
    match assign.as_slice() {
        [] => Ok(Statement::Sequence(parser.sequence(0, tokens.len())?)),
        [1] => match &tokens[0].kind {
            TokenKind::Identifier(name) => Ok(Statement::Assignment {
                name: name.clone(),
                body: parser.sequence(2, tokens.len())?,
            }),
            _ => Err(ParseError::MisplacedAssignment {
                pos: tokens[1].start,
            }),
        },
        [first, ..] => {
            let bad = assign.iter().copied().find(|&i| i != 1).unwrap_or(*first);
            Err(ParseError::MisplacedAssignment {
                pos: tokens[bad].start,
            })
        }
    }
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, tokens: &'a [Token]) -> Result<Self, ParseError> {
        let mut partner = vec![None; tokens.len()];
        let mut open: Vec<(usize, Bracket)> = Vec::new();
        for (i, t) in tokens.iter().enumerate() {
            match t.kind {
                TokenKind::Open(b) => open.push((i, b)),
                TokenKind::Close(b) => match open.pop() {
                    Some((j, ob)) if ob == b => partner[j] = Some(i),
                    Some((j, _)) => {
                        return Err(ParseError::MismatchedBracket {
                            open: tokens[j].start,
                            close: t.start,
                        })
                    }
                    None => return Err(ParseError::UnmatchedBracket { pos: t.start }),
                },
                _ => {}
            }
        }
        if let Some((j, _)) = open.pop() {
            return Err(ParseError::UnmatchedBracket {
                pos: tokens[j].start,
            });
        }
        Ok(Self {
            text,
            tokens,
            partner,
        })
    }

    fn source(&self, lo: usize, hi: usize) -> String {
        if lo >= hi {
            return String::new();
        }
        self.text[self.tokens[lo].start..self.tokens[hi - 1].end].to_string()
    }

    /// Split `[lo, hi)` at top-level delimiters. A single trailing delimiter
    /// is tolerated; any other empty segment is kept so it fails later.
    fn segments(&self, lo: usize, hi: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut i = lo;
        while i < hi {
            let mut j = i;
            while j < hi && self.tokens[j].kind != TokenKind::Delimiter {
                j = match (&self.tokens[j].kind, self.partner[j]) {
                    (TokenKind::Open(_), Some(close)) => close + 1,
                    _ => j + 1,
                };
            }
            out.push((i, j));
            i = j + 1;
        }
        out
    }

    fn sequence(&self, lo: usize, hi: usize) -> Result<Node, ParseError> {
        let segments = self.segments(lo, hi);
        match segments.as_slice() {
            [] => Err(ParseError::EmptyTerm),
            [(a, b)] => self.term(*a, *b),
            _ => {
                let children = segments
                    .iter()
                    .map(|&(a, b)| self.term(a, b))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::plain(NodeBody::Sequence(children)))
            }
        }
    }

    fn term(&self, mut lo: usize, mut hi: usize) -> Result<Node, ParseError> {
        if lo >= hi {
            return Err(ParseError::EmptyTerm);
        }
        let mut quantifier = 1;
        if let TokenKind::Number(digits) = &self.tokens[lo].kind {
            quantifier = digits.parse().map_err(|_| ParseError::BadQuantifier {
                text: digits.clone(),
            })?;
            lo += 1;
        }
        let (mut inverse, mut reverse) = (false, false);
        while hi > lo {
            match self.tokens[hi - 1].kind {
                TokenKind::Inverse => inverse = !inverse,
                TokenKind::Reverse => reverse = !reverse,
                _ => break,
            }
            hi -= 1;
        }
        if lo >= hi {
            return Err(ParseError::EmptyTerm);
        }

        let body = match &self.tokens[lo].kind {
            TokenKind::Identifier(name) if hi - lo == 1 => NodeBody::Identifier(name.clone()),
            TokenKind::Open(b) if self.partner[lo] == Some(hi - 1) => NodeBody::Group {
                modifier: (*b).into(),
                body: Box::new(self.sequence(lo + 1, hi - 1)?),
            },
            _ => {
                return Err(ParseError::CannotParse {
                    text: self.source(lo, hi),
                })
            }
        };
        Ok(Node {
            quantifier,
            inverse,
            reverse,
            body,
        })
    }
}
