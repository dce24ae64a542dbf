//! Expansion of parsed notation into puzzle moves.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::axes::{builtin_axis, is_builtin_axis};
use super::error::ParseError;
use super::parse::{parse_statement, GroupModifier, Node, NodeBody, Statement};
use super::token::{strip_whitespace, tokenize};
use crate::puzzle::{Move, MoveTag, Puzzle};

/// Upper bound on the moves a single submission may expand to.
pub const MAX_MOVES: usize = 100_000;

/// Turns notation text into moves, remembering named sequences between
/// submissions (`sexy = R,U,R',U'` then `3sexy`).
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    stored: HashMap<String, Node>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stored.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn forget_all(&mut self) {
        self.stored.clear();
    }

    /// Expand `text` into moves tagged [`MoveTag::History`].
    ///
    /// An assignment stores its body and yields no moves. Any failure rejects
    /// the whole submission and leaves stored sequences untouched.
    pub fn try_generate(&mut self, text: &str, puzzle: &Puzzle) -> Result<Vec<Move>, ParseError> {
        let stripped = strip_whitespace(text);
        let tokens = tokenize(&stripped)?;
        match parse_statement(&stripped, &tokens)? {
            Statement::Sequence(node) => {
                let mut stack = Vec::new();
                self.expand(&node, puzzle, &mut stack)
            }
            Statement::Assignment { name, body } => {
                if is_builtin_axis(&name) || puzzle.generator_by_label(&name).is_some() {
                    return Err(ParseError::ReservedName { name });
                }
                let mut stack = vec![name.clone()];
                self.expand(&body, puzzle, &mut stack)?;
                debug!(%name, "stored sequence");
                self.stored.insert(name, body);
                Ok(Vec::new())
            }
        }
    }

    /// Like [`Sequencer::try_generate`], but logs the rejection and returns an
    /// empty move list.
    pub fn generate(&mut self, text: &str, puzzle: &Puzzle) -> Vec<Move> {
        match self.try_generate(text, puzzle) {
            Ok(moves) => moves,
            Err(err) => {
                warn!(%err, input = text, "rejected move notation");
                Vec::new()
            }
        }
    }

    fn expand(
        &self,
        node: &Node,
        puzzle: &Puzzle,
        stack: &mut Vec<String>,
    ) -> Result<Vec<Move>, ParseError> {
        let (mut moves, modifier) = match &node.body {
            NodeBody::Identifier(name) => {
                if let Some(id) = puzzle.generator_by_label(name) {
                    let mv = Move::new(id, node.inverse).with_tag(MoveTag::History);
                    return repeat(vec![mv], node.quantifier);
                }
                if let Some(stored) = self.stored.get(name) {
                    if stack.iter().any(|s| s == name) {
                        return Err(ParseError::RecursiveSequence { name: name.clone() });
                    }
                    stack.push(name.clone());
                    let moves = self.expand(stored, puzzle, stack);
                    stack.pop();
                    (moves?, GroupModifier::Repeat)
                } else if let Some(axis) = builtin_axis(name) {
                    let id = puzzle.generator_for_viewer_axis(&axis).ok_or_else(|| {
                        ParseError::UnknownIdentifier { name: name.clone() }
                    })?;
                    let mv = Move::new(id, node.inverse).with_tag(MoveTag::History);
                    return repeat(vec![mv], node.quantifier);
                } else {
                    return Err(ParseError::UnknownIdentifier { name: name.clone() });
                }
            }
            NodeBody::Group { modifier, body } => (self.expand(body, puzzle, stack)?, *modifier),
            NodeBody::Sequence(children) => {
                let mut out = Vec::new();
                for child in children {
                    out.extend(self.expand(child, puzzle, stack)?);
                    check_len(out.len())?;
                }
                (out, GroupModifier::Plain)
            }
        };

        if node.reverse {
            moves.reverse();
        }
        if node.inverse {
            moves.reverse();
            for mv in &mut moves {
                mv.invert();
            }
        }
        match modifier {
            GroupModifier::Plain | GroupModifier::Repeat => repeat(moves, node.quantifier),
            GroupModifier::Distribute => {
                check_len(moves.len().saturating_mul(node.quantifier))?;
                Ok(moves
                    .into_iter()
                    .flat_map(|mv| std::iter::repeat(mv).take(node.quantifier))
                    .collect())
            }
        }
    }
}

fn check_len(len: usize) -> Result<(), ParseError> {
    if len > MAX_MOVES {
        return Err(ParseError::TooManyMoves { limit: MAX_MOVES });
    }
    Ok(())
}

fn repeat(moves: Vec<Move>, times: usize) -> Result<Vec<Move>, ParseError> {
    check_len(moves.len().saturating_mul(times))?;
    Ok(moves.repeat(times))
}
