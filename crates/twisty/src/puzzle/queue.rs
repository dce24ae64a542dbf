//! FIFO move queue, undo/redo stacks and the tick-driven animation loop.
//!
//! Each [`Puzzle::tick`] is atomic: it either advances every animating piece
//! one step toward rest, or (only when nothing animates) pops and applies
//! exactly one move. Moves and animation never interleave.

use std::collections::VecDeque;

use super::model::Puzzle;
use super::moves::{Move, MoveTag};

/// Animation pacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationCfg {
    /// Radians per second an animating piece travels.
    pub angular_rate: f64,
    /// Nominal rate of the external timer driving `tick`.
    pub ticks_per_second: f64,
}

impl Default for AnimationCfg {
    fn default() -> Self {
        Self {
            angular_rate: std::f64::consts::PI,
            ticks_per_second: 100.0,
        }
    }
}

impl AnimationCfg {
    /// Angle removed from an in-flight animation per tick.
    #[inline]
    pub fn step(&self) -> f64 {
        self.angular_rate / self.ticks_per_second
    }
}

/// Pending moves plus history.
///
/// `redo` is consumed from the front: the most recently undone move is redone first.
#[derive(Clone, Debug, Default)]
pub struct MoveQueue {
    pub pending: VecDeque<Move>,
    pub undo: Vec<Move>,
    pub redo: VecDeque<Move>,
}

impl MoveQueue {
    /// Drop pending moves and both history stacks. Applied transforms stay.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.undo.clear();
        self.redo.clear();
    }
}

impl Puzzle {
    pub fn is_animating(&self) -> bool {
        self.pieces.iter().any(|piece| piece.is_animating())
    }

    /// Queue user moves. Any `History` move starts a new timeline and clears redo.
    pub fn enqueue<I: IntoIterator<Item = Move>>(&mut self, moves: I) {
        let before = self.queue.pending.len();
        self.queue.pending.extend(moves);
        let new_history = self
            .queue
            .pending
            .range(before..)
            .any(|mv| mv.tag == Some(MoveTag::History));
        if new_history {
            self.queue.redo.clear();
        }
    }

    /// Queue the inverse of the last applied history move. `false` if none.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.queue.undo.pop() else {
            return false;
        };
        tracing::debug!(generator = mv.generator.0, "undo");
        self.queue
            .pending
            .push_back(mv.inverted().with_tag(MoveTag::Future));
        true
    }

    /// Queue the inverse of the most recently undone move. `false` if none.
    pub fn redo(&mut self) -> bool {
        let Some(mv) = self.queue.redo.pop_front() else {
            return false;
        };
        tracing::debug!(generator = mv.generator.0, "redo");
        self.queue
            .pending
            .push_back(mv.inverted().with_tag(MoveTag::History));
        true
    }

    /// One timer step. Returns whether anything changed (a redraw is due).
    pub fn tick(&mut self) -> bool {
        if self.is_animating() {
            let step = self.animation.step();
            for piece in &mut self.pieces {
                piece.animation.advance(step);
            }
            return true;
        }
        let Some(mv) = self.queue.pending.pop_front() else {
            return false;
        };
        if self.apply(&mv) {
            match mv.tag {
                Some(MoveTag::History) => self.queue.undo.push(mv),
                Some(MoveTag::Future) => self.queue.redo.push_front(mv),
                None => {}
            }
        }
        true
    }

    /// Tick until the queue is drained and nothing animates, or `max_ticks`
    /// elapse. Returns the number of ticks that changed state.
    pub fn run_until_idle(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && self.tick() {
            ticks += 1;
        }
        ticks
    }

    /// Snap all in-flight animations to rest without touching transforms.
    pub fn finish_animations(&mut self) {
        for piece in &mut self.pieces {
            piece.animation.angle = 0.0;
        }
    }
}
