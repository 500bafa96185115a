use std::collections::VecDeque;

use crate::collision::{self, Termination};
use crate::error::{GameError, Result};
use crate::grid::{Cell, Grid};
use Heading::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right
}

impl Heading {
    pub fn opposite(self) -> Heading {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// One-cell step in this heading. Rows grow downwards, as on screen.
    pub fn unit(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell> },
    Crashed(Termination)
}

/// The body runs from the head (front) to the tail (back) and is never empty.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Heading,
}

impl Snake {
    pub fn new(start: Cell, heading: Heading) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Snake { body, heading }
    }

    pub fn from_cells<I>(cells: I, heading: Heading) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        let body: VecDeque<Cell> = cells.into_iter().map(Into::into).collect();
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }
        Ok(Snake { body, heading })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Occupied cells, head first.
    pub fn body(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Turning straight back onto the neck is ignored. Returns whether the
    /// heading changed.
    pub fn set_heading(&mut self, new_heading: Heading) -> bool {
        if new_heading == self.heading.opposite() {
            return false;
        }
        let changed = new_heading != self.heading;
        self.heading = new_heading;
        changed
    }

    /// Steps the head one cell forward. The tail is dropped unless `grow` is
    /// set. The termination check runs after the new head is in place and
    /// before the tail leaves, and a crashed snake is left as it crashed.
    pub fn advance(&mut self, grid: &Grid, grow: bool) -> MoveResult {
        let old_head = self.head();
        let new_head = old_head.offset(self.heading.unit());

        self.body.push_front(new_head);

        if let Some(reason) = collision::check_terminal(self, grid) {
            return Crashed(reason);
        }

        if grow {
            Moved { new_head, old_head, old_tail: None }
        } else {
            let old_tail = self.body.pop_back();
            Moved { new_head, old_head, old_tail }
        }
    }
}
