use std::fmt;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    SelfCollision,
    OutOfBounds,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::SelfCollision => write!(f, "ran into itself"),
            Termination::OutOfBounds => write!(f, "left the grid"),
        }
    }
}

/// Why the snake can't go on, if it can't. Only the head is checked against
/// the rest of the body, so the whole sequence is examined including a tail
/// that is about to be dropped.
pub fn check_terminal(snake: &Snake, grid: &Grid) -> Option<Termination> {
    let head = snake.head();

    if !grid.contains(head) {
        Some(Termination::OutOfBounds)
    } else if snake.body().skip(1).any(|&cell| cell == head) {
        Some(Termination::SelfCollision)
    } else {
        None
    }
}

pub fn is_terminal(snake: &Snake, grid: &Grid) -> bool {
    check_terminal(snake, grid).is_some()
}

pub fn is_on_food(snake: &Snake, food: Cell) -> bool {
    snake.head() == food
}
