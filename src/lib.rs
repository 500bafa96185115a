//! A snake on a fixed grid: it moves a cell per tick, grows when it eats and
//! dies when it leaves the grid or runs into itself.
//!
//! The game core (`grid`, `snake`, `collision`, `food`, `game`) has no
//! terminal dependency beyond key codes in `input`; `term` and `app` host it
//! in a crossterm terminal.

pub mod app;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;
pub mod term;

pub use error::{GameError, Result};
pub use game::{Game, Status};
pub use grid::{Cell, Grid};
pub use snake::{Heading, Snake};
