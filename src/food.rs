use log::{debug, warn};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::MAX_FOOD_SAMPLES;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a uniformly random cell the snake doesn't cover. Returns `None`
/// once the snake fills the whole grid. Fullness is judged by the free cells
/// left, not by the snake's length.
pub fn place_food<R: Rng + ?Sized>(snake: &Snake, grid: &Grid, rng: &mut R) -> Option<Cell> {
    for _ in 0..MAX_FOOD_SAMPLES {
        let cell = Cell::new(rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
        if !snake.occupies(cell) {
            debug!("food placed at {:?}", cell);
            return Some(cell);
        }
    }

    // A crowded grid, pick among what's left
    warn!("no free cell after {} samples, snake length {}", MAX_FOOD_SAMPLES, snake.len());
    let cell = grid.cells().filter(|&cell| !snake.occupies(cell)).choose(rng);
    debug!("food placed at {:?}", cell);
    cell
}
