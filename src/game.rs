use log::{debug, info};
use rand::Rng;

use crate::collision::{is_on_food, Termination};
use crate::food::place_food;
use crate::grid::{Cell, Grid};
use crate::snake::{Heading::{self, *}, MoveResult::{self, *}, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver(Termination),
    /// The snake covers the whole grid and there's nowhere left for food.
    Won,
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}

pub struct Game {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    status: Status,
    last_moves: Vec<MoveResult>,
}

impl Game {
    /// A single-cell snake in the middle of the grid heading right, with the
    /// first food already placed.
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let snake = Snake::new(grid.center(), Right);
        let food = place_food(&snake, &grid, rng);
        let status = if food.is_some() { Status::Playing } else { Status::Won };

        info!("new game on a {}x{} grid, snake at {:?}", grid.width(), grid.height(), snake.head());
        Game { grid, snake, food, score: 0, status, last_moves: vec![] }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Moves made during the latest tick, in order. Two when food was eaten.
    pub fn last_moves(&self) -> &[MoveResult] {
        &self.last_moves
    }

    /// Puts the food somewhere specific. Meant for hosts and tests; the cell
    /// is taken as given.
    pub fn set_food(&mut self, cell: Cell) {
        self.food = Some(cell);
    }

    /// One step of the game: move, take the tick's heading for the next move,
    /// then eat. Eating moves the snake a second time in growth mode, so the
    /// head covers two cells on that tick. Finished games don't change.
    pub fn tick<R: Rng + ?Sized>(&mut self, heading: Option<Heading>, rng: &mut R) -> Status {
        if self.status.is_over() {
            return self.status;
        }

        self.last_moves.clear();

        if let Err(reason) = self.step(false) {
            return self.finish(Status::GameOver(reason));
        }

        if let Some(heading) = heading {
            let before = self.snake.heading();
            if self.snake.set_heading(heading) {
                debug!("heading {:?} -> {:?}", before, heading);
            }
        }

        let ate = match self.food {
            Some(food) => is_on_food(&self.snake, food),
            None => false,
        };

        if ate {
            self.score += 1;
            debug!("ate food at {:?}, score {}", self.snake.head(), self.score);

            if let Err(reason) = self.step(true) {
                return self.finish(Status::GameOver(reason));
            }

            self.food = place_food(&self.snake, &self.grid, rng);
            if self.food.is_none() {
                return self.finish(Status::Won);
            }
        }

        self.status
    }

    ///////////////////////////////////////////////////////////////////////////

    fn step(&mut self, grow: bool) -> Result<(), Termination> {
        let res = self.snake.advance(&self.grid, grow);
        self.last_moves.push(res);

        match res {
            Crashed(reason) => Err(reason),
            Moved { .. } => Ok(()),
        }
    }

    fn finish(&mut self, status: Status) -> Status {
        match status {
            Status::GameOver(reason) => info!("game over, snake {}, score {}", reason, self.score),
            Status::Won => info!("grid filled, score {}", self.score),
            Status::Playing => {}
        }

        self.status = status;
        status
    }
}
