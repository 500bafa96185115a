use std::thread::sleep;

use log::info;
use rand::thread_rng;

use crate::config::*;
use crate::error::Result;
use crate::game::{Game, Status};
use crate::grid::{Cell, Grid};
use crate::input::TurnQueue;
use crate::snake::MoveResult::*;
use crate::term::TermManager;

/// How a session ended, for the caller to act on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Finished { status: Status, score: u32 },
    Quit { score: u32 },
}

/// Plays one game on the default grid in the current terminal. The terminal
/// is restored whether or not the game ran into an error.
pub fn run() -> Result<Outcome> {
    let grid = Grid::default();
    let mut term = TermManager::new(grid)?;
    term.ensure_fits()?;

    term.setup()?;
    let res = SnakeApp::new(&mut term, grid).play();
    let restored = term.restore();

    let outcome = res?;
    restored?;
    Ok(outcome)
}

struct SnakeApp<'a> {
    term: &'a mut TermManager,
    grid: Grid,
}

impl<'a> SnakeApp<'a> {
    fn new(term: &'a mut TermManager, grid: Grid) -> Self {
        SnakeApp { term, grid }
    }

    fn play(&mut self) -> Result<Outcome> {
        let mut rng = thread_rng();
        let mut game = Game::new(self.grid, &mut rng);
        let mut turns = TurnQueue::new();

        self.term.clear()?;
        self.term.draw_borders()?;
        self.print_food(game.food())?;
        self.print_snake(&game)?;
        self.print_score(game.score())?;
        self.term.flush()?;

        while !game.status().is_over() {
            sleep(TICK_DELAY);

            let quit = turns.push_events(&self.term.read_key_events_queue()?);
            if quit {
                info!("quit by player, score {}", game.score());
                return Ok(Outcome::Quit { score: game.score() });
            }

            let old_food = game.food();
            game.tick(turns.next_turn(), &mut rng);

            self.print_snake_update(&game)?;
            if game.food() != old_food {
                self.print_food(game.food())?;
            }
            self.print_score(game.score())?;
            self.term.flush()?;
        }

        self.game_over(&game)?;
        sleep(GAME_OVER_HOLD);

        Ok(Outcome::Finished { status: game.status(), score: game.score() })
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over(&mut self, game: &Game) -> Result<()> {
        let score = format!("Score: {}", game.score());

        match game.status() {
            Status::Won => self.term.show_message(&["YOU WIN", &*score], WIN_COLOR),
            _ => {
                for &cell in game.snake().body() {
                    self.term.fill_cell(cell, DEAD_SNAKE_CHAR, GAME_OVER_COLOR)?;
                }
                self.term.show_message(&["GAME OVER", &*score], GAME_OVER_COLOR)
            }
        }
    }

    fn print_food(&mut self, food: Option<Cell>) -> Result<()> {
        match food {
            Some(cell) => self.term.fill_cell(cell, FOOD_CHAR, FOOD_COLOR),
            None => Ok(()),
        }
    }

    fn print_snake(&mut self, game: &Game) -> Result<()> {
        for &cell in game.snake().body() {
            self.term.fill_cell(cell, SNAKE_CHAR, SNAKE_COLOR)?;
        }
        Ok(())
    }

    fn print_snake_update(&mut self, game: &Game) -> Result<()> {
        for mov in game.last_moves() {
            if let Moved { new_head, old_head: _, old_tail } = mov {
                self.term.fill_cell(*new_head, SNAKE_CHAR, SNAKE_COLOR)?;

                if let Some(old_tail_pos) = old_tail {
                    self.term.clear_cell(*old_tail_pos)?;
                }
            }
        }
        Ok(())
    }

    fn print_score(&mut self, score: u32) -> Result<()> {
        // Drawn over the top border, like an overlay on the playfield
        self.term.draw_text((2, 0), &format!("Score:{}", score), SCORE_COLOR)
    }
}
