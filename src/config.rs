use std::time::Duration;

use crossterm::style::Color;

// Playfield, in "pixels" and cells
pub const CELL_SIZE: i32 = 20;
pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 480;

// Pacing
pub const TICK_DELAY: Duration = Duration::from_millis(200);
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

// Random samples tried before food placement enumerates the free cells
pub const MAX_FOOD_SAMPLES: usize = 64;

// Direction keys held back for later ticks
pub const MAX_QUEUED_TURNS: usize = 4;

pub const LOG_FILE_NAME: &str = "grid-snake.log";

// Rendering. Every cell is CELL_COLUMNS terminal columns wide and one row high.
pub const CELL_COLUMNS: u16 = 2;
pub const SNAKE_CHAR: char = '█';
pub const FOOD_CHAR: char = '●';
pub const DEAD_SNAKE_CHAR: char = 'X';

pub const SNAKE_COLOR: Color = Color::Green;
pub const FOOD_COLOR: Color = Color::Red;
pub const SCORE_COLOR: Color = Color::Yellow;
pub const GAME_OVER_COLOR: Color = Color::Red;
pub const WIN_COLOR: Color = Color::Green;
