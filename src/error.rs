use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal is {available:?} (columns, rows), the playfield needs at least {needed:?}")]
    TerminalTooSmall { needed: (u16, u16), available: (u16, u16) },

    #[error("a snake needs at least one cell")]
    EmptySnake,
}

pub type Result<T> = std::result::Result<T, GameError>;
