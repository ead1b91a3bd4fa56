use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape is empty, ragged or too large")]
    InvalidBoardShape,
    #[error("Board is too small for the requested layout")]
    BoardTooSmall,
    #[error("No player on the board")]
    MissingPlayer,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
