use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be at least 3x3")]
    InvalidSize,
    #[error("Invalid cell kind {0:?}")]
    InvalidCellKind(char),
    #[error("Invalid direction {0:?}")]
    InvalidDirection(char),
    #[error("Only snake segments carry a facing direction, and they must have one")]
    InvalidFacing,
    #[error("Game already ended, no new moves are accepted")]
    InvalidState,
}

pub type Result<T> = core::result::Result<T, GameError>;
