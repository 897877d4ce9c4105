use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid has no cells")]
    EmptyGrid,
    #[error("Cell size must be positive")]
    InvalidCellSize,
    #[error("More targets requested than the sample pool holds")]
    TooManyTargets,
}

pub type Result<T> = core::result::Result<T, GameError>;
