use super::types::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidPosition(usize),
    CellOccupied(usize),
    NoAvailableMoves,
    IllegalTurn,
    GameNotInProgress,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidPosition(position) => write!(
                f,
                "Position {} is out of bounds (expected 0..{})",
                position, CELL_COUNT
            ),
            EngineError::CellOccupied(position) => {
                write!(f, "Cell {} is already marked", position)
            }
            EngineError::NoAvailableMoves => write!(f, "No available moves"),
            EngineError::IllegalTurn => write!(f, "Not your turn"),
            EngineError::GameNotInProgress => write!(f, "Game is not in progress"),
        }
    }
}

impl std::error::Error for EngineError {}
