use std::fmt;
use std::str::FromStr;

use super::error::EngineError;
use super::types::{BOARD_SIDE, CELL_COUNT, Mark, Player};

/// A 3x3 grid stored row-major. Plain value: copies never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Result<Mark, EngineError> {
        self.cells
            .get(position)
            .copied()
            .ok_or(EngineError::InvalidPosition(position))
    }

    pub fn is_occupied(&self, position: usize) -> Result<bool, EngineError> {
        Ok(!self.get(position)?.is_empty())
    }

    pub fn set(&mut self, position: usize, player: Player) -> Result<(), EngineError> {
        if self.is_occupied(position)? {
            return Err(EngineError::CellOccupied(position));
        }
        self.cells[position] = player.into();
        Ok(())
    }

    pub fn with_mark(&self, position: usize, player: Player) -> Result<Board, EngineError> {
        let mut next = *self;
        next.set(position, player)?;
        Ok(next)
    }

    /// Trial placement for the search; `position` must be a known empty cell.
    pub(crate) fn put(&mut self, position: usize, player: Player) {
        self.cells[position] = player.into();
    }

    pub(crate) fn clear(&mut self, position: usize) {
        self.cells[position] = Mark::Empty;
    }

    pub fn available_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                let symbol = match cell {
                    Mark::Empty => '.',
                    Mark::X => 'X',
                    Mark::O => 'O',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells written as `X`, `O` or `.`; whitespace is ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = match ch {
                'x' | 'X' => Mark::X,
                'o' | 'O' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                other => return Err(format!("Unexpected board character: {}", other)),
            };
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!("Board needs {} cells, got {}", CELL_COUNT, count));
        }
        Ok(Self::from_cells(cells))
    }
}
