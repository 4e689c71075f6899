use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Nine cells, row-major.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// `None` for an empty cell or an index past the board.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.is_cell_empty(index));
        self.cells[index] = Some(mark);
    }

    pub fn get_available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }
}

/// Builds a board from rows like `"XOX/XOO/OX."`; anything other than X or O is empty.
#[cfg(test)]
pub(crate) fn parse_board(rows: &str) -> Board {
    let mut cells = [None; CELL_COUNT];
    let symbols = rows.chars().filter(|c| *c != '/');
    for (index, symbol) in symbols.enumerate().take(CELL_COUNT) {
        cells[index] = match symbol {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from_cells(cells)
}
