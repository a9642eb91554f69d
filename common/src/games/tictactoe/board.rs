use std::fmt;

use super::types::Mark;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_WIDTH: usize = 3;

/// Row-major 3x3 grid. Indices outside `0..9` read as empty and ignore writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells.get(index).copied().unwrap_or(Mark::Empty)
    }

    pub fn set(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = mark;
                true
            }
            None => false,
        }
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        index < BOARD_SIZE && self.cells[index] == Mark::Empty
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE];
    }

    pub fn available_moves(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_cell_empty(i)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty_board());
        assert!(!board.is_full());
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_access_is_noop() {
        let mut board = Board::new();
        assert!(!board.set(9, Mark::X));
        assert_eq!(board.get(42), Mark::Empty);
        assert!(!board.is_cell_empty(9));
        assert!(board.is_empty_board());
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::new();
        assert!(board.set(4, Mark::O));
        assert_eq!(board.get(4), Mark::O);
        assert!(!board.is_cell_empty(4));
        assert_eq!(board.count(Mark::O), 1);

        board.clear();
        assert!(board.is_empty_board());
    }

    #[test]
    fn test_display_renders_rows() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(4, Mark::O);
        assert_eq!(board.to_string(), "X . .\n. O .\n. . .");
    }
}
