//! Board module - the display grid
//!
//! The board is a 7x12 grid where each cell is empty or shows a glyph. It is a
//! pure projection of the game state, rebuilt whenever the view needs it, and
//! never mutated by game logic.
//! Uses a flat array for better cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..6 (left to right), y ranges 0..11 (top to bottom)

use crate::types::{Cell, Glyph, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The display grid - 7 columns x 12 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Glyph at `pos`, `None` when empty or out of bounds
    pub fn glyph_at(&self, pos: Position) -> Option<Glyph> {
        self.get(pos.x, pos.y).flatten()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds (the board is left unchanged)
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Write a glyph at `pos`, overwriting whatever was there
    pub fn put(&mut self, pos: Position, glyph: Glyph) -> bool {
        self.set(pos.x, pos.y, Some(glyph))
    }

    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_WIDTH as usize)
    }

    /// Render as plain text lines, `.` for empty cells (debugging and tests)
    pub fn to_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|g| g.as_char()).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(6, 0), Some(6));
        assert_eq!(Board::index(0, 1), Some(7));
        assert_eq!(Board::index(6, 11), Some(83));
        assert_eq!(Board::index(7, 0), None);
        assert_eq!(Board::index(0, 12), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(Glyph::Book));
        board.set(5, 10, Some(Glyph::Letter('K')));

        assert_eq!(board.get(0, 0), Some(Some(Glyph::Book)));
        assert_eq!(board.get(5, 10), Some(Some(Glyph::Letter('K'))));

        assert_eq!(board.cells[0], Some(Glyph::Book));
        assert_eq!(board.cells[10 * 7 + 5], Some(Glyph::Letter('K')));
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut board = Board::new();
        assert!(!board.put(Position::new(7, 0), Glyph::Fire));
        assert!(!board.put(Position::new(0, 200), Glyph::Fire));
        assert!(board.cells().iter().all(|c| c.is_none()));
        assert_eq!(board.glyph_at(Position::new(9, 9)), None);
    }

    #[test]
    fn test_last_writer_wins() {
        let mut board = Board::new();
        let pos = Position::new(2, 3);
        board.put(pos, Glyph::Book);
        board.put(pos, Glyph::Letter('A'));
        assert_eq!(board.glyph_at(pos), Some(Glyph::Letter('A')));
    }

    #[test]
    fn test_to_lines() {
        let mut board = Board::new();
        board.put(Position::new(1, 0), Glyph::Target('Ä'));
        let lines = board.to_lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], ".Ä.....");
        assert_eq!(lines[11], ".......");

        board.clear();
        assert!(!board.is_occupied(1, 0));
    }
}
