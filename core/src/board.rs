use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Fixed grid of cells. Every cell stores the coordinates of the slot that holds it.
///
/// Cloning a board yields an independent copy, which is what [`SnakeEngine::snapshot_board`]
/// hands out to readers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: Coord2) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            Cell::empty((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.get(coords).copied().ok_or(GameError::InvalidCoords)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        self.cells
            .get_mut(coords.to_nd_index())
            .ok_or(GameError::InvalidCoords)
    }

    /// Stores `cell` at its own coordinates.
    pub(crate) fn put(&mut self, cell: Cell) -> Result<()> {
        *self.cell_mut(cell.coords())? = cell;
        Ok(())
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn count(&self, kind: CellKind) -> CellCount {
        self.iter().filter(|cell| cell.kind() == kind).count() as CellCount
    }

    pub fn empty_coords(&self) -> Vec<Coord2> {
        self.iter()
            .filter(|cell| cell.is_empty())
            .map(Cell::coords)
            .collect()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_and_coordinates_match_slots() {
        let board = Board::new((3, 5));

        assert_eq!(board.size(), (3, 5));
        assert_eq!(board.count(CellKind::Empty), 15);
        for row in 0..3 {
            for col in 0..5 {
                assert_eq!(board[(row, col)].coords(), (row, col));
            }
        }
    }

    #[test]
    fn access_is_bounds_checked() {
        let mut board = Board::new((3, 3));

        assert!(board.get((3, 0)).is_none());
        assert_eq!(board.cell_at((0, 3)), Err(GameError::InvalidCoords));
        assert_eq!(board.put(Cell::point((5, 5))), Err(GameError::InvalidCoords));
        assert!(board.contains((2, 2)));
        assert!(!board.contains((2, 3)));
    }

    #[test]
    fn clone_is_detached_from_the_source_board() {
        let mut board = Board::new((3, 3));
        let snapshot = board.clone();

        board.put(Cell::point((1, 1))).unwrap();

        assert!(board[(1, 1)].is_point());
        assert!(snapshot[(1, 1)].is_empty());
    }

    #[test]
    fn empty_coords_skip_occupied_cells() {
        let mut board = Board::new((3, 3));
        board.put(Cell::point((0, 0))).unwrap();
        board.put(Cell::head((1, 1), Direction::North)).unwrap();

        let empty = board.empty_coords();

        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&(0, 0)));
        assert!(!empty.contains(&(1, 1)));
    }
}
