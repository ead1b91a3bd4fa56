use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Single coordinate axis used for rows, columns and board dimensions.
pub type Coord = u8;

/// Count type used for mine, flag, robot and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn manhattan_distance(a: Coord2, b: Coord2) -> CellCount {
    a.0.abs_diff(b.0) as CellCount + a.1.abs_diff(b.1) as CellCount
}

/// Every coordinate of a `size` grid, row by row.
pub fn iter_coords((rows, cols): Coord2) -> impl Iterator<Item = Coord2> + Clone {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

pub trait GridExt<T> {
    fn grid_size(&self) -> Coord2;

    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;

    fn count_where(&self, pred: impl FnMut(T) -> bool) -> CellCount;

    fn contains_coords(&self, coords: Coord2) -> bool {
        let size = self.grid_size();
        coords.0 < size.0 && coords.1 < size.1
    }
}

impl<T: Copy> GridExt<T> for Array2<T> {
    fn grid_size(&self) -> Coord2 {
        // grids are only built through `grid_from_rows` or from a `Coord2` size
        let dim = self.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.grid_size())
    }

    fn count_where(&self, mut pred: impl FnMut(T) -> bool) -> CellCount {
        self.iter().filter(|&&cell| pred(cell)).count() as CellCount
    }
}

/// Builds a grid from literal rows, rejecting empty boards and boards that do not fit `Coord`.
pub(crate) fn grid_from_rows<T: Copy, const C: usize>(rows: &[[T; C]]) -> Result<Array2<T>> {
    let max = usize::from(Coord::MAX);
    if rows.is_empty() || C == 0 || rows.len() > max || C > max {
        return Err(GameError::InvalidBoardShape);
    }
    let cells: Vec<T> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), C), cells).map_err(|_| GameError::InvalidBoardShape)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// The up to 8 cells surrounding `center`, clipped to the board.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sorted_neighbors(size: Coord2, center: Coord2) -> Vec<Coord2> {
        let mut neighbors: Vec<_> = NeighborIter::new(center, size).collect();
        neighbors.sort();
        neighbors
    }

    #[test]
    fn neighbor_counts_on_five_by_five() {
        let size = (5, 5);
        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(NeighborIter::new(corner, size).count(), 3, "corner {corner:?}");
        }
        for edge in [(0, 2), (2, 0), (4, 3), (1, 4)] {
            assert_eq!(NeighborIter::new(edge, size).count(), 5, "edge {edge:?}");
        }
        for inner in [(1, 1), (2, 2), (3, 3)] {
            assert_eq!(NeighborIter::new(inner, size).count(), 8, "interior {inner:?}");
        }
    }

    #[test]
    fn neighbors_exclude_center_and_stay_in_bounds() {
        assert_eq!(sorted_neighbors((5, 5), (0, 4)), vec![(0, 3), (1, 3), (1, 4)]);
        assert_eq!(
            sorted_neighbors((5, 5), (0, 1)),
            vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(
            sorted_neighbors((5, 5), (2, 2)),
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn apply_delta_rejects_out_of_bounds() {
        assert_eq!(apply_delta((0, 0), (-1, 0), (3, 3)), None);
        assert_eq!(apply_delta((2, 2), (0, 1), (3, 3)), None);
        assert_eq!(apply_delta((1, 1), (1, -1), (3, 3)), Some((2, 0)));
    }

    #[test]
    fn manhattan_distance_sums_both_axes() {
        assert_eq!(manhattan_distance((5, 5), (5, 8)), 3);
        assert_eq!(manhattan_distance((7, 2), (3, 6)), 8);
    }

    #[test]
    fn grid_from_rows_rejects_empty_boards() {
        let rows: [[u8; 0]; 2] = [[], []];
        assert_eq!(grid_from_rows(&rows), Err(GameError::InvalidBoardShape));
        let none: [[u8; 3]; 0] = [];
        assert_eq!(grid_from_rows(&none), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn iter_coords_is_row_major() {
        let coords: Vec<_> = iter_coords((2, 3)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
