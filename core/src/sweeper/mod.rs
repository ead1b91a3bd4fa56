use alloc::vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub use cell::*;
pub use engine::*;

mod cell;
mod engine;
mod generator;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweeperConfig {
    pub size: Coord2,
    /// How many random cells get a mine, repeated draws land on the same cell
    pub mine_drops: CellCount,
}

impl SweeperConfig {
    pub const fn new_unchecked(size: Coord2, mine_drops: CellCount) -> Self {
        Self { size, mine_drops }
    }

    pub fn new((rows, cols): Coord2, mine_drops: CellCount) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let mine_drops = mine_drops.clamp(1, mult(rows, cols));
        Self::new_unchecked((rows, cols), mine_drops)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for SweeperConfig {
    /// 5x5 field, one mine drop per row
    fn default() -> Self {
        Self::new_unchecked((5, 5), 5)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// A board of `size` where no cell has been touched and no mine is placed
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_rows<const C: usize>(rows: &[[Cell; C]]) -> Result<Self> {
        Ok(Self {
            cells: grid_from_rows(rows)?,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board[coords] = Cell::Mine;
        }
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        self.cells.grid_size()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.cells.contains_coords(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Mines around `coords`, flagged ones included
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self[pos].is_mine_like())
            .count() as u8
    }

    /// Mines without a flag on top
    pub fn armed_mines(&self) -> CellCount {
        self.cells.count_where(|cell| cell == Cell::Mine)
    }

    /// Flags planted over a mine
    pub fn flagged_mines(&self) -> CellCount {
        self.cells.count_where(|cell| cell == Cell::FlaggedMine)
    }

    /// All flags, correct or not
    pub fn flags(&self) -> CellCount {
        self.cells.count_where(Cell::is_flagged)
    }

    pub fn total_mines(&self) -> CellCount {
        self.armed_mines() + self.flagged_mines()
    }

    /// Every safe cell is revealed and every mine is flagged
    pub fn is_cleared(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_unresolved())
    }

    /// Steps on a cell, opening the whole zero region around it.
    ///
    /// Coordinates must be in bounds.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        match self[coords] {
            Cell::FlaggedMine | Cell::FlaggedEmpty => RevealOutcome::BlockedByFlag,
            Cell::Mine => RevealOutcome::HitMine,
            Cell::Revealed(_) => RevealOutcome::NoChange,
            Cell::Unknown => {
                let mut opened: CellCount = 0;
                let mut to_visit = vec![coords];

                while let Some(visit_coords) = to_visit.pop() {
                    // a cell can be queued by several zero neighbors
                    if self[visit_coords] != Cell::Unknown {
                        continue;
                    }

                    let count = self.adjacent_mine_count(visit_coords);
                    self[visit_coords] = Cell::Revealed(count);
                    opened += 1;
                    log::trace!("Revealed {:?}, adjacent mines: {}", visit_coords, count);

                    if count == 0 {
                        to_visit.extend(
                            self.neighbors(visit_coords)
                                .filter(|&pos| self[pos] == Cell::Unknown),
                        );
                    }
                }

                log::debug!("Reveal at {:?} opened {} cells", coords, opened);
                RevealOutcome::Revealed(opened)
            }
        }
    }

    /// Plants a flag on a cell, flags cannot be removed once planted.
    ///
    /// Coordinates must be in bounds.
    pub fn plant_flag(&mut self, coords: Coord2) -> FlagOutcome {
        match self[coords] {
            Cell::FlaggedMine | Cell::FlaggedEmpty => FlagOutcome::AlreadyFlagged,
            Cell::Mine => {
                self[coords] = Cell::FlaggedMine;
                FlagOutcome::Planted
            }
            Cell::Unknown => {
                self[coords] = Cell::FlaggedEmpty;
                FlagOutcome::Planted
            }
            Cell::Revealed(_) => FlagOutcome::AlreadyRevealed,
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Outcome of stepping on a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already revealed
    NoChange,
    /// A flag protects the cell, the player has to choose another one
    BlockedByFlag,
    /// Number of cells opened, the stepped-on cell included
    Revealed(CellCount),
    HitMine,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::HitMine)
    }
}

/// Outcome of planting a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Planted,
    AlreadyFlagged,
    AlreadyRevealed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Planted)
    }
}
