use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub use direction::*;
pub use engine::*;
pub use occupant::*;

mod direction;
mod engine;
mod generator;
mod occupant;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChaseConfig {
    /// `(rows, cols)`, the outer ring included
    pub size: Coord2,
    pub robots: CellCount,
    /// Rows and columns kept between the player's starting cell and the board edge
    pub player_margin: Coord,
}

impl ChaseConfig {
    pub const fn new(size: Coord2, robots: CellCount, player_margin: Coord) -> Self {
        Self {
            size,
            robots,
            player_margin,
        }
    }

    const fn short_side(&self) -> Coord {
        if self.size.0 < self.size.1 {
            self.size.0
        } else {
            self.size.1
        }
    }

    /// Robots start strictly further than this from the player (Manhattan distance)
    pub const fn safe_distance(&self) -> CellCount {
        (self.short_side() / 3) as CellCount
    }

    /// How many random cells are tried for extra obstacles
    pub const fn obstacle_attempts(&self) -> CellCount {
        (self.short_side() / 2) as CellCount
    }
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self::new((18, 30), 15, 6)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Occupant>,
}

impl Board {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// An empty board surrounded by obstacles
    pub fn walled(size: Coord2) -> Self {
        let mut board = Self::new(size);
        let (rows, cols) = size;
        for coords in iter_coords(size) {
            let (row, col) = coords;
            if row == 0 || col == 0 || row + 1 == rows || col + 1 == cols {
                board[coords] = Occupant::Obstacle;
            }
        }
        board
    }

    pub fn from_rows<const C: usize>(rows: &[[Occupant; C]]) -> Result<Self> {
        Ok(Self {
            cells: grid_from_rows(rows)?,
        })
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

    pub fn cell(&self, coords: Coord2) -> Occupant {
        self[coords]
    }

    pub fn player_position(&self) -> Result<Coord2> {
        iter_coords(self.size())
            .find(|&coords| self[coords].is_player())
            .ok_or(GameError::MissingPlayer)
    }

    pub fn robots(&self) -> CellCount {
        self.cells.count_where(Occupant::is_robot)
    }

    pub fn has_robots(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_robot())
    }

    /// Moves the player one cell, only onto an empty cell. Passing always succeeds.
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if direction.is_pass() {
            return Ok(MoveOutcome::Passed);
        }

        let from = self.player_position()?;
        let Some(to) = apply_delta(from, direction.offset(), self.size()) else {
            return Ok(MoveOutcome::Blocked);
        };
        if !self[to].is_empty() {
            return Ok(MoveOutcome::Blocked);
        }

        self[from] = Occupant::Empty;
        self[to] = Occupant::Player;
        Ok(MoveOutcome::Moved(to))
    }

    /// Moves every robot one step towards the player, all at once.
    ///
    /// Destinations are computed from the board as it was before anyone moved. Robots sharing a
    /// destination, or running into an obstacle, are destroyed and leave an obstacle behind. The
    /// first robot reaching the player ends the phase: the robots after it in row-major order are
    /// not put back on the board.
    pub fn move_robots(&mut self) -> Result<RobotPhase> {
        let player = self.player_position()?;

        let mut moves = Vec::new();
        for coords in iter_coords(self.size()) {
            if self[coords].is_robot() {
                let target = (approach(coords.0, player.0), approach(coords.1, player.1));
                moves.push((coords, target));
                self[coords] = Occupant::Empty;
            }
        }

        let moving = moves.len() as CellCount;
        for (from, to) in moves {
            if to == player {
                log::debug!("Robot from {:?} caught the player at {:?}", from, to);
                return Ok(RobotPhase::Caught { from });
            }

            if self[to].is_empty() {
                self[to] = Occupant::Robot;
            } else {
                log::trace!("Robot from {:?} crashed into {:?} at {:?}", from, self[to], to);
                self[to] = Occupant::Obstacle;
            }
        }

        let destroyed = moving - self.robots();
        if destroyed > 0 {
            log::debug!("{} robots destroyed, {} left", destroyed, moving - destroyed);
        }
        Ok(RobotPhase::Survived { destroyed })
    }
}

/// One step of `from` towards `to` along a single axis, never overshooting.
pub const fn approach(from: Coord, to: Coord) -> Coord {
    if from < to {
        from + 1
    } else if from > to {
        from - 1
    } else {
        from
    }
}

impl Index<Coord2> for Board {
    type Output = Occupant;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Outcome of the player's part of a turn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Passed,
    Moved(Coord2),
    /// Obstacle, robot or board edge in the way; nothing changed
    Blocked,
}

impl MoveOutcome {
    /// Whether the turn can go on with the robots
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Outcome of the robots' part of a turn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RobotPhase {
    /// Robots destroyed in collisions this turn
    Survived { destroyed: CellCount },
    /// The robot that started at `from` stepped onto the player
    Caught { from: Coord2 },
}

impl RobotPhase {
    pub const fn can_continue(self) -> bool {
        matches!(self, Self::Survived { .. })
    }
}
