use serde::{Deserialize, Serialize};

/// State of a single minefield cell.
///
/// Mines and flags live in the same grid as the revealed counts, a cell is always in exactly one of these states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Not revealed yet, no mine underneath
    Unknown,
    /// Not revealed yet, armed mine underneath
    Mine,
    /// Flag planted over a mine
    FlaggedMine,
    /// Flag planted over a safe cell
    FlaggedEmpty,
    /// Revealed safe cell with the number of mines among its neighbors
    Revealed(u8),
}

impl Cell {
    /// Whether a mine lies under this cell, flagged or not
    pub const fn is_mine_like(self) -> bool {
        matches!(self, Self::Mine | Self::FlaggedMine)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::FlaggedMine | Self::FlaggedEmpty)
    }

    /// Cells that still block a win: hidden safe cells and unflagged mines
    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Unknown | Self::Mine)
    }

    pub const fn revealed_count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Unknown
    }
}
