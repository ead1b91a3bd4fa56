use serde::{Deserialize, Serialize};

/// A player move: one of the 8 compass directions, or passing the turn.
///
/// North is towards row 0, east towards the last column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Pass,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Self::Pass,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The 3x3 command pad, `Pass` in the middle
    pub const KEYPAD: [[Direction; 3]; 3] = [
        [Self::NorthWest, Self::North, Self::NorthEast],
        [Self::West, Self::Pass, Self::East],
        [Self::SouthWest, Self::South, Self::SouthEast],
    ];

    /// `(row, col)` change applied to the player
    pub const fn offset(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Pass => (0, 0),
            North => (-1, 0),
            NorthEast => (-1, 1),
            East => (0, 1),
            SouthEast => (1, 1),
            South => (1, 0),
            SouthWest => (1, -1),
            West => (0, -1),
            NorthWest => (-1, -1),
        }
    }

    /// Looks up the pad button at `(row, col)`, `None` outside the pad
    pub fn from_keypad(row: usize, col: usize) -> Option<Self> {
        Self::KEYPAD.get(row)?.get(col).copied()
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_matches_offsets() {
        for (row, buttons) in Direction::KEYPAD.iter().enumerate() {
            for (col, direction) in buttons.iter().enumerate() {
                let expected = (row as i8 - 1, col as i8 - 1);
                assert_eq!(direction.offset(), expected, "{direction:?}");
                assert_eq!(Direction::from_keypad(row, col), Some(*direction));
            }
        }
    }

    #[test]
    fn keypad_outside_is_none() {
        assert_eq!(Direction::from_keypad(3, 0), None);
        assert_eq!(Direction::from_keypad(0, 3), None);
    }

    #[test]
    fn offsets_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.offset(), b.offset());
            }
        }
    }
}
