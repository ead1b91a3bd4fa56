use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    Player,
    Robot,
    /// Walls, scattered rocks and the debris of robot collisions
    Obstacle,
}

impl Occupant {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_robot(self) -> bool {
        matches!(self, Self::Robot)
    }

    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }
}

impl Default for Occupant {
    fn default() -> Self {
        Self::Empty
    }
}
