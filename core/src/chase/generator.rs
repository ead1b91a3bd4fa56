use rand::Rng;

use super::*;

impl BoardGenerator for ChaseConfig {
    type Board = Board;

    /// Walls the board in, then places the player away from the edges, the robots away from the
    /// player and finally a few scattered obstacles.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board> {
        let (rows, cols) = self.size;
        let margin = self.player_margin.max(1);
        if u16::from(rows) <= 2 * u16::from(margin) || u16::from(cols) <= 2 * u16::from(margin) {
            log::warn!("No room for the player in {:?} with margin {}", self.size, margin);
            return Err(GameError::BoardTooSmall);
        }

        let mut board = Board::walled(self.size);
        let player = (
            rng.random_range(margin..rows - margin),
            rng.random_range(margin..cols - margin),
        );
        board[player] = Occupant::Player;

        let is_interior = |(row, col): Coord2| row > 0 && col > 0 && row < rows - 1 && col < cols - 1;
        let distance = self.safe_distance();
        let far_enough = iter_coords(self.size)
            .filter(|&pos| is_interior(pos) && manhattan_distance(pos, player) > distance)
            .count();
        if far_enough < usize::from(self.robots) {
            log::warn!(
                "Only {} cells far enough from the player for {} robots",
                far_enough,
                self.robots
            );
            return Err(GameError::BoardTooSmall);
        }

        let mut robots = 0;
        while robots < self.robots {
            let coords = (rng.random_range(1..rows - 1), rng.random_range(1..cols - 1));
            if manhattan_distance(coords, player) > distance && !board[coords].is_robot() {
                board[coords] = Occupant::Robot;
                robots += 1;
            }
        }

        let mut obstacles = 0;
        for _ in 0..self.obstacle_attempts() {
            let coords = (rng.random_range(1..rows - 1), rng.random_range(1..cols - 1));
            if board[coords].is_empty() {
                board[coords] = Occupant::Obstacle;
                obstacles += 1;
            }
        }

        log::debug!(
            "Generated {:?} arena, player at {:?}, {} robots, {} obstacles",
            self.size,
            player,
            robots,
            obstacles
        );
        Ok(board)
    }
}
