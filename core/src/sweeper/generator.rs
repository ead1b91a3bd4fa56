use rand::Rng;

use super::*;

impl BoardGenerator for SweeperConfig {
    type Board = Board;

    /// Drops `mine_drops` mines on uniformly random cells.
    ///
    /// Two drops can land on the same cell, the field then simply holds one mine less.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::BoardTooSmall);
        }

        let mut board = Board::new(self.size);
        for _ in 0..self.mine_drops {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            board[coords] = Cell::Mine;
        }

        let placed = board.armed_mines();
        if placed != self.mine_drops {
            log::debug!(
                "Overlapping drops, placed {} mines out of {} drops",
                placed,
                self.mine_drops
            );
        }
        Ok(board)
    }
}
