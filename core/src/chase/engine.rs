use rand::Rng;
use serde::{Deserialize, Serialize};

use super::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player's move was not possible, nothing changed and no turn was played
    Rejected,
    Continue,
    /// The last robot was destroyed
    Won,
    Caught,
}

impl TurnOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Caught)
    }
}

/// A robot chase session: one player move then one robot phase per turn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChaseEngine {
    board: Board,
    state: GameState,
    turns: u32,
}

impl ChaseEngine {
    pub fn new(board: Board) -> Result<Self> {
        board.player_position()?;
        let state = if board.has_robots() {
            GameState::InProgress
        } else {
            GameState::Won
        };
        Ok(Self {
            board,
            state,
            turns: 0,
        })
    }

    pub fn generate<R: Rng + ?Sized>(config: &ChaseConfig, rng: &mut R) -> Result<Self> {
        Self::new(config.generate(rng)?)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Turns played, the one the player got caught on included
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn play_turn(&mut self, direction: Direction) -> Result<TurnOutcome> {
        self.check_not_finished()?;

        let outcome = self.board.move_player(direction)?;
        if !outcome.is_accepted() {
            log::debug!("Move {:?} rejected", direction);
            return Ok(TurnOutcome::Rejected);
        }
        self.turns += 1;

        match self.board.move_robots()? {
            RobotPhase::Caught { .. } => {
                self.state = GameState::Lost;
                log::debug!("Player caught after {} turns", self.turns);
                Ok(TurnOutcome::Caught)
            }
            RobotPhase::Survived { .. } if !self.board.has_robots() => {
                self.state = GameState::Won;
                log::debug!("Every robot destroyed after {} turns", self.turns);
                Ok(TurnOutcome::Won)
            }
            RobotPhase::Survived { .. } => Ok(TurnOutcome::Continue),
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(player: Coord2, robots: &[Coord2]) -> ChaseEngine {
        let mut board = Board::walled((10, 10));
        board[player] = Occupant::Player;
        for &robot in robots {
            board[robot] = Occupant::Robot;
        }
        ChaseEngine::new(board).unwrap()
    }

    #[test]
    fn rejected_move_does_not_count_as_turn() {
        let mut engine = engine((1, 1), &[(8, 8)]);

        assert_eq!(engine.play_turn(Direction::North).unwrap(), TurnOutcome::Rejected);
        assert_eq!(engine.turns(), 0);
        assert_eq!(engine.board()[(8, 8)], Occupant::Robot);
    }

    #[test]
    fn passing_lets_robots_close_in() {
        let mut engine = engine((1, 1), &[(1, 5)]);

        for turn in 1..=3 {
            assert_eq!(engine.play_turn(Direction::Pass).unwrap(), TurnOutcome::Continue);
            assert_eq!(engine.board()[(1, 5 - turn)], Occupant::Robot);
        }
        assert_eq!(engine.play_turn(Direction::Pass).unwrap(), TurnOutcome::Caught);
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.turns(), 4);
        assert_eq!(engine.play_turn(Direction::Pass), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn colliding_last_robots_win_the_game() {
        let mut engine = engine((5, 5), &[(1, 4), (1, 6)]);

        // both robots step onto (2, 5)
        assert_eq!(engine.play_turn(Direction::Pass).unwrap(), TurnOutcome::Won);
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.board()[(2, 5)], Occupant::Obstacle);
        assert!(TurnOutcome::Won.is_final());
    }

    #[test]
    fn luring_robot_into_obstacle() {
        let mut board = Board::walled((10, 10));
        board[(4, 4)] = Occupant::Player;
        board[(4, 7)] = Occupant::Robot;
        board[(5, 6)] = Occupant::Obstacle;
        let mut engine = ChaseEngine::new(board).unwrap();

        // with the player on row 5 the robot steps diagonally onto the obstacle
        assert_eq!(engine.play_turn(Direction::South).unwrap(), TurnOutcome::Won);
        assert_eq!(engine.board().player_position(), Ok((5, 4)));
        assert_eq!(engine.board()[(4, 7)], Occupant::Empty);
        assert_eq!(engine.board()[(5, 6)], Occupant::Obstacle);
    }

    #[test]
    fn robot_hitting_obstacle_wins_the_game() {
        let mut board = Board::walled((10, 10));
        board[(5, 5)] = Occupant::Player;
        board[(5, 7)] = Occupant::Robot;
        board[(5, 6)] = Occupant::Obstacle;
        let mut engine = ChaseEngine::new(board).unwrap();

        assert_eq!(engine.play_turn(Direction::Pass).unwrap(), TurnOutcome::Won);
        assert_eq!(engine.turns(), 1);
    }

    #[test]
    fn board_without_player_is_rejected() {
        assert_eq!(
            ChaseEngine::new(Board::walled((5, 5))),
            Err(GameError::MissingPlayer)
        );
    }

    #[test]
    fn board_without_robots_starts_won() {
        let engine = engine((3, 3), &[]);
        assert_eq!(engine.state(), GameState::Won);
    }
}
