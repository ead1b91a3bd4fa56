use rand::Rng;
use serde::{Deserialize, Serialize};

use super::*;

/// One validated player action
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweeperAction {
    Reveal(Coord2),
    Flag(Coord2),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
        }
    }
}

/// A minesweeper session from the first action to a win or an explosion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweeperEngine {
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
    actions: u32,
}

impl SweeperEngine {
    pub fn new(board: Board) -> Self {
        let mut engine = Self {
            board,
            state: Default::default(),
            triggered_mine: None,
            actions: 0,
        };
        engine.check_cleared();
        engine
    }

    pub fn generate<R: Rng + ?Sized>(config: &SweeperConfig, rng: &mut R) -> Result<Self> {
        Ok(Self::new(config.generate(rng)?))
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

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Accepted actions so far, no-ops included
    pub fn actions(&self) -> u32 {
        self.actions
    }

    pub fn apply(&mut self, action: SweeperAction) -> Result<ActionOutcome> {
        match action {
            SweeperAction::Reveal(coords) => self.reveal(coords).map(ActionOutcome::Reveal),
            SweeperAction::Flag(coords) => self.toggle_flag(coords).map(ActionOutcome::Flag),
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let outcome = self.board.reveal(coords);
        self.actions += 1;
        if outcome == RevealOutcome::HitMine {
            log::debug!("Mine triggered at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.end_game(false);
        } else {
            self.check_cleared();
        }
        Ok(outcome)
    }

    /// Plants a flag, planted flags stay until the end of the game
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let outcome = self.board.plant_flag(coords);
        self.actions += 1;
        self.check_cleared();
        Ok(outcome)
    }

    fn check_cleared(&mut self) {
        if self.board.is_cleared() {
            self.end_game(true);
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("Game ended after {} actions: {:?}", self.actions, self.state);
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

    fn engine(size: Coord2, mines: &[Coord2]) -> SweeperEngine {
        SweeperEngine::new(Board::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn reveal_hits_mine_and_sets_triggered_cell() {
        let mut engine = engine((2, 2), &[(0, 0)]);

        let outcome = engine.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.triggered_mine(), Some((0, 0)));
        assert_eq!(engine.reveal((1, 1)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn revealing_everything_is_not_enough_without_flags() {
        let mut engine = engine((3, 3), &[(2, 2)]);

        assert_eq!(engine.reveal((0, 0)).unwrap(), RevealOutcome::Revealed(8));
        assert_eq!(engine.state(), GameState::InProgress);

        assert_eq!(engine.toggle_flag((2, 2)).unwrap(), FlagOutcome::Planted);
        assert_eq!(engine.state(), GameState::Won);
        assert!(engine.is_finished());
    }

    #[test]
    fn wrong_flag_keeps_game_open() {
        let mut engine = engine((1, 3), &[(0, 0)]);

        engine.toggle_flag((0, 0)).unwrap();
        engine.toggle_flag((0, 2)).unwrap();
        engine.reveal((0, 1)).unwrap();

        // (0, 2) is flagged but safe, flags cannot be taken back
        assert_eq!(engine.board()[(0, 2)], Cell::FlaggedEmpty);
        assert_eq!(engine.state(), GameState::Won);
    }

    #[test]
    fn flagged_cells_block_reveals() {
        let mut engine = engine((2, 2), &[(1, 1)]);

        engine.toggle_flag((1, 1)).unwrap();
        assert_eq!(engine.reveal((1, 1)).unwrap(), RevealOutcome::BlockedByFlag);
        assert_eq!(engine.state(), GameState::InProgress);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut engine = engine((5, 5), &[]);

        assert_eq!(engine.reveal((5, 0)), Err(GameError::InvalidCoords));
        assert_eq!(engine.toggle_flag((0, 9)), Err(GameError::InvalidCoords));
        assert_eq!(engine.actions(), 0);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut engine = engine((2, 1), &[(0, 0)]);

        let outcome = engine.apply(SweeperAction::Reveal((1, 0))).unwrap();
        assert_eq!(outcome, ActionOutcome::Reveal(RevealOutcome::Revealed(1)));
        assert!(outcome.has_update());

        let outcome = engine.apply(SweeperAction::Flag((1, 0))).unwrap();
        assert_eq!(outcome, ActionOutcome::Flag(FlagOutcome::AlreadyRevealed));
        assert!(!outcome.has_update());

        engine.apply(SweeperAction::Flag((0, 0))).unwrap();
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.actions(), 3);
    }

    #[test]
    fn scripted_five_by_five_game_is_won() {
        let mines = [(0, 0), (0, 4), (4, 0), (4, 4)];
        let mut engine = engine((5, 5), &mines);

        // the middle has no mine around it and opens everything but the corners
        let outcome = engine.reveal((2, 2)).unwrap();
        assert_eq!(outcome, RevealOutcome::Revealed(21));
        assert_eq!(engine.board()[(1, 1)], Cell::Revealed(1));
        assert_eq!(engine.board()[(2, 0)], Cell::Revealed(0));
        assert_eq!(engine.board()[(0, 1)], Cell::Revealed(1));

        for (i, &mine) in mines.iter().enumerate() {
            assert_eq!(engine.state(), GameState::InProgress);
            assert_eq!(engine.toggle_flag(mine).unwrap(), FlagOutcome::Planted);
            assert_eq!(engine.board().flagged_mines(), i as CellCount + 1);
            assert_eq!(engine.board().total_mines(), 4);
        }
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.toggle_flag((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn already_cleared_board_starts_won() {
        let board = Board::from_rows(&[[Cell::FlaggedMine, Cell::Revealed(1)]]).unwrap();
        assert_eq!(SweeperEngine::new(board).state(), GameState::Won);
    }
}
