use std::io::{BufRead, Write};

use gridgames_core::GameState;
use gridgames_core::sweeper::{ActionOutcome, FlagOutcome, RevealOutcome, SweeperAction, SweeperEngine};

use crate::prompt::Prompter;
use crate::render::render_minefield;

/// Plays until the minefield is cleared, a mine goes off or the input is closed
pub fn play<R: BufRead, W: Write>(
    engine: &mut SweeperEngine,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<GameState> {
    let (rows, cols) = engine.board().size();

    while !engine.is_finished() {
        let board = engine.board();
        prompter.say(render_minefield(board))?;
        prompter.say(format!(
            "There are {} mines and {} flags",
            board.total_mines(),
            board.flags()
        ))?;

        let Some(flag) = prompter.ask_yes_no("Flag (y/n)? ")? else {
            break;
        };
        let Some(row) = prompter.ask_number("Row? ", 0..rows)? else {
            break;
        };
        let Some(col) = prompter.ask_number("Column? ", 0..cols)? else {
            break;
        };

        let action = if flag {
            SweeperAction::Flag((row, col))
        } else {
            SweeperAction::Reveal((row, col))
        };
        match engine.apply(action)? {
            ActionOutcome::Reveal(RevealOutcome::BlockedByFlag)
            | ActionOutcome::Flag(FlagOutcome::AlreadyFlagged) => {
                prompter.say("There is already a flag")?
            }
            ActionOutcome::Flag(FlagOutcome::AlreadyRevealed) => prompter.say("Already cleared")?,
            ActionOutcome::Reveal(RevealOutcome::HitMine) => prompter.say("BOOM BOOM BOOM")?,
            _ => {}
        }
    }

    if engine.state().is_won() {
        prompter.say(render_minefield(engine.board()))?;
        prompter.say("Well done!")?;
    }
    Ok(engine.state())
}
