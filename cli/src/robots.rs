use std::io::{BufRead, Write};

use gridgames_core::GameState;
use gridgames_core::chase::{ChaseEngine, TurnOutcome};

use crate::prompt::Prompter;
use crate::render::render_arena;

/// Plays turns until the player is caught, every robot is gone or the input is closed
pub fn play<R: BufRead, W: Write>(
    engine: &mut ChaseEngine,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<GameState> {
    while !engine.is_finished() {
        prompter.say(render_arena(engine.board()))?;

        loop {
            let Some(direction) = prompter.ask_direction()? else {
                return Ok(engine.state());
            };
            if engine.play_turn(direction)? != TurnOutcome::Rejected {
                break;
            }
            prompter.say("Sorry, you cannot make that move")?;
        }
    }

    prompter.say(render_arena(engine.board()))?;
    match engine.state() {
        GameState::Lost => {
            let turns = engine.turns();
            let plural = if turns == 1 { "" } else { "s" };
            prompter.say(format!("A robot got you after {turns} turn{plural}!"))?;
        }
        GameState::Won => prompter.say("Congratulations, you outlived every robot")?,
        GameState::InProgress => {}
    }
    Ok(engine.state())
}
