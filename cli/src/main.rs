use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gridgames_core::chase::{ChaseConfig, ChaseEngine};
use gridgames_core::sweeper::{SweeperConfig, SweeperEngine};
use rand::SeedableRng;
use rand::rngs::SmallRng;

mod minesweeper;
mod prompt;
mod render;
mod robots;

use prompt::Prompter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Game {
    /// Flag every mine of a 5x5 minefield without stepping on one
    Sweeper,
    /// Outlive the robots by making them crash into each other
    Robots,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let state = match args.game {
        Game::Sweeper => {
            let mut engine = SweeperEngine::generate(&SweeperConfig::default(), &mut rng)
                .context("could not generate the minefield")?;
            minesweeper::play(&mut engine, &mut prompter)?
        }
        Game::Robots => {
            let mut engine = ChaseEngine::generate(&ChaseConfig::default(), &mut rng)
                .context("could not generate the arena")?;
            robots::play(&mut engine, &mut prompter)?
        }
    };

    log::info!("{:?} finished: {:?}", args.game, state);
    Ok(())
}
