use clap::{Parser, Subcommand};

use self::{draft::DraftArg, goals::GoalsArg, score::ScoreArg};

mod draft;
mod goals;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score every team of an event: patterns, bonuses, leaderboard, contributions
    Score(#[clap(flatten)] ScoreArg),
    /// Show goal progress of one team
    Goals(#[clap(flatten)] GoalsArg),
    /// Draft balanced teams from a roster
    Draft(#[clap(flatten)] DraftArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Score(arg) => score::run(&arg)?,
        Mode::Goals(arg) => goals::run(&arg)?,
        Mode::Draft(arg) => draft::run(&arg)?,
    }
    Ok(())
}
