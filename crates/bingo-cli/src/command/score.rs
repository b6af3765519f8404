use std::path::PathBuf;

use bingo_evaluator::scoring_pass::ScoringPass;
use chrono::Utc;

use crate::{
    schema::report::ScoreReport,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Event snapshot JSON file
    #[arg(long)]
    snapshot: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let ScoreArg { snapshot, output } = arg;

    let snapshot = util::read_snapshot_file(snapshot)?;
    let score = ScoringPass::new(&snapshot).run();

    for entry in &score.leaderboard {
        tracing::info!(
            "#{} {} ({}): {} XP ({} base + {} bonus, {} tiles)",
            entry.rank,
            entry.team_name,
            entry.team_id,
            entry.total_xp,
            entry.base_xp,
            entry.bonus_xp,
            entry.approved_tiles,
        );
    }

    let report = ScoreReport {
        generated_at: Utc::now(),
        score,
    };
    Output::save_json(&report, output.clone())
}
