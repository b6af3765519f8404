use std::path::PathBuf;

use anyhow::Context;
use bingo_balance::{
    composite::CompositeScorer,
    draft::{self, DraftConfig},
    timezone::TimezoneTable,
    weights::BalancingWeights,
};
use chrono::Utc;

use crate::{
    schema::{report::DraftReport, roster::Roster},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DraftArg {
    /// Roster JSON file
    #[arg(long)]
    roster: PathBuf,
    /// Players per team; the team count is derived from the roster size
    #[arg(long, default_value_t = 5, conflicts_with = "team_count")]
    team_size: usize,
    /// Fixed number of teams
    #[arg(long)]
    team_count: Option<usize>,
    /// Team name prefix
    #[arg(long, default_value = "Team")]
    prefix: String,
    /// Balancing weights JSON file
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DraftArg) -> anyhow::Result<()> {
    let DraftArg {
        roster,
        team_size,
        team_count,
        prefix,
        weights,
        output,
    } = arg;

    let roster: Roster = util::read_json_file("roster", roster)?;
    let weights = match weights {
        Some(path) => util::read_json_file::<BalancingWeights, _>("weights", path)?,
        None => BalancingWeights::default(),
    };
    let config = DraftConfig {
        team_count: *team_count,
        team_size: *team_size,
        name_prefix: prefix.clone(),
    };

    let scorer = CompositeScorer::new(weights, TimezoneTable::default());
    let outcome = draft::allocate(&scorer, &roster.candidates, &config)
        .with_context(|| format!("Failed to draft teams for {:?}", roster.event_name))?;

    tracing::info!(
        "drafted {} candidates onto {} teams (mean score {:.3})",
        outcome.candidates_assigned,
        outcome.teams_created,
        outcome.mean_score,
    );
    for team in &outcome.teams {
        if let Some(strength) = team.strength {
            tracing::info!(
                "{}: {} members, strength {:.3} (mean {:.3})",
                team.name,
                team.members.len(),
                strength.sum,
                strength.mean,
            );
        }
    }

    let report = DraftReport {
        generated_at: Utc::now(),
        weights,
        outcome,
    };
    Output::save_json(&report, output.clone())
}
