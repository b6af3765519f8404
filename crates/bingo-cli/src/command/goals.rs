use std::path::PathBuf;

use anyhow::bail;
use bingo_engine::{TeamId, TileId};
use bingo_evaluator::scoring_pass::ScoringPass;
use chrono::Utc;

use crate::{
    schema::report::GoalsReport,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GoalsArg {
    /// Event snapshot JSON file
    #[arg(long)]
    snapshot: PathBuf,
    /// Team to report on
    #[arg(long)]
    team: u64,
    /// Only report this tile
    #[arg(long)]
    tile: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GoalsArg) -> anyhow::Result<()> {
    let GoalsArg {
        snapshot,
        team,
        tile,
        output,
    } = arg;
    let team = TeamId(*team);
    let tile = tile.map(TileId);

    let snapshot = util::read_snapshot_file(snapshot)?;
    if !snapshot.teams.iter().any(|t| t.id == team) {
        tracing::warn!(%team, "team not listed in snapshot");
    }
    if let Some(tile) = tile.filter(|&tile| snapshot.tile(tile).is_none()) {
        bail!("tile {tile} not found in snapshot");
    }

    let tiles = ScoringPass::new(&snapshot).goal_reports(team, tile);
    let complete = tiles.iter().filter(|t| t.all_complete).count();
    tracing::info!("{complete} of {} tiles with goals complete", tiles.len());

    let report = GoalsReport {
        generated_at: Utc::now(),
        event_name: snapshot.name.clone(),
        team_id: team,
        tiles,
    };
    Output::save_json(&report, output.clone())
}
