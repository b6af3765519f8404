//! Team standings by total experience.

use bingo_engine::{Team, TeamId};
use serde::Serialize;

use crate::bonus_aggregator::TeamBonusTotals;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based. Teams with equal totals share a rank and the next rank is skipped
    /// (`1, 2, 2, 4`).
    pub rank: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub approved_tiles: usize,
    pub base_xp: u64,
    pub bonus_xp: u64,
    pub total_xp: u64,
}

/// Orders teams by total XP, highest first.
///
/// Equal totals keep the order of `totals`. Teams without a record in `teams` get
/// an empty name.
#[must_use]
pub fn rank_teams(teams: &[Team], totals: &[TeamBonusTotals]) -> Vec<LeaderboardEntry> {
    let mut entries = totals
        .iter()
        .map(|t| LeaderboardEntry {
            rank: 0,
            team_id: t.team_id,
            team_name: teams
                .iter()
                .find(|team| team.id == t.team_id)
                .map(|team| team.name.clone())
                .unwrap_or_default(),
            approved_tiles: t.approved_tiles,
            base_xp: t.base_xp,
            bonus_xp: t.bonus_xp,
            total_xp: t.total_xp(),
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.total_xp.cmp(&a.total_xp));

    let mut previous = None;
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = match previous {
            Some((total, rank)) if total == entry.total_xp => rank,
            _ => i + 1,
        };
        previous = Some((entry.total_xp, entry.rank));
    }
    entries
}
