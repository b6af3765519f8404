//! Per-user contribution to a team's earned experience.
//!
//! A completed tile's weight is split among the members who submitted proof for
//! it, in proportion to their share of the tile's approved submissions:
//!
//! ```text
//! share(user, tile) = approved(user, tile) / approved(tile) × weight(tile)
//! ```
//!
//! Only tiles whose team submission is approved earn anything. If a completed tile
//! has no individually approved proof (review happened at tile level only), every
//! proof on it counts instead. Raw evidence counts always include submissions of
//! every status.
//!
//! Submissions carrying a numeric value also earn value-share XP on completed
//! tiles, floored per tile:
//!
//! ```text
//! value_share(user, tile) = floor(weight(tile) × value(user, tile) / value(tile))
//! ```
//!
//! Each share also lists the goals its counted proof references.
//!
//! Users are listed by descending contribution. Ties keep the order in which users
//! first appear in the submission records.

use std::collections::HashMap;

use bingo_engine::{EventSnapshot, GoalId, Submission, TeamId, TeamTileSubmission, TileId, UserId};
use serde::Serialize;

/// One user's part in one tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileShare {
    pub tile_id: TileId,
    pub user_id: UserId,
    /// Proof uploaded by the user, any status.
    pub submissions: usize,
    /// Proof counted toward the share.
    pub counted_submissions: usize,
    pub share_xp: f64,
    pub value_share_xp: u64,
    /// Goals referenced by the counted proof, ascending.
    pub goal_ids: Vec<GoalId>,
}

/// Splits one team tile submission among its contributors.
///
/// Returns shares in order of each user's first submission. A tile that is not
/// approved yields shares with zero XP, so evidence counts stay visible.
///
/// # Example
///
/// ```
/// use bingo_engine::{Submission, SubmissionStatus, TeamId, TeamTileSubmission, TileId, UserId};
/// use bingo_evaluator::contribution::tile_shares;
///
/// let proof = |user| Submission {
///     user_id: UserId(user),
///     status: SubmissionStatus::Approved,
///     value: None,
///     goal_id: None,
/// };
/// let tile = TeamTileSubmission {
///     team_id: TeamId(1),
///     tile_id: TileId(7),
///     status: SubmissionStatus::Approved,
///     submissions: vec![proof(1), proof(1), proof(2), proof(1)],
/// };
///
/// let shares = tile_shares(&tile, 90.0);
/// assert_eq!(shares[0].share_xp, 67.5);
/// assert_eq!(shares[1].share_xp, 22.5);
/// ```
#[must_use]
pub fn tile_shares(tile: &TeamTileSubmission, weight: f64) -> Vec<TileShare> {
    let counted: Vec<&Submission> = if tile.approved_submissions().next().is_some() {
        tile.approved_submissions().collect()
    } else {
        tile.submissions.iter().collect()
    };
    let earned = tile.is_approved();

    #[expect(clippy::cast_precision_loss)]
    let counted_total = counted.len() as f64;
    let value_total = counted.iter().filter_map(|s| s.value).sum::<f64>();

    let mut shares: Vec<TileShare> = vec![];
    for submission in &tile.submissions {
        if !shares.iter().any(|s| s.user_id == submission.user_id) {
            shares.push(TileShare {
                tile_id: tile.tile_id,
                user_id: submission.user_id,
                submissions: 0,
                counted_submissions: 0,
                share_xp: 0.0,
                value_share_xp: 0,
                goal_ids: vec![],
            });
        }
    }

    for share in &mut shares {
        let user = share.user_id;
        share.submissions = tile
            .submissions
            .iter()
            .filter(|s| s.user_id == user)
            .count();
        let mine = counted.iter().filter(|s| s.user_id == user);
        share.counted_submissions = mine.clone().count();
        share.goal_ids = mine.clone().filter_map(|s| s.goal_id).collect();
        share.goal_ids.sort_unstable();
        share.goal_ids.dedup();
        if !earned || counted.is_empty() {
            continue;
        }
        #[expect(clippy::cast_precision_loss)]
        let counted_mine = share.counted_submissions as f64;
        share.share_xp = counted_mine / counted_total * weight;
        let value_mine = mine.filter_map(|s| s.value).sum::<f64>();
        if value_total > 0.0 {
            share.value_share_xp = floor_xp(weight * value_mine / value_total);
        }
    }
    shares
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_xp(xp: f64) -> u64 {
    if xp.is_finite() && xp > 0.0 {
        xp.floor() as u64
    } else {
        0
    }
}

/// One user's contribution across all tiles of a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserContribution {
    pub user_id: UserId,
    pub total_submissions: usize,
    pub approved_submissions: usize,
    /// Completed tiles the user earned a share of.
    pub tiles_contributed: usize,
    pub contribution_xp: f64,
    pub value_share_xp: u64,
    /// Share of the team's earned tile XP, in `[0, 100]`.
    pub contribution_percentage: f64,
    /// Goals the user's counted proof referenced, ascending.
    pub goal_ids: Vec<GoalId>,
}

/// Contribution breakdown for a team, best contributor first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamContributions {
    pub team_id: TeamId,
    /// Tile XP earned by the team, summed from unrounded shares.
    pub total_xp: f64,
    pub users: Vec<UserContribution>,
}

/// Scores contributions against the tile weights of an event.
#[derive(Debug, Clone)]
pub struct ContributionScorer<'a> {
    tile_weights: HashMap<TileId, f64>,
    tile_submissions: &'a [TeamTileSubmission],
}

impl<'a> ContributionScorer<'a> {
    #[must_use]
    pub fn new(snapshot: &'a EventSnapshot) -> Self {
        let tile_weights = snapshot
            .boards
            .iter()
            .flat_map(|board| &board.tiles)
            .map(|tile| (tile.id, tile.weight))
            .collect();
        Self {
            tile_weights,
            tile_submissions: &snapshot.tile_submissions,
        }
    }

    /// Builds the contribution breakdown of one team.
    ///
    /// Submissions for tiles unknown to the snapshot are weighted zero.
    #[must_use]
    pub fn score_team(&self, team_id: TeamId) -> TeamContributions {
        let mut users: Vec<UserContribution> = vec![];
        for tile in self.tile_submissions.iter().filter(|t| t.team_id == team_id) {
            let weight = self.tile_weights.get(&tile.tile_id).copied().unwrap_or(0.0);
            for share in tile_shares(tile, weight) {
                let i = if let Some(i) = users.iter().position(|u| u.user_id == share.user_id) {
                    i
                } else {
                    users.push(UserContribution {
                        user_id: share.user_id,
                        total_submissions: 0,
                        approved_submissions: 0,
                        tiles_contributed: 0,
                        contribution_xp: 0.0,
                        value_share_xp: 0,
                        contribution_percentage: 0.0,
                        goal_ids: vec![],
                    });
                    users.len() - 1
                };
                let entry = &mut users[i];
                entry.total_submissions += share.submissions;
                if tile.is_approved() {
                    entry.approved_submissions += share.counted_submissions;
                    if share.counted_submissions > 0 {
                        entry.tiles_contributed += 1;
                    }
                }
                entry.contribution_xp += share.share_xp;
                entry.value_share_xp += share.value_share_xp;
                entry.goal_ids.extend(share.goal_ids);
            }
        }

        let total_xp = users.iter().map(|u| u.contribution_xp).sum::<f64>();
        for user in &mut users {
            user.goal_ids.sort_unstable();
            user.goal_ids.dedup();
            if total_xp > 0.0 {
                user.contribution_percentage = 100.0 * user.contribution_xp / total_xp;
            }
        }
        // stable: ties keep first-appearance order
        users.sort_by(|a, b| b.contribution_xp.total_cmp(&a.contribution_xp));

        TeamContributions {
            team_id,
            total_xp,
            users,
        }
    }
}

#[cfg(test)]
mod tests {
    use bingo_engine::{
        Board, BoardId, BoardKind, PatternBonusConfig,
        SubmissionStatus::{self, Approved, Declined, Pending},
        Tile,
    };

    use super::*;

    fn proof(user: u64, status: SubmissionStatus, value: Option<f64>) -> Submission {
        Submission {
            user_id: UserId(user),
            status,
            value,
            goal_id: None,
        }
    }

    fn tts(tile: u64, status: SubmissionStatus, submissions: Vec<Submission>) -> TeamTileSubmission {
        TeamTileSubmission {
            team_id: TeamId(1),
            tile_id: TileId(tile),
            status,
            submissions,
        }
    }

    fn snapshot(tile_submissions: Vec<TeamTileSubmission>) -> EventSnapshot {
        EventSnapshot {
            boards: vec![Board {
                id: BoardId(1),
                name: String::new(),
                kind: BoardKind::Standard,
                rows: 1,
                columns: 3,
                tiles: [(1, 90.0), (2, 30.0), (3, 10.0)]
                    .into_iter()
                    .enumerate()
                    .map(|(index, (id, weight))| Tile {
                        id: TileId(id),
                        index,
                        weight,
                        name: String::new(),
                    })
                    .collect(),
                bonus: PatternBonusConfig::default(),
            }],
            tile_submissions,
            ..EventSnapshot::default()
        }
    }

    #[test]
    fn test_three_to_one_split() {
        let tile = tts(
            1,
            Approved,
            vec![
                proof(10, Approved, None),
                proof(10, Approved, None),
                proof(10, Approved, None),
                proof(20, Approved, None),
            ],
        );
        let shares = tile_shares(&tile, 90.0);
        assert_eq!(shares.len(), 2);
        assert_eq!((shares[0].user_id, shares[0].share_xp), (UserId(10), 67.5));
        assert_eq!((shares[1].user_id, shares[1].share_xp), (UserId(20), 22.5));
    }

    #[test]
    fn test_declined_proof_counts_as_evidence_only() {
        let tile = tts(
            1,
            Approved,
            vec![proof(10, Approved, None), proof(20, Declined, None)],
        );
        let shares = tile_shares(&tile, 90.0);
        assert_eq!(shares[0].share_xp, 90.0);
        assert_eq!((shares[1].submissions, shares[1].share_xp), (1, 0.0));
    }

    #[test]
    fn test_tile_level_review_counts_all_proof() {
        let tile = tts(
            1,
            Approved,
            vec![proof(10, Pending, None), proof(20, Pending, None)],
        );
        let shares = tile_shares(&tile, 30.0);
        assert_eq!(shares[0].share_xp, 15.0);
        assert_eq!(shares[1].share_xp, 15.0);
    }

    #[test]
    fn test_unapproved_tile_earns_nothing() {
        let tile = tts(1, Pending, vec![proof(10, Approved, Some(5.0))]);
        let shares = tile_shares(&tile, 90.0);
        assert_eq!(shares[0].share_xp, 0.0);
        assert_eq!(shares[0].value_share_xp, 0);
        assert_eq!(shares[0].submissions, 1);
    }

    #[test]
    fn test_value_share_is_floored() {
        let tile = tts(
            2,
            Approved,
            vec![
                proof(10, Approved, Some(1.0)),
                proof(20, Approved, Some(2.0)),
            ],
        );
        let shares = tile_shares(&tile, 10.0);
        // 10 × 1/3 = 3.33.., 10 × 2/3 = 6.66..
        assert_eq!(shares[0].value_share_xp, 3);
        assert_eq!(shares[1].value_share_xp, 6);
    }

    #[test]
    fn test_goal_references_of_counted_proof() {
        let with_goal = |user, status, goal| Submission {
            goal_id: Some(GoalId(goal)),
            ..proof(user, status, Some(1.0))
        };
        let tile = tts(
            3,
            Approved,
            vec![
                with_goal(10, Approved, 7),
                with_goal(10, Approved, 4),
                with_goal(10, Approved, 7),
                with_goal(10, Declined, 9),
                proof(20, Approved, None),
            ],
        );
        let shares = tile_shares(&tile, 10.0);
        assert_eq!(shares[0].goal_ids, [GoalId(4), GoalId(7)]);
        assert!(shares[1].goal_ids.is_empty());

        let team = ContributionScorer::new(&snapshot(vec![tile])).score_team(TeamId(1));
        assert_eq!(team.users[0].user_id, UserId(10));
        assert_eq!(team.users[0].goal_ids, [GoalId(4), GoalId(7)]);
    }

    #[test]
    fn test_team_breakdown_sorted_with_stable_ties() {
        let snapshot = snapshot(vec![
            tts(2, Approved, vec![proof(30, Approved, None), proof(40, Approved, None)]),
            tts(
                1,
                Approved,
                vec![
                    proof(10, Approved, None),
                    proof(10, Approved, None),
                    proof(10, Approved, None),
                    proof(20, Approved, None),
                ],
            ),
            tts(3, Declined, vec![proof(20, Declined, None)]),
        ]);
        let scorer = ContributionScorer::new(&snapshot);
        let team = scorer.score_team(TeamId(1));

        let order = team.users.iter().map(|u| u.user_id.0).collect::<Vec<_>>();
        assert_eq!(order, vec![10, 20, 30, 40]);
        assert_eq!(team.total_xp, 120.0);

        let user_20 = &team.users[1];
        assert_eq!(user_20.contribution_xp, 22.5);
        assert_eq!(user_20.total_submissions, 2);
        assert_eq!(user_20.approved_submissions, 1);
        assert_eq!(user_20.tiles_contributed, 1);

        // users 30 and 40 tie at 15 XP and keep first-appearance order
        assert_eq!(team.users[2].contribution_xp, 15.0);
        assert_eq!(team.users[3].contribution_xp, 15.0);
        assert_eq!(team.users[0].contribution_percentage, 56.25);
    }

    #[test]
    fn test_other_teams_are_excluded() {
        let snapshot = snapshot(vec![tts(1, Approved, vec![proof(10, Approved, None)])]);
        let team = ContributionScorer::new(&snapshot).score_team(TeamId(2));
        assert!(team.users.is_empty());
        assert_eq!(team.total_xp, 0.0);
    }
}
