//! Snake-draft team allocation.
//!
//! Candidates are ranked by composite score and dealt to teams in serpentine
//! order. The pointer walks forward to the last team, repeats it, then walks
//! back to the first:
//!
//! ```text
//! 3 teams:  1 2 3 3 2 1 1 2 3 ...
//! ```
//!
//! For descending scores this keeps cumulative team strength close to even
//! whatever the team count.

use bingo_engine::UserId;
use bingo_stats::descriptive::DescriptiveStats;
use serde::{Deserialize, Serialize};

use crate::{
    DraftError,
    composite::{CompositeScorer, PlayerScore},
    metadata::Candidate,
};

/// How many teams to create and how to name them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Fixed number of teams. When `None`, enough teams of `team_size` are created
    /// to hold every candidate.
    pub team_count: Option<usize>,
    pub team_size: usize,
    /// Teams are named `"{name_prefix} {n}"`, counting from 1.
    pub name_prefix: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            team_count: None,
            team_size: 5,
            name_prefix: "Team".to_owned(),
        }
    }
}

impl DraftConfig {
    /// Number of teams needed for `candidates` players.
    ///
    /// ```
    /// use bingo_balance::draft::DraftConfig;
    ///
    /// let config = DraftConfig { team_size: 4, ..DraftConfig::default() };
    /// assert_eq!(config.team_count_for(9).unwrap(), 3);
    /// assert_eq!(config.team_count_for(8).unwrap(), 2);
    /// ```
    pub fn team_count_for(&self, candidates: usize) -> Result<usize, DraftError> {
        match self.team_count {
            Some(0) => Err(DraftError::InvalidTeamCount),
            Some(count) => Ok(count),
            None if self.team_size == 0 => Err(DraftError::InvalidTeamSize),
            None => Ok(candidates.div_ceil(self.team_size)),
        }
    }
}

/// One drafted player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPick {
    /// 1-based position in the overall draft order.
    pub pick: usize,
    pub name: String,
    #[serde(flatten)]
    pub score: PlayerScore,
}

/// Summary of composite scores on one team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamStrength {
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl From<DescriptiveStats> for TeamStrength {
    fn from(stats: DescriptiveStats) -> Self {
        Self {
            sum: stats.sum,
            mean: stats.mean,
            min: stats.min,
            max: stats.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftedTeam {
    pub number: usize,
    pub name: String,
    /// Members in the order they were drafted.
    pub members: Vec<DraftPick>,
    /// `None` for a team that received nobody.
    pub strength: Option<TeamStrength>,
}

impl DraftedTeam {
    #[must_use]
    pub fn member_ids(&self) -> Vec<UserId> {
        self.members.iter().map(|m| m.score.user_id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftOutcome {
    pub teams_created: usize,
    pub candidates_assigned: usize,
    /// Mean composite score of every assigned candidate.
    pub mean_score: f64,
    pub teams: Vec<DraftedTeam>,
}

/// Advances a snake-draft pointer over `team_count` teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SnakeOrder {
    team_count: usize,
    current: usize,
    forward: bool,
}

impl SnakeOrder {
    fn new(team_count: usize) -> Self {
        Self {
            team_count,
            current: 0,
            forward: true,
        }
    }
}

impl Iterator for SnakeOrder {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.team_count == 0 {
            return None;
        }
        let team = self.current;
        if self.forward {
            if self.current + 1 == self.team_count {
                self.forward = false;
            } else {
                self.current += 1;
            }
        } else if self.current == 0 {
            self.forward = true;
        } else {
            self.current -= 1;
        }
        Some(team)
    }
}

/// Drafts every unassigned candidate onto new teams.
///
/// Candidates with `assigned` set are left out of both the draft and the
/// percentile pools. Equal composite scores keep their input order.
///
/// # Examples
///
/// ```
/// use bingo_balance::{
///     Candidate, PlayerMetadata,
///     composite::CompositeScorer,
///     draft::{DraftConfig, allocate},
/// };
/// use bingo_engine::UserId;
///
/// let candidates = [90.0, 80.0, 70.0, 60.0].map(|ehp| Candidate {
///     user_id: UserId(ehp as u64),
///     name: String::new(),
///     metadata: Some(PlayerMetadata { ehp: Some(ehp), ..PlayerMetadata::default() }),
///     assigned: false,
/// });
/// let config = DraftConfig { team_count: Some(2), ..DraftConfig::default() };
///
/// let outcome = allocate(&CompositeScorer::default(), &candidates, &config).unwrap();
/// assert_eq!(outcome.teams[0].member_ids(), [UserId(90), UserId(60)]);
/// assert_eq!(outcome.teams[1].member_ids(), [UserId(80), UserId(70)]);
/// ```
pub fn allocate(
    scorer: &CompositeScorer,
    candidates: &[Candidate],
    config: &DraftConfig,
) -> Result<DraftOutcome, DraftError> {
    if !scorer.weights().is_valid() {
        return Err(DraftError::InvalidWeights);
    }
    let pool = candidates.iter().filter(|c| !c.assigned).collect::<Vec<_>>();
    if pool.is_empty() {
        return Err(DraftError::NoCandidates);
    }
    let team_count = config.team_count_for(pool.len())?;
    tracing::debug!(
        candidates = pool.len(),
        skipped = candidates.len() - pool.len(),
        team_count,
        "drafting teams"
    );

    let scores = scorer.score_pool(&pool);
    let mut order = (0..pool.len()).collect::<Vec<_>>();
    // stable: ties keep input order
    order.sort_by(|&a, &b| scores[b].composite.total_cmp(&scores[a].composite));

    let mut teams = (1..=team_count)
        .map(|number| DraftedTeam {
            number,
            name: format!("{} {number}", config.name_prefix),
            members: vec![],
            strength: None,
        })
        .collect::<Vec<_>>();
    for ((pick, i), team) in order.into_iter().enumerate().zip(SnakeOrder::new(team_count)) {
        tracing::trace!(pick = pick + 1, user = %scores[i].user_id, team = team + 1, "drafted");
        teams[team].members.push(DraftPick {
            pick: pick + 1,
            name: pool[i].name.clone(),
            score: scores[i],
        });
    }
    for team in &mut teams {
        team.strength =
            DescriptiveStats::new(team.members.iter().map(|m| m.score.composite)).map(Into::into);
    }

    #[expect(clippy::cast_precision_loss)]
    let mean_score = scores.iter().map(|s| s.composite).sum::<f64>() / scores.len() as f64;
    Ok(DraftOutcome {
        teams_created: team_count,
        candidates_assigned: scores.len(),
        mean_score,
        teams,
    })
}

#[cfg(test)]
mod tests {
    use crate::metadata::PlayerMetadata;

    use super::*;

    fn candidate(user: u64, ehp: Option<f64>) -> Candidate {
        Candidate {
            user_id: UserId(user),
            name: format!("player {user}"),
            metadata: Some(PlayerMetadata {
                ehp,
                ..PlayerMetadata::default()
            }),
            assigned: false,
        }
    }

    fn ehp_only_scorer() -> CompositeScorer {
        CompositeScorer::new(
            crate::weights::BalancingWeights {
                ehp: 1.0,
                ehb: 0.0,
                timezone: 0.0,
                daily_hours: 0.0,
                skill_level: 0.0,
            },
            crate::timezone::TimezoneTable::default(),
        )
    }

    #[test]
    fn test_snake_order() {
        let order = SnakeOrder::new(3).take(9).collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2, 2, 1, 0, 0, 1, 2]);
        assert_eq!(SnakeOrder::new(1).take(3).collect::<Vec<_>>(), vec![0, 0, 0]);
        assert_eq!(SnakeOrder::new(0).next(), None);
    }

    #[test]
    fn test_four_players_two_teams() {
        let candidates = [
            candidate(1, Some(70.0)),
            candidate(2, Some(90.0)),
            candidate(3, Some(60.0)),
            candidate(4, Some(80.0)),
        ];
        let config = DraftConfig {
            team_count: Some(2),
            ..DraftConfig::default()
        };
        let outcome = allocate(&ehp_only_scorer(), &candidates, &config).unwrap();
        assert_eq!(outcome.teams_created, 2);
        assert_eq!(outcome.candidates_assigned, 4);
        assert_eq!(outcome.teams[0].name, "Team 1");
        assert_eq!(outcome.teams[0].member_ids(), [UserId(2), UserId(3)]);
        assert_eq!(outcome.teams[1].member_ids(), [UserId(4), UserId(1)]);
        assert_eq!(outcome.teams[1].members[0].pick, 2);
        assert_eq!(outcome.teams[1].members[0].name, "player 4");

        // ranks 1..=4 out of 4 are 0.25, 0.5, 0.75, 1.0
        assert_eq!(outcome.mean_score, 0.625);
        let strength = outcome.teams[0].strength.unwrap();
        assert_eq!((strength.sum, strength.min, strength.max), (1.25, 0.25, 1.0));
    }

    #[test]
    fn test_assigned_players_are_excluded_from_pool() {
        let mut candidates = vec![
            candidate(1, Some(10.0)),
            candidate(2, Some(20.0)),
            candidate(3, Some(1000.0)),
        ];
        candidates[2].assigned = true;
        let config = DraftConfig {
            team_size: 1,
            ..DraftConfig::default()
        };
        let outcome = allocate(&ehp_only_scorer(), &candidates, &config).unwrap();
        assert_eq!(outcome.candidates_assigned, 2);
        assert_eq!(outcome.teams_created, 2);
        // user 2 ranks 2/2 without the assigned outlier in the pool
        assert_eq!(outcome.teams[0].members[0].score.user_id, UserId(2));
        assert_eq!(outcome.teams[0].members[0].score.composite, 1.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = [candidate(5, None), candidate(3, None), candidate(9, None)];
        let config = DraftConfig {
            team_count: Some(3),
            ..DraftConfig::default()
        };
        let outcome = allocate(&ehp_only_scorer(), &candidates, &config).unwrap();
        let first = outcome
            .teams
            .iter()
            .map(|t| t.members[0].score.user_id)
            .collect::<Vec<_>>();
        assert_eq!(first, [UserId(5), UserId(3), UserId(9)]);
    }

    #[test]
    fn test_team_count_from_size() {
        let candidates = (1..=11).map(|u| candidate(u, None)).collect::<Vec<_>>();
        let outcome = allocate(&CompositeScorer::default(), &candidates, &DraftConfig::default())
            .unwrap();
        assert_eq!(outcome.teams_created, 3);
        let sizes = outcome.teams.iter().map(|t| t.members.len()).collect::<Vec<_>>();
        assert_eq!(sizes, [3, 4, 4]);
    }

    #[test]
    fn test_more_teams_than_players() {
        let config = DraftConfig {
            team_count: Some(3),
            ..DraftConfig::default()
        };
        let outcome =
            allocate(&CompositeScorer::default(), &[candidate(1, None)], &config).unwrap();
        assert!(outcome.teams[2].members.is_empty());
        assert!(outcome.teams[2].strength.is_none());
    }

    #[test]
    fn test_errors() {
        let scorer = CompositeScorer::default();
        let mut assigned = candidate(1, None);
        assigned.assigned = true;
        assert_eq!(
            allocate(&scorer, &[assigned], &DraftConfig::default()),
            Err(DraftError::NoCandidates)
        );
        assert_eq!(
            allocate(&scorer, &[], &DraftConfig::default()),
            Err(DraftError::NoCandidates)
        );

        let zero_size = DraftConfig {
            team_size: 0,
            ..DraftConfig::default()
        };
        assert_eq!(
            allocate(&scorer, &[candidate(1, None)], &zero_size),
            Err(DraftError::InvalidTeamSize)
        );
        let zero_count = DraftConfig {
            team_count: Some(0),
            ..DraftConfig::default()
        };
        assert_eq!(
            allocate(&scorer, &[candidate(1, None)], &zero_count),
            Err(DraftError::InvalidTeamCount)
        );
    }

    #[test]
    fn test_overflowing_weights_are_rejected() {
        let huge = 1e308;
        let scorer = CompositeScorer::new(
            crate::weights::BalancingWeights {
                ehp: huge,
                ehb: huge,
                timezone: huge,
                daily_hours: huge,
                skill_level: huge,
            },
            crate::timezone::TimezoneTable::default(),
        );
        let config = DraftConfig {
            team_count: Some(1),
            ..DraftConfig::default()
        };
        assert_eq!(
            allocate(&scorer, &[candidate(1, None), candidate(2, None)], &config),
            Err(DraftError::InvalidWeights)
        );
    }
}
