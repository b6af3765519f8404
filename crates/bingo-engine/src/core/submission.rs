use serde::{Deserialize, Serialize};

use crate::{GoalId, TeamId, TileId, UserId};

/// Review state of a submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("approved")]
    Approved,
    #[display("declined")]
    Declined,
    #[display("needs review")]
    NeedsReview,
}

/// One piece of proof (typically a screenshot) uploaded by a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub user_id: UserId,
    #[serde(default)]
    pub status: SubmissionStatus,
    /// Amount of progress this proof claims, for quantitative goals.
    #[serde(default)]
    pub value: Option<f64>,
    /// Goal the value counts toward, if any.
    #[serde(default)]
    pub goal_id: Option<GoalId>,
}

/// A team's submission for one tile, with all the proof behind it.
///
/// The tile counts as completed by the team only when `status` is approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTileSubmission {
    pub team_id: TeamId,
    pub tile_id: TileId,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl TeamTileSubmission {
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }

    /// Individual submissions that were approved.
    pub fn approved_submissions(&self) -> impl Iterator<Item = &Submission> {
        self.submissions.iter().filter(|s| s.status.is_approved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_names() {
        let status: SubmissionStatus = serde_json::from_str(r#""needs_review""#).unwrap();
        assert_eq!(status, SubmissionStatus::NeedsReview);
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Approved).unwrap(),
            r#""approved""#
        );
    }

    #[test]
    fn test_approved_submissions() {
        let tts = TeamTileSubmission {
            team_id: TeamId(1),
            tile_id: TileId(2),
            status: SubmissionStatus::Approved,
            submissions: vec![
                Submission {
                    user_id: UserId(1),
                    status: SubmissionStatus::Approved,
                    value: None,
                    goal_id: None,
                },
                Submission {
                    user_id: UserId(2),
                    status: SubmissionStatus::Declined,
                    value: None,
                    goal_id: None,
                },
            ],
        };
        assert!(tts.is_approved());
        assert_eq!(tts.approved_submissions().count(), 1);
    }
}
