use bingo_balance::Candidate;
use serde::{Deserialize, Serialize};

/// Sign-ups exported for a draft.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub event_name: String,
    pub candidates: Vec<Candidate>,
}
