use serde::{Deserialize, Serialize};

use crate::{TeamId, UserId};

/// A competing team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub members: Vec<UserId>,
}
