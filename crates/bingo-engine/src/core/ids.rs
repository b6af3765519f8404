use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Serialize,
                Deserialize,
                derive_more::Display,
                derive_more::From,
            )]
            #[serde(transparent)]
            pub struct $name(pub u64);
        )*
    };
}

define_id! {
    /// Identifier of a bingo board.
    BoardId;
    /// Identifier of a tile.
    TileId;
    /// Identifier of a leaf goal.
    GoalId;
    /// Identifier of a goal group.
    GroupId;
    /// Identifier of a competing team.
    TeamId;
    /// Identifier of a participant.
    UserId;
}
