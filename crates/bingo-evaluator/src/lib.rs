//! Completion and scoring for clan bingo events.
//!
//! Evaluation is layered from single goals up to a whole event:
//!
//! ```text
//! Scoring Pass (every team, in parallel)
//!     ├─ Bonus Aggregator ── Pattern Evaluator (rows, columns, diagonals, full board)
//!     ├─ Contribution Scorer (per-user share of tile XP)
//!     └─ Leaderboard
//!
//! Goal Tree (AND / OR groups per tile)
//!     └─ Goal Evaluator (single target vs. current value)
//! ```
//!
//! - [`goal_evaluator`] - completion and percentage of one quantitative goal
//! - [`goal_tree`] - recursive AND / OR group evaluation for the goals of a tile
//! - [`pattern_evaluator`] - bingo lines completed by a team on one board
//! - [`bonus_aggregator`] - base and bonus XP per board and per team, with
//!   completion percentages against the maximum possible bonus
//! - [`contribution`] - how a team's tile XP splits among its members
//! - [`leaderboard`] - teams ranked by total XP
//! - [`scoring_pass`] - all of the above over one
//!   [`EventSnapshot`](bingo_engine::EventSnapshot)
//!
//! Every evaluation is a pure function of the snapshot it reads. Missing data is
//! never an error: absent progress counts as zero, absent submissions as not
//! approved, and unconfigured bonuses as nothing to earn.
//!
//! # Rounding
//!
//! Displayed percentages and base XP round half away from zero. Value-share XP is
//! floored. Contribution shares are kept unrounded.

pub mod bonus_aggregator;
pub mod contribution;
pub mod goal_evaluator;
pub mod goal_tree;
pub mod leaderboard;
pub mod pattern_evaluator;
pub mod scoring_pass;
