//! Balanced team creation for clan bingo events.
//!
//! Players describe themselves with optional metadata (efficient hours played and
//! bossed, timezone, daily availability, skill tier). This crate turns that into a
//! single comparable score and drafts balanced teams from it:
//!
//! ```text
//! Candidates ──► Composite Scorer ──► ranked list ──► Snake Draft ──► teams
//!                  ▲          ▲
//!        BalancingWeights   TimezoneTable
//! ```
//!
//! - [`composite`] - per-attribute normalization and the weighted composite score
//! - [`draft`] - serpentine allocation of ranked candidates to teams
//! - [`weights`] - attribute weights, loadable from JSON
//! - [`timezone`] - timezone activity-overlap table
//!
//! Missing data never fails a draft. It scores neutral (`0.5`). The only errors
//! are [`DraftError`]s for drafts that cannot be carried out.

pub use self::metadata::*;

pub mod composite;
pub mod draft;
mod metadata;
pub mod timezone;
pub mod weights;

/// A draft that cannot be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DraftError {
    #[display("no unassigned candidates to draft")]
    NoCandidates,
    #[display("team size must be at least 1")]
    InvalidTeamSize,
    #[display("team count must be at least 1")]
    InvalidTeamCount,
    #[display("balancing weights must be finite and non-negative")]
    InvalidWeights,
}
