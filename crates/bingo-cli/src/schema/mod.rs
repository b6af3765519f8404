pub mod report;
pub mod roster;
