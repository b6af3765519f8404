pub use self::{board::*, goal::*, grid::*, ids::*, submission::*, team::*};

pub(crate) mod board;
pub(crate) mod goal;
pub(crate) mod grid;
pub(crate) mod ids;
pub(crate) mod submission;
pub(crate) mod team;
