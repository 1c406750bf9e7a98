pub use self::{grid::*, strategy::*};

pub(crate) mod grid;
pub(crate) mod strategy;
