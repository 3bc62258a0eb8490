mod contract;
pub(crate) mod headless;

pub use contract::{Host, PlayState, Player, ScrollGeometry};
