mod definitions;
mod generator;
pub mod magics;

pub use definitions::{Move, MoveList, MoveType, ScoredMove, ScoredMoveList};
#[allow(unused_imports)]
pub use definitions::MAX_MOVES;
pub use generator::{generate, GenType};
pub use magics::{magics, Magics, MagicTable, MAGICS};
