pub mod game;
pub mod perft;

pub use game::board::{BitBoard, Position};
pub use game::io::{position_from_fen, position_to_fen, START_FEN};
pub use game::moves::{generate, GenType, Move, MoveList, MoveType};

/// Force one-time construction of the magic tables. Lookups initialize them
/// lazily on first use anyway; calling this up front keeps the cost out of
/// the first generation call.
pub fn init() {
    game::moves::magics();
}
