// src/game/board/mod.rs

pub mod attacks;
mod bitboard;
pub mod movement;
mod position;
pub mod rankfile;

// Re-exports to preserve the public API
pub use bitboard::BitBoard;
#[allow(unused_imports)]
pub use bitboard::SquareIter;
pub use attacks::attackers_to;
pub use movement::{
    attacks_bb, between_bb, line_bb, pawn_attacks, square_distance, PieceMovement,
    KING_ATK, KNIGHT_ATK, WHITE_PAWN_ATK, BLACK_PAWN_ATK,
};
pub use position::{CheckInfo, Position, Undo};
