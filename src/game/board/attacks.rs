// src/game/board/attacks.rs

use crate::game::board::movement::{self, KING_ATK, KNIGHT_ATK};
use crate::game::board::{BitBoard, Position};
use crate::game::defs::{Color, Piece, Square};
use crate::game::moves::magics::magics;

/// All pieces of either color attacking `sq` under the given occupancy.
/// Pawn attackers are found by probing with the opposite color's capture
/// pattern from `sq`.
pub fn attackers_to(pos: &Position, sq: Square, occ: BitBoard) -> BitBoard {
    let s = sq.0 as usize;

    let pawns = (movement::pawn_attacks(Color::Black, sq) & pos.pieces(Color::White, Piece::Pawn))
        | (movement::pawn_attacks(Color::White, sq) & pos.pieces(Color::Black, Piece::Pawn));

    let knights = KNIGHT_ATK[s]
        & (pos.pieces(Color::White, Piece::Knight) | pos.pieces(Color::Black, Piece::Knight));

    let kings = KING_ATK[s]
        & (pos.pieces(Color::White, Piece::King) | pos.pieces(Color::Black, Piece::King));

    let rook_like = magics().rook_attacks(sq, occ)
        & (pos.pieces(Color::White, Piece::Rook)
            | pos.pieces(Color::Black, Piece::Rook)
            | pos.pieces(Color::White, Piece::Queen)
            | pos.pieces(Color::Black, Piece::Queen));

    let bishop_like = magics().bishop_attacks(sq, occ)
        & (pos.pieces(Color::White, Piece::Bishop)
            | pos.pieces(Color::Black, Piece::Bishop)
            | pos.pieces(Color::White, Piece::Queen)
            | pos.pieces(Color::Black, Piece::Queen));

    pawns | knights | kings | rook_like | bishop_like
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::defs::squarename as sq;
    use crate::game::io::position_from_fen;

    #[test]
    fn counts_attackers_of_both_colors() {
        // White knight c3 and black rook d8 both attack d5.
        let pos = position_from_fen("3r3k/8/8/3p4/8/2N5/8/7K w - - 0 1").unwrap();
        let att = attackers_to(&pos, sq::D5, pos.occupied());
        assert!(att.contains(sq::C3));
        assert!(att.contains(sq::D8));
        assert_eq!(att.count(), 2);
    }

    #[test]
    fn sliders_are_blocked_by_occupancy() {
        let pos = position_from_fen("3r3k/8/3p4/8/8/8/3R4/7K w - - 0 1").unwrap();
        // The black pawn on d6 shields d5 from the d8 rook but not from d2.
        let att = attackers_to(&pos, sq::D5, pos.occupied());
        assert!(att.contains(sq::D2));
        assert!(!att.contains(sq::D8));
    }

    #[test]
    fn pawn_attackers_probe_with_reversed_pattern() {
        let pos = position_from_fen("7k/8/8/3p4/4P3/8/8/7K w - - 0 1").unwrap();
        let att = attackers_to(&pos, sq::D5, pos.occupied());
        assert!(att.contains(sq::E4));
        let att2 = attackers_to(&pos, sq::E4, pos.occupied());
        assert!(att2.contains(sq::D5));
    }
}
