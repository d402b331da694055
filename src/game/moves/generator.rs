use super::{Move, MoveList, MoveType};

use crate::game::board::movement::{attacks_bb, between_bb, pawn_attacks, KING_ATK};
use crate::game::board::{rankfile, BitBoard, Position};
use crate::game::defs::{pawn_push, Color, Piece, Square, NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST};
use crate::game::gamestate::CastlingRights;

/// What subset of the move set to emit.
///
/// `Captures` holds every move landing on an enemy piece plus all queen
/// promotions; `Quiets` holds the remaining pseudo-legal moves. `Evasions`
/// is only valid while in check, `NonEvasions` only while not; `Legal` picks
/// the right one and filters out self-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenType {
    Captures,
    Quiets,
    Evasions,
    NonEvasions,
    Legal,
}

/// Fill `list` with the requested kind of moves and return how many were
/// written. The list is reset first; the caller owns the buffer.
pub fn generate(pos: &Position, list: &mut MoveList, gen: GenType) -> usize {
    list.clear();
    if gen == GenType::Legal {
        generate_legal(pos, list);
    } else {
        debug_assert!(
            (gen == GenType::Evasions) == pos.in_check(),
            "generation kind does not match check status"
        );
        generate_all(pos, list, gen);
    }
    list.len
}

/// Legal move generation: evasions or non-evasions by check status, then a
/// swap-with-last sweep dropping the moves only `Position::legal` can judge
/// (pinned origin, king steps, en passant).
fn generate_legal(pos: &Position, list: &mut MoveList) {
    let us = pos.side_to_move();
    let pinned = pos.blockers_for_king(us) & pos.side(us);
    let ksq = pos.king_square(us);

    let gen = if pos.in_check() { GenType::Evasions } else { GenType::NonEvasions };
    generate_all(pos, list, gen);

    let mut i = 0;
    while i < list.len {
        let m = list.items[i];
        let suspect = (pinned & m.from_sq()).any()
            || m.from_sq() == ksq
            || m.move_type() == MoveType::EnPassant;
        if suspect && !pos.legal(m) {
            list.swap_remove(i);
        } else {
            i += 1;
        }
    }
}

fn generate_all(pos: &Position, list: &mut MoveList, gen: GenType) {
    let us = pos.side_to_move();
    let ksq = pos.king_square(us);
    let checkers = pos.checkers();

    // With two checkers only the king can move.
    let mut target = BitBoard::EMPTY;
    if gen != GenType::Evasions || !checkers.more_than_one() {
        target = match gen {
            GenType::Evasions => between_bb(ksq, checkers.lsb()),
            GenType::NonEvasions => !pos.side(us),
            GenType::Captures => pos.side(!us),
            _ => !pos.occupied(), // Quiets
        };

        generate_pawn_moves(pos, list, us, gen, target);
        for pt in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
            generate_piece_moves(pos, list, us, pt, target);
        }
    }

    // An escaping king may step onto any non-own square, not only into the
    // evasion target.
    let king_target = if gen == GenType::Evasions { !pos.side(us) } else { target };
    for to in KING_ATK[ksq.0 as usize] & king_target {
        list.push(Move::new(ksq, to));
    }

    if gen == GenType::Quiets || gen == GenType::NonEvasions {
        for cr in [CastlingRights::king_side(us), CastlingRights::queen_side(us)] {
            if pos.can_castle(cr) && !pos.castling_impeded(cr) {
                list.push(Move::castling(ksq, pos.castling_rook_square(cr)));
            }
        }
    }
}

fn generate_piece_moves(pos: &Position, list: &mut MoveList, us: Color, pt: Piece, target: BitBoard) {
    let occ = pos.occupied();
    for from in pos.pieces(us, pt) {
        for to in attacks_bb(pt, from, occ) & target {
            list.push(Move::new(from, to));
        }
    }
}

fn generate_pawn_moves(pos: &Position, list: &mut MoveList, us: Color, gen: GenType, target: BitBoard) {
    let them = !us;
    let (rank7, rank3) = match us {
        Color::White => (rankfile::RANK_7, rankfile::RANK_3),
        Color::Black => (rankfile::RANK_2, rankfile::RANK_6),
    };
    let up = pawn_push(us);
    let (up_right, up_left) = match us {
        Color::White => (NORTH_EAST, NORTH_WEST),
        Color::Black => (SOUTH_WEST, SOUTH_EAST),
    };

    let empty = !pos.occupied();
    // During evasions a capture must take the checker itself.
    let enemies = if gen == GenType::Evasions { pos.checkers() } else { pos.side(them) };

    let pawns = pos.pieces(us, Piece::Pawn);
    let pawns_on7 = pawns & rank7;
    let pawns_not7 = pawns & !rank7;

    // Single and double pushes, no promotions.
    if gen != GenType::Captures {
        let mut b1 = pawns_not7.shift(up) & empty;
        let mut b2 = (b1 & rank3).shift(up) & empty;
        if gen == GenType::Evasions {
            b1 &= target;
            b2 &= target;
        }
        for to in b1 {
            list.push(Move::new(to.shifted(-up), to));
        }
        for to in b2 {
            list.push(Move::new(to.shifted(-up).shifted(-up), to));
        }
    }

    // Promotions, capturing and not.
    if pawns_on7.any() {
        let b1 = pawns_on7.shift(up_right) & enemies;
        let b2 = pawns_on7.shift(up_left) & enemies;
        let mut b3 = pawns_on7.shift(up) & empty;
        if gen == GenType::Evasions {
            b3 &= target;
        }
        for to in b1 {
            make_promotions(list, gen, to.shifted(-up_right), to, true);
        }
        for to in b2 {
            make_promotions(list, gen, to.shifted(-up_left), to, true);
        }
        for to in b3 {
            make_promotions(list, gen, to.shifted(-up), to, false);
        }
    }

    // Standard captures and en passant.
    if matches!(gen, GenType::Captures | GenType::Evasions | GenType::NonEvasions) {
        let b1 = pawns_not7.shift(up_right) & enemies;
        let b2 = pawns_not7.shift(up_left) & enemies;
        for to in b1 {
            list.push(Move::new(to.shifted(-up_right), to));
        }
        for to in b2 {
            list.push(Move::new(to.shifted(-up_left), to));
        }

        if let Some(ep) = pos.ep_square() {
            debug_assert_eq!(ep.rank(), if us == Color::White { 5 } else { 2 });

            // En passant can evade a check only by capturing the checking
            // double-pushed pawn; it never blocks another ray.
            if gen == GenType::Evasions && !target.contains(ep.shifted(-up)) {
                return;
            }
            for from in pawns_not7 & pawn_attacks(them, ep) {
                list.push(Move::en_passant(from, ep));
            }
        }
    }
}

/// Promotion emission policy: queen promotions count as captures whether or
/// not they take a piece; under-promotions follow the capture-ness of the
/// push. Evasions and non-evasions emit all four.
fn make_promotions(list: &mut MoveList, gen: GenType, from: Square, to: Square, is_capture: bool) {
    let all = gen == GenType::Evasions || gen == GenType::NonEvasions;

    if gen == GenType::Captures || all {
        list.push(Move::promotion(from, to, Piece::Queen));
    }
    if (gen == GenType::Captures && is_capture) || (gen == GenType::Quiets && !is_capture) || all {
        list.push(Move::promotion(from, to, Piece::Rook));
        list.push(Move::promotion(from, to, Piece::Bishop));
        list.push(Move::promotion(from, to, Piece::Knight));
    }
}
