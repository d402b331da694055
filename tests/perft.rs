use rookery::game::io::{position_from_fen, START_FEN};
use rookery::perft::perft;

use shakmaty::fen::Fen;
use shakmaty::{Chess, Position};

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}

fn assert_perft(fen: &str, expected: &[u64]) {
    let mut pos = position_from_fen(fen).expect("valid FEN");
    for (i, &want) in expected.iter().enumerate() {
        let depth = (i + 1) as u32;
        let got = perft(&mut pos, depth);
        assert_eq!(got, want, "perft({depth}) mismatch on {fen}");
    }
}

fn cross_check(fen: &str, depth: u8) {
    let mut board = position_from_fen(fen).expect("valid FEN");

    let setup: Fen = fen.parse().expect("shakmaty FEN");
    let reference: Chess = setup
        .into_position(shakmaty::CastlingMode::Standard)
        .expect("shakmaty position");

    for d in 1..=depth {
        let expected = perft_shakmaty(&reference, d);
        let got = perft(&mut board, d as u32);
        assert_eq!(got, expected, "disagrees with shakmaty at depth {d} on {fen}");
    }
}

#[test]
fn perft_initial_position() {
    assert_perft(START_FEN, &[20, 400, 8_902, 197_281]);
}

#[test]
fn perft_kiwipete() {
    assert_perft(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[48, 2_039, 97_862],
    );
}

#[test]
fn perft_rook_endgame_with_ep_pin() {
    assert_perft("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2_812, 43_238]);
}

#[test]
fn perft_check_evasion_node() {
    assert_perft(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[6, 264, 9_467],
    );
}

#[test]
fn perft_promotion_and_castle_node() {
    assert_perft(
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[44, 1_486, 62_379],
    );
}

#[test]
fn cross_check_en_passant_discovered_check() {
    cross_check("8/8/8/k1pP4/8/8/8/4K3 w - c6 0 1", 4);
}

#[test]
fn cross_check_castling_through_attack() {
    cross_check("4k3/8/8/8/8/5r2/8/R3K2R w KQ - 0 1", 3);
}

#[test]
fn cross_check_promotion_storm() {
    cross_check("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N w - - 0 1", 3);
}

#[test]
fn cross_check_pinned_pieces() {
    cross_check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1", 3);
}
