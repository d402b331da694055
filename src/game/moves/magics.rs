use std::sync::OnceLock;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::game::board::{self, rankfile, PieceMovement};
use crate::game::defs::Square;

pub static MAGICS: OnceLock<Magics> = OnceLock::new();

#[inline]
pub fn magics() -> &'static Magics {
    MAGICS.get_or_init(Magics::new)
}

/// Per-rank seeds for the factor search. Any verified factor set is equally
/// correct; fixing the seeds keeps table construction deterministic.
const SEEDS: [u64; 8] = [728, 10316, 55013, 32803, 12281, 15100, 16645, 255];

/// Magic lookup state for one slider kind. Each square owns the slice
/// `attacks[offset[s] .. offset[s] + 2^popcount(mask[s])]` of the shared
/// table; slices are laid out back to back in square order.
pub struct MagicTable {
    pub magic:   [u64; 64],
    pub mask:    [u64; 64],
    pub shift:   [u8; 64],
    pub offset:  [usize; 64],
    pub attacks: Vec<u64>,
}

impl MagicTable {
    #[inline]
    pub fn attacks(&self, sq: Square, occ: u64) -> u64 {
        let s = sq.0 as usize;
        let idx = self.offset[s]
            + (((occ & self.mask[s]).wrapping_mul(self.magic[s])) >> self.shift[s]) as usize;
        debug_assert!(idx < self.attacks.len());
        unsafe { *self.attacks.get_unchecked(idx) }
    }

    fn build(slow: fn(Square, u64) -> u64) -> Self {
        let mut mask = [0u64; 64];
        let mut shift = [0u8; 64];
        let mut offset = [0usize; 64];
        let mut total = 0usize;

        for s in 0..64 {
            let sq = Square(s as u8);
            // A blocker on the far edge of a ray never changes the attack
            // set, so edge squares are dropped from the relevant mask.
            let edges = ((rankfile::RANK_1.0 | rankfile::RANK_8.0) & !PieceMovement::rank_mask(sq))
                | ((rankfile::FILE_A.0 | rankfile::FILE_H.0) & !PieceMovement::file_mask(sq));
            mask[s] = slow(sq, 0) & !edges;
            shift[s] = 64 - mask[s].count_ones() as u8;
            offset[s] = total;
            total += 1usize << mask[s].count_ones();
        }

        let mut attacks = vec![0u64; total];
        let mut magic = [0u64; 64];

        let mut occupancy = vec![0u64; 4096];
        let mut reference = vec![0u64; 4096];
        let mut epoch = vec![0u32; 4096];

        for s in 0..64 {
            let sq = Square(s as u8);

            // Carry-rippler over all subsets of the relevant mask.
            let mut size = 0usize;
            let mut b = 0u64;
            loop {
                occupancy[size] = b;
                reference[size] = slow(sq, b);
                size += 1;
                b = b.wrapping_sub(mask[s]) & mask[s];
                if b == 0 {
                    break;
                }
            }
            debug_assert_eq!(size, 1usize << mask[s].count_ones());

            let slice = &mut attacks[offset[s]..offset[s] + size];
            let mut rng = SmallRng::seed_from_u64(SEEDS[s >> 3]);
            let mut tries = 0u32;

            // Draw sparse candidates until one maps every subset without a
            // conflicting collision. The epoch counter makes stale slots
            // from failed candidates self-invalidating.
            loop {
                let factor = loop {
                    let f = rng.next_u64() & rng.next_u64() & rng.next_u64();
                    if (f.wrapping_mul(mask[s]) >> 56).count_ones() >= 6 {
                        break f;
                    }
                };
                tries += 1;

                let mut verified = true;
                for i in 0..size {
                    let idx = (occupancy[i].wrapping_mul(factor) >> shift[s]) as usize;
                    if epoch[idx] < tries {
                        epoch[idx] = tries;
                        slice[idx] = reference[i];
                    } else if slice[idx] != reference[i] {
                        verified = false;
                        break;
                    }
                }
                if verified {
                    magic[s] = factor;
                    break;
                }
            }

            for e in epoch[..size].iter_mut() {
                *e = 0;
            }
        }

        Self { magic, mask, shift, offset, attacks }
    }
}

pub struct Magics {
    pub rook: MagicTable,
    pub bishop: MagicTable,
}

impl Magics {
    pub fn new() -> Self {
        Self {
            rook: MagicTable::build(rook_attacks_slow),
            bishop: MagicTable::build(bishop_attacks_slow),
        }
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occ: board::BitBoard) -> board::BitBoard {
        board::BitBoard(self.rook.attacks(sq, occ.0))
    }
    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occ: board::BitBoard) -> board::BitBoard {
        board::BitBoard(self.bishop.attacks(sq, occ.0))
    }
    #[inline]
    pub fn queen_attacks(&self, sq: Square, occ: board::BitBoard) -> board::BitBoard {
        self.rook_attacks(sq, occ) | self.bishop_attacks(sq, occ)
    }
}

impl Default for Magics {
    fn default() -> Self {
        Self::new()
    }
}

fn rook_attacks_slow(sq: Square, occ: u64) -> u64 {
    let bb = 1u64 << sq.0;
    let r = PieceMovement::hq_line(occ, bb, PieceMovement::rank_mask(sq));
    let f = PieceMovement::hq_line(occ, bb, PieceMovement::file_mask(sq));
    r | f
}

fn bishop_attacks_slow(sq: Square, occ: u64) -> u64 {
    let bb = 1u64 << sq.0;
    let d = PieceMovement::hq_line(occ, bb, PieceMovement::diag_mask(sq));
    let a = PieceMovement::hq_line(occ, bb, PieceMovement::anti_mask(sq));
    d | a
}
