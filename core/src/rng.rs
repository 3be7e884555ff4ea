//! Per-match randomness for AI deck selection
//!
//! The host seeds a [`MatchRng`] from the match id, so replaying a match
//! rebuilds the exact opponent deck it was fought with.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Shuffles the candidate cards of a deck rule.
pub trait DeckRng {
    fn next_u64(&mut self) -> u64;

    /// Index in `0..len` by multiply-shift. An empty range gives `0`.
    fn index_below(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((u128::from(self.next_u64()) * len as u128) >> 64) as usize
    }

    /// Fisher-Yates, last card first
    fn shuffle<T>(&mut self, cards: &mut [T]) {
        for i in (1..cards.len()).rev() {
            let j = self.index_below(i + 1);
            cards.swap(i, j);
        }
    }
}

// Used if a seed ever mixes to zero, which xorshift cannot leave.
const FALLBACK_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

/// xorshift64* over a SplitMix64-mixed seed. Not for anything secret.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct MatchRng {
    state: u64,
}

impl MatchRng {
    pub fn from_seed(seed: u64) -> Self {
        let state = splitmix64(seed);
        Self {
            state: if state == 0 { FALLBACK_STATE } else { state },
        }
    }

    /// Seed from a match or room id (FNV-1a over its bytes).
    pub fn from_match_id(match_id: &str) -> Self {
        let hash = match_id.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
            (acc ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
        });
        Self::from_seed(hash)
    }
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl DeckRng for MatchRng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(match_id: &str) -> [u32; 8] {
        let mut powers = [15, 18, 21, 60, 72, 150, 200, 800];
        MatchRng::from_match_id(match_id).shuffle(&mut powers);
        powers
    }

    #[test]
    fn test_match_id_replays_same_order() {
        assert_eq!(shuffled("room-7f3a"), shuffled("room-7f3a"));
    }

    #[test]
    fn test_match_ids_seed_different_streams() {
        let mut a = MatchRng::from_match_id("room-1");
        let mut b = MatchRng::from_match_id("room-2");
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_shuffle_keeps_every_card() {
        let mut powers = shuffled("room-1");
        powers.sort();
        assert_eq!(powers, [15, 18, 21, 60, 72, 150, 200, 800]);
    }

    #[test]
    fn test_zero_seed_still_moves() {
        let mut rng = MatchRng::from_seed(0);
        let first = rng.next_u64();
        assert_ne!(first, rng.next_u64());
    }

    #[test]
    fn test_index_below_stays_in_range() {
        let mut rng = MatchRng::from_match_id("");
        assert_eq!(rng.index_below(0), 0);
        assert_eq!(rng.index_below(1), 0);
        for _ in 0..200 {
            assert!(rng.index_below(5) < 5);
        }
    }
}
