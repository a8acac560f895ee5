//! Deterministic match coin.
//!
//! Coin flips drive TCG Pocket mechanics: the opening flip, sleep and
//! paralysis checks, flip-based move effects. Matches must be replayable, so
//! the coin keeps explicit 64-bit state and advances it with a PCG step
//! instead of pulling from OS entropy.

/// Face shown by a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CoinFace {
    Heads,
    Tails,
}

/// Deterministic coin backed by a PCG-XSH-RR generator.
///
/// Same seed, same flip sequence. 64-bit state, 32-bit output, one multiply
/// plus an xorshift-rotate per flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coin {
    state: u64,
}

impl Coin {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Coin with an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the LCG state by one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift the high bits, then rotate by the
    /// top five bits of state.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Flip the coin, advancing the internal state.
    pub fn flip(&mut self) -> CoinFace {
        self.state = Self::step(self.state);
        if Self::output(self.state) & 1 == 0 {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::seeded(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Coin::seeded(7);
        let mut b = Coin::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.flip(), b.flip());
        }
    }

    #[test]
    fn test_known_sequence_for_seed_42() {
        use CoinFace::{Heads as H, Tails as T};
        let mut coin = Coin::seeded(42);
        let flips: Vec<CoinFace> = (0..12).map(|_| coin.flip()).collect();
        assert_eq!(flips, [T, H, T, T, H, H, T, T, H, T, T, H]);
    }

    #[test]
    fn test_opening_flips() {
        assert_eq!(Coin::seeded(0).flip(), CoinFace::Tails);
        assert_eq!(Coin::seeded(1).flip(), CoinFace::Heads);
        assert_eq!(Coin::default().flip(), CoinFace::Tails);
    }

    #[test]
    fn test_both_faces_appear() {
        let mut coin = Coin::seeded(0xDEAD_BEEF);
        let mut heads = 0usize;
        let mut tails = 0usize;
        for _ in 0..64 {
            match coin.flip() {
                CoinFace::Heads => heads += 1,
                CoinFace::Tails => tails += 1,
            }
        }
        assert!(heads > 0 && tails > 0);
    }

    #[test]
    fn test_face_display_is_snake_case() {
        assert_eq!(CoinFace::Heads.to_string(), "heads");
        assert_eq!(CoinFace::Tails.to_string(), "tails");
    }
}
