use crate::error::PermutationError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::{self, Write};
use std::str::FromStr;

pub const PERM_LENGTH: usize = 10;

/// Symbols every permutation is drawn from, in rank-0 order.
pub const ALPHABET: [u8; PERM_LENGTH] = *b"0123456789";

/// Number of distinct permutations of [`ALPHABET`], i.e. `10!`.
pub const UNIVERSE_SIZE: u64 = 3_628_800;

const FACTORIALS: [u64; PERM_LENGTH + 1] = [
    1, 1, 2, 6, 24, 120, 720, 5_040, 40_320, 362_880, 3_628_800,
];

/// An ordering of the ten decimal digits with no repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation([u8; PERM_LENGTH]);

impl Permutation {
    pub fn identity() -> Self {
        Permutation(ALPHABET)
    }

    /// Uniformly shuffles a fresh copy of the alphabet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = ALPHABET;
        symbols.shuffle(rng);
        Permutation(symbols)
    }

    /// Decodes `rank` in `0..UNIVERSE_SIZE` through the factorial number system,
    /// so ranks map to permutations in lexicographic order.
    pub fn from_rank(rank: u64) -> Option<Self> {
        if rank >= UNIVERSE_SIZE {
            return None;
        }

        let mut remaining = ALPHABET.to_vec();
        let mut symbols = [0u8; PERM_LENGTH];
        let mut rank = rank;
        for (position, slot) in symbols.iter_mut().enumerate() {
            let place = FACTORIALS[PERM_LENGTH - 1 - position];
            let index = (rank / place) as usize;
            rank %= place;
            *slot = remaining.remove(index);
        }
        Some(Permutation(symbols))
    }

    pub fn as_bytes(&self) -> &[u8; PERM_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            f.write_char(symbol as char)?;
        }
        Ok(())
    }
}

impl FromStr for Permutation {
    type Err = PermutationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let length = value.chars().count();
        if length != PERM_LENGTH {
            return Err(PermutationError::WrongLength(length));
        }

        let mut seen = [false; PERM_LENGTH];
        let mut symbols = [0u8; PERM_LENGTH];
        for (slot, symbol) in symbols.iter_mut().zip(value.chars()) {
            let digit = symbol
                .to_digit(10)
                .ok_or(PermutationError::InvalidSymbol(symbol))? as usize;
            if seen[digit] {
                return Err(PermutationError::RepeatedSymbol(symbol));
            }
            seen[digit] = true;
            *slot = ALPHABET[digit];
        }
        Ok(Permutation(symbols))
    }
}
