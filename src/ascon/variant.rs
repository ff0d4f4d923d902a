//! Defines [`Variant`], the parameter set that separates Ascon-128 from Ascon-128a.

use std::fmt;

use crate::ascon::core::Rounds;
use crate::ascon::key::KEY_SIZE;

/// Round count used for initialisation and finalisation by every variant.
pub const FULL_ROUNDS: Rounds = Rounds::Twelve;

/// Ascon AEAD parameter set.
///
/// | Variant         | Rate     | Intermediate rounds | IV                   |
/// |-----------------|----------|---------------------|----------------------|
/// | `Standard`      | 8 bytes  | 6                   | `0x80400c0600000000` |
/// | `Accelerated`   | 16 bytes | 8                   | `0x80800c0800000000` |
///
/// The accelerated variant absorbs and squeezes through the first two state words per block;
/// the standard variant only uses the first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Ascon-128.
    Standard,
    /// Ascon-128a.
    Accelerated,
}

impl Variant {
    /// Number of bytes absorbed or squeezed per block.
    pub const fn rate(self) -> usize {
        match self {
            Variant::Standard => 8,
            Variant::Accelerated => 16,
        }
    }

    /// Number of 64-bit state words spanned by one block.
    pub const fn lanes(self) -> usize {
        self.rate() / 8
    }

    /// Round count of the permutation between blocks.
    pub const fn intermediate_rounds(self) -> Rounds {
        match self {
            Variant::Standard => Rounds::Six,
            Variant::Accelerated => Rounds::Eight,
        }
    }

    /// Initialisation value loaded into the first state word.
    /// Encodes key size, rate, and both round counts, one per byte, from the top.
    pub const fn iv(self) -> u64 {
        ((KEY_SIZE as u64 * 8) << 56)
            | ((self.rate() as u64 * 8) << 48)
            | ((FULL_ROUNDS.count() as u64) << 40)
            | ((self.intermediate_rounds().count() as u64) << 32)
    }

    /// State words that receive the key before finalisation: the two words directly after
    /// the rate.
    pub const fn finalization_lanes(self) -> (usize, usize) {
        (self.lanes(), self.lanes() + 1)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Standard => f.write_str("Ascon-128"),
            Variant::Accelerated => f.write_str("Ascon-128a"),
        }
    }
}
