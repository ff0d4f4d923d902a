use super::constants::{ROTATIONS, ROUND_CONSTANTS, STATE_WORDS};
use super::state::State;
use crate::ascon::error::{Error, Result};

/// Round counts the permutation is defined for.
///
/// - [`Rounds::Twelve`] is used for initialisation and finalisation by both variants.
/// - [`Rounds::Six`] is the intermediate round count of Ascon-128.
/// - [`Rounds::Eight`] is the intermediate round count of Ascon-128a.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rounds {
    Six,
    Eight,
    Twelve,
}

impl Rounds {
    /// Number of rounds applied.
    pub const fn count(self) -> usize {
        match self {
            Rounds::Six => 6,
            Rounds::Eight => 8,
            Rounds::Twelve => 12,
        }
    }

    /// Constant added in the first round: `0x96`, `0xb4` or `0xf0`. Each following round
    /// subtracts 15.
    pub const fn constant_base(self) -> u8 {
        ROUND_CONSTANTS[ROUND_CONSTANTS.len() - self.count()]
    }
}

impl TryFrom<usize> for Rounds {
    type Error = Error;

    fn try_from(rounds: usize) -> Result<Self> {
        match rounds {
            6 => Ok(Rounds::Six),
            8 => Ok(Rounds::Eight),
            12 => Ok(Rounds::Twelve),
            _ => Err(Error::InvalidRoundCount { rounds }),
        }
    }
}

/// Applies the Ascon permutation to a copy of `state` and returns the result.
///
/// ## Examples
/// ```
/// use ascon_aead::{Rounds, permute};
///
/// let out = permute([0u64; 5], Rounds::Twelve);
/// assert_eq!(out[0], 0x78ea7ae5cfebb108);
///
/// // pure function of its inputs
/// assert_eq!(out, permute([0u64; 5], Rounds::Twelve));
/// ```
pub fn permute(state: [u64; STATE_WORDS], rounds: Rounds) -> [u64; STATE_WORDS] {
    let mut state = State::new(state);
    state.permute(rounds);
    *state.words()
}

/// Core permutation. Applies `rounds` rounds to the five state words in place.
#[inline(always)]
pub(crate) fn permute_words(words: &mut [u64; STATE_WORDS], rounds: Rounds) {
    let first = ROUND_CONSTANTS.len() - rounds.count();
    for &rc in &ROUND_CONSTANTS[first..] {
        add_round_constant(words, rc);
        substitution_layer(words);
        linear_layer(words);
    }
}

/// Constant addition step. Only the low byte of the third word changes.
#[inline(always)]
pub(crate) fn add_round_constant(words: &mut [u64; STATE_WORDS], rc: u8) {
    words[2] ^= u64::from(rc);
}

/// Substitution step. Bitsliced 5-bit S-box applied to all 64 bit positions at once,
/// with word 0 holding the most significant bit of each 5-bit column.
#[inline(always)]
pub(crate) fn substitution_layer(words: &mut [u64; STATE_WORDS]) {
    let [mut x0, mut x1, mut x2, mut x3, mut x4] = *words;

    x0 ^= x4;
    x4 ^= x3;
    x2 ^= x1;

    let t0 = !x0 & x1;
    let t1 = !x1 & x2;
    let t2 = !x2 & x3;
    let t3 = !x3 & x4;
    let t4 = !x4 & x0;

    x0 ^= t1;
    x1 ^= t2;
    x2 ^= t3;
    x3 ^= t4;
    x4 ^= t0;

    x1 ^= x0;
    x0 ^= x4;
    x3 ^= x2;
    x2 = !x2;

    *words = [x0, x1, x2, x3, x4];
}

/// Linear diffusion step. Each word is XOR'd with two rotations of itself.
#[inline(always)]
pub(crate) fn linear_layer(words: &mut [u64; STATE_WORDS]) {
    for (word, &(a, b)) in words.iter_mut().zip(ROTATIONS.iter()) {
        *word ^= word.rotate_right(a) ^ word.rotate_right(b);
    }
}
