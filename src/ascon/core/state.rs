use zeroize::{Zeroize, ZeroizeOnDrop};

use super::constants::STATE_WORDS;
use super::permutation::{Rounds, permute_words};

/// The 320-bit Ascon state, five 64-bit words. Created per encryption or decryption call
/// and wiped when dropped.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct State {
    words: [u64; STATE_WORDS],
}

impl State {
    pub(crate) fn new(words: [u64; STATE_WORDS]) -> Self {
        Self { words }
    }

    pub(crate) fn words(&self) -> &[u64; STATE_WORDS] {
        &self.words
    }

    /// Applies the permutation in place.
    #[inline(always)]
    pub(crate) fn permute(&mut self, rounds: Rounds) {
        permute_words(&mut self.words, rounds);
    }

    #[inline(always)]
    pub(crate) fn word(&self, i: usize) -> u64 {
        self.words[i]
    }

    #[inline(always)]
    pub(crate) fn xor_word(&mut self, i: usize, value: u64) {
        self.words[i] ^= value;
    }

    /// XORs `block` into the leading words, 8 bytes per word, big-endian.
    /// `block.len()` must be a multiple of 8.
    #[inline(always)]
    pub(crate) fn xor_block(&mut self, block: &[u8]) {
        for (word, chunk) in self.words.iter_mut().zip(block.chunks_exact(8)) {
            *word ^= load_be(chunk);
        }
    }

    /// Overwrites the leading words with `block`, 8 bytes per word, big-endian.
    /// `block.len()` must be a multiple of 8.
    #[inline(always)]
    pub(crate) fn replace_block(&mut self, block: &[u8]) {
        for (word, chunk) in self.words.iter_mut().zip(block.chunks_exact(8)) {
            *word = load_be(chunk);
        }
    }

    /// Writes the big-endian bytes of the leading words into `out`, stopping after
    /// `out.len()` bytes (which may end partway through a word).
    #[inline(always)]
    pub(crate) fn extract_block(&self, out: &mut [u8]) {
        for (word, chunk) in self.words.iter().zip(out.chunks_mut(8)) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
    }
}

#[inline(always)]
fn load_be(bytes: &[u8]) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(bytes);
    u64::from_be_bytes(b)
}
