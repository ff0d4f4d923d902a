use crate::ascon::core::State;
use crate::ascon::key::{Key, Nonce, Tag};
use crate::ascon::variant::{FULL_ROUNDS, Variant};

/// Loads `IV || key || nonce` into a fresh state, runs the full permutation, then XORs the key
/// into the last two words.
pub(crate) fn initialize(variant: Variant, key: &Key, nonce: &Nonce) -> State {
    let (k0, k1) = key.words();
    let (n0, n1) = nonce.words();

    let mut state = State::new([variant.iv(), k0, k1, n0, n1]);
    state.permute(FULL_ROUNDS);

    state.xor_word(3, k0);
    state.xor_word(4, k1);
    state
}

/// XORs the key into the two words after the rate, runs the full permutation, and derives the
/// tag from the last two words XOR'd with the key.
pub(crate) fn finalize(variant: Variant, state: &mut State, key: &Key) -> Tag {
    let (k0, k1) = key.words();
    let (a, b) = variant.finalization_lanes();

    state.xor_word(a, k0);
    state.xor_word(b, k1);
    state.permute(FULL_ROUNDS);

    let mut tag = [0u8; 16];
    tag[..8].copy_from_slice(&(state.word(3) ^ k0).to_be_bytes());
    tag[8..].copy_from_slice(&(state.word(4) ^ k1).to_be_bytes());
    tag
}
