use crate::ascon::aead::absorb::absorb_associated_data;
use crate::ascon::aead::init::{finalize, initialize};
use crate::ascon::aead::util::{block_count, pad_block};
use crate::ascon::key::{Key, Nonce, Tag};
use crate::ascon::variant::Variant;

/// Core Ascon encryption. Replaces the plaintext in `buffer` with ciphertext of the same length
/// and returns the authentication tag.
///
/// Each whole block is XOR'd into the rate words, the resulting words are the ciphertext, then
/// the state is permuted. The final padded block is XOR'd in without a permutation and only its
/// `buffer.len() % rate` leading bytes are emitted.
pub(crate) fn encrypt_in_place(
    variant: Variant,
    key: &Key,
    nonce: &Nonce,
    associated_data: &[u8],
    buffer: &mut [u8],
) -> Tag {
    let mut state = initialize(variant, key, nonce);
    absorb_associated_data(variant, &mut state, associated_data);

    let rate = variant.rate();
    let rounds = variant.intermediate_rounds();
    let full_len = (block_count(buffer.len(), rate) - 1) * rate;
    let (blocks, tail) = buffer.split_at_mut(full_len);

    for block in blocks.chunks_exact_mut(rate) {
        state.xor_block(block);
        state.extract_block(block);
        state.permute(rounds);
    }

    // last block may be empty, still carries the pad byte
    let last = pad_block(tail, rate);
    state.xor_block(&last[..rate]);
    state.extract_block(tail);

    finalize(variant, &mut state, key)
}
