use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::ascon::aead::absorb::absorb_associated_data;
use crate::ascon::aead::init::{finalize, initialize};
use crate::ascon::aead::util::{MAX_RATE, block_count, pad_block, xor_into};
use crate::ascon::error::{Error, Result};
use crate::ascon::key::{Key, Nonce, Tag};
use crate::ascon::variant::Variant;

/// Core Ascon decryption with tag verification. Replaces the ciphertext in `buffer` with
/// plaintext of the same length if `tag` is authentic.
///
/// Returns [AuthFailed](crate::Error::AuthFailed) if the computed tag does not match; the
/// buffer is zeroed first so no unverified plaintext is left behind.
pub(crate) fn decrypt_in_place(
    variant: Variant,
    key: &Key,
    nonce: &Nonce,
    associated_data: &[u8],
    buffer: &mut [u8],
    tag: &Tag,
) -> Result<()> {
    let computed = Zeroizing::new(decrypt_unverified(variant, key, nonce, associated_data, buffer));

    if bool::from(computed.as_slice().ct_eq(tag.as_slice())) {
        Ok(())
    } else {
        buffer.zeroize();
        Err(Error::AuthFailed)
    }
}

/// Decryption pipeline without the tag check. Leaves unverified plaintext in `buffer` and
/// returns the computed tag.
///
/// Whole blocks: plaintext is `rate words ^ ciphertext`, then the rate words are overwritten
/// with the ciphertext before permuting. Final block: the partial plaintext is recovered the
/// same way, then padded and XOR'd into the rate words, since the ciphertext never carried the
/// pad byte.
fn decrypt_unverified(
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

    let mut ciphertext = [0u8; MAX_RATE];
    for block in blocks.chunks_exact_mut(rate) {
        ciphertext[..rate].copy_from_slice(block);

        state.extract_block(block);
        xor_into(block, &ciphertext[..rate]);

        state.replace_block(&ciphertext[..rate]);
        state.permute(rounds);
    }

    let mut keystream = Zeroizing::new([0u8; MAX_RATE]);
    state.extract_block(&mut keystream[..tail.len()]);
    xor_into(tail, &keystream[..tail.len()]);

    let last = pad_block(tail, rate);
    state.xor_block(&last[..rate]);

    finalize(variant, &mut state, key)
}
