use zeroize::Zeroizing;

/// Largest rate of any variant, in bytes.
pub(crate) const MAX_RATE: usize = 16;

/// First padding byte. The rest of the padded block is zero.
pub(crate) const PAD_BYTE: u8 = 0x80;

/// Number of rate-sized blocks `len` bytes occupy once padded. Always `floor(len / rate) + 1`:
/// an exact multiple of `rate` gains an extra block holding only padding.
#[inline(always)]
pub(crate) fn block_count(len: usize, rate: usize) -> usize {
    len / rate + 1
}

/// Builds the final padded block from the trailing `tail.len() < rate` bytes.
/// Only the first `rate` bytes of the result are meaningful.
#[inline(always)]
pub(crate) fn pad_block(tail: &[u8], rate: usize) -> Zeroizing<[u8; MAX_RATE]> {
    debug_assert!(tail.len() < rate && rate <= MAX_RATE);
    let mut block = Zeroizing::new([0u8; MAX_RATE]);
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = PAD_BYTE;
    block
}

#[inline(always)]
pub(crate) fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
