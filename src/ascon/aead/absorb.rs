use crate::ascon::aead::util::{block_count, pad_block};
use crate::ascon::core::State;
use crate::ascon::variant::Variant;

/// Marks the switch from associated data to payload.
const DOMAIN_SEPARATOR: u64 = 1;

/// Absorbs associated data into the rate words, one padded block at a time, permuting after
/// each block. Empty associated data is skipped entirely. The domain separator is applied in
/// both cases.
pub(crate) fn absorb_associated_data(variant: Variant, state: &mut State, associated_data: &[u8]) {
    if !associated_data.is_empty() {
        let rate = variant.rate();
        let rounds = variant.intermediate_rounds();

        // all blocks except the last are whole and unpadded
        let full_len = (block_count(associated_data.len(), rate) - 1) * rate;
        let (blocks, tail) = associated_data.split_at(full_len);

        for block in blocks.chunks_exact(rate) {
            state.xor_block(block);
            state.permute(rounds);
        }

        let last = pad_block(tail, rate);
        state.xor_block(&last[..rate]);
        state.permute(rounds);
    }

    state.xor_word(4, DOMAIN_SEPARATOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascon::aead::init::initialize;
    use crate::ascon::aead::util::test_util::{DEMO_AD, KAT_KEY, KAT_NONCE};
    use crate::ascon::key::{Key, Nonce};

    fn fresh(variant: Variant) -> State {
        initialize(variant, &Key::from_bytes(KAT_KEY), &Nonce::from_bytes(KAT_NONCE))
    }

    #[test]
    fn empty_associated_data_only_sets_domain_bit() {
        for variant in [Variant::Standard, Variant::Accelerated] {
            let mut state = fresh(variant);
            let mut expected = state.clone();
            expected.xor_word(4, 1);

            absorb_associated_data(variant, &mut state, &[]);
            assert_eq!(state, expected);
        }
    }

    #[test]
    fn partial_block_accelerated() {
        let mut state = fresh(Variant::Accelerated);
        absorb_associated_data(Variant::Accelerated, &mut state, &DEMO_AD);
        assert_eq!(
            state.words(),
            &[
                0x153c4470c8b9469c,
                0x4e1b2acbef6e0f66,
                0x182ebeb6fcb81c9e,
                0x78ff75e60644bf81,
                0xf7a3840e5a00a84a,
            ]
        );
    }

    #[test]
    fn exact_rate_gets_extra_pad_block() {
        let ad: Vec<u8> = (0u8..8).collect();

        let mut state = fresh(Variant::Standard);
        absorb_associated_data(Variant::Standard, &mut state, &ad);
        assert_eq!(
            state.words(),
            &[
                0x69feec6c5100a28e,
                0xb017a3b8b98a59e7,
                0x98b078831e0a40ed,
                0xb8d01868d3f90a87,
                0xea992926328d99f1,
            ]
        );

        // same result when the two blocks are absorbed by hand
        let mut manual = fresh(Variant::Standard);
        manual.xor_block(&ad);
        manual.permute(Variant::Standard.intermediate_rounds());
        manual.xor_word(0, 0x80 << 56);
        manual.permute(Variant::Standard.intermediate_rounds());
        manual.xor_word(4, 1);
        assert_eq!(state, manual);
    }
}
