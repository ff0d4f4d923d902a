/// Number of 64-bit words in the permutation state.
pub const STATE_WORDS: usize = 5;

/// Round constants of the 12-round permutation, `0xf0 - 15 * i`.
/// A permutation of `n` rounds uses the last `n` entries.
pub const ROUND_CONSTANTS: [u8; 12] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Right-rotation amounts `(a, b)` of the linear layer, indexed by state word.
pub const ROTATIONS: [(u32, u32); STATE_WORDS] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];
