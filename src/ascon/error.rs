use rand::rand_core;
use thiserror::Error;

/// Ascon Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Ascon Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Computed authentication tag did not match input tag. Ciphertext, associated data, key,
    /// nonce, or tag has been modified since encryption, or the wrong variant was used.
    #[error("Ascon authentication failed (invalid tag)")]
    AuthFailed,

    /// Attempted to build a key from a slice that is not 16 bytes long.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Attempted to build a nonce from a slice that is not 16 bytes long.
    #[error("invalid nonce length: {len} bytes (expected 16)")]
    InvalidNonceLength { len: usize },

    /// Requested a permutation round count other than 6, 8, or 12.
    #[error("invalid round count: {rounds} (expected 6, 8, or 12)")]
    InvalidRoundCount { rounds: usize },

    /// Provided a packed message that did not match the expected format.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// Associated data length does not fit the 32-bit length field of a packed message.
    #[error("associated data too long for packed message: {len} bytes (maximum 2^32 - 1)")]
    AssociatedDataTooLong { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
