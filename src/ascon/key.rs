//! Defines the [`Key`] and [`Nonce`] types. Both are exactly 128 bits; keys can be randomly
//! generated or constructed from an existing byte slice, nonces are always supplied by the caller.

use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ascon::error::{Error, Result};

/// Key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 16;

/// Authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Authentication tag.
pub type Tag = [u8; TAG_SIZE];

/// Contains a valid 128-bit Ascon key. Can be instantiated with a random key, or built from a
/// slice of exactly 16 bytes. Key bytes are wiped when the key is dropped and are never printed
/// by `Debug`.
///
/// ## Examples
/// ```
/// # fn main() -> ascon_aead::Result<()> {
/// use ascon_aead::Key;
///
/// // Instantiate a random key:
/// let random = Key::rand_key()?;
///
/// // Instantiate a key from a slice:
/// let key_bytes: [u8; 20] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09,
///                            0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13];
/// let key = Key::try_from_slice(&key_bytes[..16])?;
/// assert_eq!(key.as_bytes(), &key_bytes[..16]);
///
/// // Any other length returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: [u8; KEY_SIZE],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key() -> Result<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Wraps an existing 16-byte array.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is not 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Key halves as big-endian words.
    pub(crate) fn words(&self) -> (u64, u64) {
        split_words(&self.bytes)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

/// Contains a 128-bit nonce. The same nonce must never be used twice with the same key;
/// uniqueness is the caller's responsibility.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Nonce {
    bytes: [u8; NONCE_SIZE],
}

impl Nonce {
    /// Wraps an existing 16-byte array.
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self { bytes }
    }

    /// Attempts to build a nonce from a slice of bytes. Will return an InvalidNonceLength error
    /// if the input slice is not 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; NONCE_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidNonceLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.bytes
    }

    pub(crate) fn words(&self) -> (u64, u64) {
        split_words(&self.bytes)
    }
}

fn split_words(bytes: &[u8; 16]) -> (u64, u64) {
    let mut hi = [0u8; 8];
    let mut lo = [0u8; 8];
    hi.copy_from_slice(&bytes[..8]);
    lo.copy_from_slice(&bytes[8..]);
    (u64::from_be_bytes(hi), u64::from_be_bytes(lo))
}
