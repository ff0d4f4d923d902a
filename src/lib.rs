//! Ascon-128 and Ascon-128a authenticated encryption with associated data.
//!
//! Use [Cipher] for repeated use of one key, or the one-shot [encrypt] and [decrypt]
//! functions with raw key and nonce bytes. [permute] exposes the underlying 320-bit permutation.

mod ascon;

pub use ascon::{
    Cipher, Error, KEY_SIZE, Key, NONCE_SIZE, Nonce, Result, Rounds, TAG_SIZE, Tag, Variant,
    decrypt, encrypt, permute,
};
