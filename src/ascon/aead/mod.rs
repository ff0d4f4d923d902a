//! Ascon AEAD construction: initialisation, associated-data absorption, the encryption and
//! decryption pipelines, and finalisation. Every call builds its own state.

mod absorb;
mod decryption;
mod encryption;
mod init;
pub(crate) mod util;

pub(crate) use decryption::decrypt_in_place;
pub(crate) use encryption::encrypt_in_place;
