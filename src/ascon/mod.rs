mod aead;
mod cipher;
mod core;
mod error;
mod interface;
mod key;
mod variant;

pub use cipher::Cipher;
pub use self::core::{Rounds, permute};
pub use error::{Error, Result};
pub use interface::{decrypt, encrypt};
pub use key::{KEY_SIZE, Key, NONCE_SIZE, Nonce, TAG_SIZE, Tag};
pub use variant::Variant;
