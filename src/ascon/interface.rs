use super::cipher::Cipher;
use super::error::Result;
use super::key::{Key, Nonce, Tag};
use super::variant::Variant;

/// One-shot Ascon encryption from raw key and nonce bytes.
///
/// Returns [InvalidKeyLength](crate::Error::InvalidKeyLength) or
/// [InvalidNonceLength](crate::Error::InvalidNonceLength) before any state is built if either
/// is not 16 bytes. Otherwise returns `(ciphertext, tag)`.
///
/// ## Examples
/// ```
/// # fn main() -> ascon_aead::Result<()> {
/// use ascon_aead::{Variant, decrypt, encrypt};
///
/// let key = [0x11u8; 16];
/// let nonce = [0x22u8; 16];
///
/// let (ct, tag) = encrypt(Variant::Standard, &key, &nonce, b"", b"secret")?;
/// assert_eq!(decrypt(Variant::Standard, &key, &nonce, b"", &ct, &tag)?, b"secret");
///
/// assert!(encrypt(Variant::Standard, &key[..15], &nonce, b"", b"secret").is_err());
/// # Ok(())
/// # }
/// ```
pub fn encrypt(
    variant: Variant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, Tag)> {
    let key = Key::try_from_slice(key)?;
    let nonce = Nonce::try_from_slice(nonce)?;
    Ok(Cipher::new(&key, variant).encrypt(&nonce, associated_data, plaintext))
}

/// One-shot Ascon decryption from raw key and nonce bytes.
///
/// Returns plaintext only if `tag` verifies, [AuthFailed](crate::Error::AuthFailed)
/// otherwise. Key and nonce lengths are checked first, as in [encrypt].
pub fn decrypt(
    variant: Variant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    ciphertext: &[u8],
    tag: &Tag,
) -> Result<Vec<u8>> {
    let key = Key::try_from_slice(key)?;
    let nonce = Nonce::try_from_slice(nonce)?;
    Cipher::new(&key, variant).decrypt(&nonce, associated_data, ciphertext, tag)
}
