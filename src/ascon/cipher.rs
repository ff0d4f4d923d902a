use crate::ascon::aead::{decrypt_in_place, encrypt_in_place};
use crate::ascon::error::{Error, Result};
use crate::ascon::key::{Key, NONCE_SIZE, Nonce, TAG_SIZE, Tag};
use crate::ascon::variant::Variant;

/// Length of the `ad_len` field in a packed message.
const AD_LEN_SIZE: usize = 4;

/// Provides Ascon authenticated encryption and decryption for one key and one [Variant].
///
/// Every call builds, uses, and wipes its own permutation state, so a `Cipher` can be shared
/// between threads freely. The caller must supply a nonce that is unique per key.
///
/// ## Examples
/// ```
/// # fn main() -> ascon_aead::Result<()> {
/// use ascon_aead::{Cipher, Key, Nonce, Variant};
///
/// let key = Key::rand_key()?;
/// let nonce = Nonce::from_bytes([7u8; 16]);
/// let cipher = Cipher::new(&key, Variant::Accelerated);
///
/// let (ciphertext, tag) = cipher.encrypt(&nonce, b"header", b"Hello, World!");
/// let plaintext = cipher.decrypt(&nonce, b"header", &ciphertext, &tag)?;
/// assert_eq!(plaintext, b"Hello, World!");
///
/// // any modification is rejected
/// assert!(cipher.decrypt(&nonce, b"Header", &ciphertext, &tag).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cipher {
    key: Key,
    variant: Variant,
}

impl Cipher {
    /// Stores a copy of the key alongside the variant it will be used with.
    pub fn new(key: &Key, variant: Variant) -> Self {
        Self {
            key: key.clone(),
            variant,
        }
    }

    /// Variant this cipher was built for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Encrypts `plaintext`, authenticating `associated_data` alongside it.
    /// Returns the ciphertext (same length as the plaintext) and the 16-byte tag.
    pub fn encrypt(&self, nonce: &Nonce, associated_data: &[u8], plaintext: &[u8]) -> (Vec<u8>, Tag) {
        let mut ciphertext = plaintext.to_vec();
        let tag = self.encrypt_in_place_detached(nonce, associated_data, &mut ciphertext);
        (ciphertext, tag)
    }

    /// Decrypts `ciphertext` and verifies `tag` over it and `associated_data`.
    ///
    /// Returns:
    /// - plaintext if the tag is authentic.
    /// - [AuthFailed](crate::Error::AuthFailed) error otherwise. No plaintext is returned.
    pub fn decrypt(
        &self,
        nonce: &Nonce,
        associated_data: &[u8],
        ciphertext: &[u8],
        tag: &Tag,
    ) -> Result<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place_detached(nonce, associated_data, &mut plaintext, tag)?;
        Ok(plaintext)
    }

    /// Encrypts `buffer` in place and returns the tag.
    pub fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> Tag {
        encrypt_in_place(self.variant, &self.key, nonce, associated_data, buffer)
    }

    /// Decrypts `buffer` in place. On [AuthFailed](crate::Error::AuthFailed) the buffer is
    /// zeroed rather than left holding unverified plaintext.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag,
    ) -> Result<()> {
        decrypt_in_place(self.variant, &self.key, nonce, associated_data, buffer, tag)
    }

    /// Encrypts `plaintext` into a caller-provided buffer.
    ///
    /// # Panics
    /// If `out.len() != plaintext.len()`. Checked before any work is done.
    pub fn encrypt_into(
        &self,
        nonce: &Nonce,
        associated_data: &[u8],
        plaintext: &[u8],
        out: &mut [u8],
    ) -> Tag {
        assert_eq!(
            out.len(),
            plaintext.len(),
            "output buffer must be exactly as long as the plaintext"
        );
        out.copy_from_slice(plaintext);
        self.encrypt_in_place_detached(nonce, associated_data, out)
    }

    /// Decrypts `ciphertext` into a caller-provided buffer. On
    /// [AuthFailed](crate::Error::AuthFailed) `out` is left zeroed.
    ///
    /// # Panics
    /// If `out.len() != ciphertext.len()`. Checked before any work is done.
    pub fn decrypt_into(
        &self,
        nonce: &Nonce,
        associated_data: &[u8],
        ciphertext: &[u8],
        tag: &Tag,
        out: &mut [u8],
    ) -> Result<()> {
        assert_eq!(
            out.len(),
            ciphertext.len(),
            "output buffer must be exactly as long as the ciphertext"
        );
        out.copy_from_slice(ciphertext);
        self.decrypt_in_place_detached(nonce, associated_data, out, tag)
    }

    /// Encrypts and packs everything needed for decryption into one message.
    ///
    /// Output is formatted as `Nonce (16 bytes) || AD length (4 bytes, BE) || AD || Ciphertext || Tag (16 bytes)`
    ///
    /// Returns [AssociatedDataTooLong](crate::Error::AssociatedDataTooLong) if the associated
    /// data does not fit the 32-bit length field.
    pub fn seal(&self, nonce: &Nonce, associated_data: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let ad_len = u32::try_from(associated_data.len()).map_err(|_| Error::AssociatedDataTooLong {
            len: associated_data.len(),
        })?;

        let mut out = Vec::with_capacity(
            NONCE_SIZE + AD_LEN_SIZE + associated_data.len() + plaintext.len() + TAG_SIZE,
        );
        out.extend_from_slice(nonce.as_bytes());
        out.extend_from_slice(&ad_len.to_be_bytes());
        out.extend_from_slice(associated_data);

        // encrypt directly into the output
        let ct_start = out.len();
        out.extend_from_slice(plaintext);
        let tag = self.encrypt_in_place_detached(nonce, associated_data, &mut out[ct_start..]);

        out.extend_from_slice(&tag);
        Ok(out)
    }

    /// Unpacks and decrypts a message produced by [seal](Cipher::seal).
    ///
    /// Returns:
    /// - `(plaintext, AD)` if the tag was authenticated. AD is `None` when empty.
    /// - [AuthFailed](crate::Error::AuthFailed) error if the computed tag did not match.
    /// - [InvalidCiphertext](crate::Error::InvalidCiphertext) error if the message is truncated.
    pub fn open(&self, message: &[u8]) -> Result<(Vec<u8>, Option<Vec<u8>>)> {
        // minimum size is 36 bytes -> 16 (nonce) + 4 (ad_len) + 16 (tag)
        if message.len() < NONCE_SIZE + AD_LEN_SIZE + TAG_SIZE {
            return Err(Error::InvalidCiphertext {
                len: message.len(),
                context: "insufficient bytes for packed Ascon message",
            });
        }

        let (nonce_bytes, rest) = message.split_at(NONCE_SIZE);
        let nonce = Nonce::try_from_slice(nonce_bytes)?;

        let (ad_len, rest) = rest.split_at(AD_LEN_SIZE);
        let ad_len = u32::from_be_bytes([ad_len[0], ad_len[1], ad_len[2], ad_len[3]]) as usize;
        if rest.len() < ad_len.saturating_add(TAG_SIZE) {
            return Err(Error::InvalidCiphertext {
                len: rest.len(),
                context: "insufficient bytes given ad_len",
            });
        }

        let (ad, rest) = rest.split_at(ad_len);
        let (ciphertext, tag_bytes) = rest.split_at(rest.len() - TAG_SIZE);
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(tag_bytes);

        let plaintext = self.decrypt(&nonce, ad, ciphertext, &tag)?;

        let ad = if !ad.is_empty() { Some(ad.to_vec()) } else { None };
        Ok((plaintext, ad))
    }
}
