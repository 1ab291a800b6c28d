//! Cipher capability traits

use crate::error::Result;
use crate::modes::Mode;

/// Trait for any keyed cipher
pub trait KeyedCipher {
    /// Identifier of the algorithm
    fn name(&self) -> &'static str;

    /// Valid key sizes in bits
    fn key_sizes(&self) -> &'static [usize];
}

/// Trait for a block cipher that can be driven through a [`Mode`]
///
/// Every operation transforms exactly one block. Chaining state across
/// blocks of a longer message belongs to the caller, which passes the
/// advanced IV on each call.
pub trait BlockCipher {
    /// Key size in bits
    fn key_size(&self) -> usize;

    /// Block size in bits
    fn block_size(&self) -> usize;

    /// Encrypts a single block under `mode`
    ///
    /// `iv` is required for every mode where [`Mode::requires_iv`] holds
    /// and is ignored otherwise.
    fn encrypt_block(&self, block: &[u8], mode: Mode, iv: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Decrypts a single block under `mode`
    fn decrypt_block(&self, block: &[u8], mode: Mode, iv: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Runs the raw forward transform over an IV, producing one keystream block
    fn encrypt_iv(&self, iv: &[u8]) -> Result<Vec<u8>>;
}

/// Raw core transform of a block cipher, with no mode applied.
///
/// Implementations reject any input that is not exactly
/// [`BlockTransform::block_bytes`] long with [`crate::CipherError::InvalidBlock`].
pub trait BlockTransform {
    fn block_bytes(&self) -> usize;

    fn forward(&self, block: &[u8]) -> Result<Vec<u8>>;

    fn inverse(&self, block: &[u8]) -> Result<Vec<u8>>;
}
