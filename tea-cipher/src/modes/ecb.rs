//! ECB (Electronic Code Book) mode implementation

use crate::cipher::BlockTransform;
use crate::Result;

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption of a single block
    pub(crate) fn ecb_encrypt<C: BlockTransform + ?Sized>(cipher: &C, block: &[u8]) -> Result<Vec<u8>> {
        cipher.forward(block)
    }

    /// ECB mode decryption of a single block
    pub(crate) fn ecb_decrypt<C: BlockTransform + ?Sized>(cipher: &C, block: &[u8]) -> Result<Vec<u8>> {
        cipher.inverse(block)
    }
}
