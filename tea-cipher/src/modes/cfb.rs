//! CFB (Cipher Feedback) mode implementation

use crate::cipher::BlockTransform;
use crate::{utils, Result};

use super::CipherModes;

impl CipherModes {
    /// CFB mode encryption of a single block
    ///
    /// C = P ⊕ E(K, IV). Feeding C back as the next IV is the caller's job.
    pub(crate) fn cfb_encrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let keystream = cipher.forward(iv)?;
        utils::xor_blocks(block, &keystream)
    }

    /// CFB mode decryption of a single block
    ///
    /// P = C ⊕ E(K, IV); the inverse transform is never used.
    pub(crate) fn cfb_decrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        Self::cfb_encrypt(cipher, block, iv)
    }
}
