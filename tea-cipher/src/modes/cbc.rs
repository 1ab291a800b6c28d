//! CBC (Cipher Block Chaining) mode implementation

use crate::cipher::BlockTransform;
use crate::{utils, Result};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption of a single block
    ///
    /// C = E(K, P ⊕ IV)
    pub(crate) fn cbc_encrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let xored = utils::xor_blocks(block, iv)?;
        cipher.forward(&xored)
    }

    /// CBC mode decryption of a single block
    ///
    /// P = D(K, C) ⊕ IV
    pub(crate) fn cbc_decrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let decrypted_block = cipher.inverse(block)?;
        utils::xor_blocks(&decrypted_block, iv)
    }
}
