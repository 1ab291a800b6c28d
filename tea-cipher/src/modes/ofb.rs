//! OFB (Output Feedback) mode implementation

use crate::cipher::BlockTransform;
use crate::Result;

use super::CipherModes;

impl CipherModes {
    /// OFB mode encryption of a single block
    ///
    /// C = P ⊕ E(K, IV). With no keystream register held between calls
    /// this is the same transform as CFB; a caller chaining several
    /// blocks passes E(K, IV) as the next IV.
    pub(crate) fn ofb_encrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        Self::cfb_encrypt(cipher, block, iv)
    }

    /// OFB mode decryption of a single block
    ///
    /// Since OFB is a stream cipher mode, decryption is identical to encryption.
    pub(crate) fn ofb_decrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        Self::ofb_encrypt(cipher, block, iv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::testing::RotateCipher;

    #[test]
    fn test_ofb_encrypt_decrypt() {
        let cipher = RotateCipher;
        let block = b"data";
        let iv = b"init";

        let ciphertext = CipherModes::ofb_encrypt(&cipher, block, iv).unwrap();
        let decrypted = CipherModes::ofb_decrypt(&cipher, &ciphertext, iv).unwrap();

        assert_eq!(block, &decrypted[..]);
    }

    #[test]
    fn test_ofb_matches_cfb_per_call() {
        let cipher = RotateCipher;
        let block = b"same";
        let iv = b"init";

        assert_eq!(
            CipherModes::ofb_encrypt(&cipher, block, iv).unwrap(),
            CipherModes::cfb_encrypt(&cipher, block, iv).unwrap()
        );
    }

    #[test]
    fn test_ofb_caller_driven_keystream() {
        let cipher = RotateCipher;
        let message = b"abcdefgh";

        let mut register = b"init".to_vec();
        let mut ciphertext = Vec::new();
        for chunk in message.chunks(4) {
            ciphertext.extend(CipherModes::ofb_encrypt(&cipher, chunk, &register).unwrap());
            register = CipherModes::keystream(&cipher, &register).unwrap();
        }

        let mut register = b"init".to_vec();
        let mut plaintext = Vec::new();
        for chunk in ciphertext.chunks(4) {
            plaintext.extend(CipherModes::ofb_decrypt(&cipher, chunk, &register).unwrap());
            register = CipherModes::keystream(&cipher, &register).unwrap();
        }

        assert_eq!(message, &plaintext[..]);
    }
}
