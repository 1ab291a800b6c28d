//! # TEA Cipher Library
//!
//! The TEA (Tiny Encryption Algorithm) block cipher together with a
//! pluggable single-block mode layer.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - no IV
//! - **CBC** (Cipher Block Chaining) - block XOR IV before encryption
//! - **CFB** (Cipher Feedback) - block XOR encrypted IV
//! - **OFB** (Output Feedback) - block XOR encrypted IV
//!
//! Every call transforms exactly one block against the IV it is given.
//! To process a longer message, the caller advances the IV between
//! blocks (the previous ciphertext for CBC/CFB, the previous
//! [`BlockCipher::encrypt_iv`] output for OFB). Padding of a short final
//! block is also left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use tea_cipher::{BlockCipher, Mode, Tea};
//!
//! let cipher = Tea::from_hex("000102030405060708090a0b0c0d0e0f")?;
//! let iv = [0u8; 8];
//! let block = b"8 bytes!";
//!
//! let encrypted = cipher.encrypt_block(block, Mode::Cbc, Some(&iv[..]))?;
//! let decrypted = cipher.decrypt_block(&encrypted, Mode::Cbc, Some(&iv[..]))?;
//! assert_eq!(&decrypted[..], block);
//! # Ok::<(), tea_cipher::CipherError>(())
//! ```
//!
//! ## Adding a cipher
//!
//! Implement [`BlockTransform`] for the raw transform, then forward the
//! [`BlockCipher`] methods to [`CipherModes`]; the mode logic and input
//! validation are shared.

// Public modules
pub mod cipher;
pub mod error;
pub mod modes;
pub mod tea;
pub mod utils;

// Re-exports for easy access
pub use cipher::{BlockCipher, BlockTransform, KeyedCipher};
pub use error::{CipherError, Result};
pub use modes::{CipherModes, Mode};
pub use tea::Tea;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    /// Second cipher plugged into the same mode layer: a keyed byte-wise
    /// XOR over 4-byte blocks.
    struct XorCipher {
        key: [u8; 4],
    }

    impl BlockTransform for XorCipher {
        fn block_bytes(&self) -> usize {
            4
        }

        fn forward(&self, block: &[u8]) -> Result<Vec<u8>> {
            utils::xor_blocks(&self.key, block)
        }

        fn inverse(&self, block: &[u8]) -> Result<Vec<u8>> {
            utils::xor_blocks(&self.key, block)
        }
    }

    impl KeyedCipher for XorCipher {
        fn name(&self) -> &'static str {
            "XOR"
        }

        fn key_sizes(&self) -> &'static [usize] {
            &[32]
        }
    }

    impl BlockCipher for XorCipher {
        fn key_size(&self) -> usize {
            32
        }

        fn block_size(&self) -> usize {
            32
        }

        fn encrypt_block(&self, block: &[u8], mode: Mode, iv: Option<&[u8]>) -> Result<Vec<u8>> {
            CipherModes::encrypt(self, block, mode, iv)
        }

        fn decrypt_block(&self, block: &[u8], mode: Mode, iv: Option<&[u8]>) -> Result<Vec<u8>> {
            CipherModes::decrypt(self, block, mode, iv)
        }

        fn encrypt_iv(&self, iv: &[u8]) -> Result<Vec<u8>> {
            CipherModes::keystream(self, iv)
        }
    }

    fn round_trip_all<C: BlockCipher>(cipher: &C, block: &[u8], iv: &[u8]) {
        for mode in Mode::ALL {
            let encrypted = cipher.encrypt_block(block, mode, Some(iv)).unwrap();
            assert_eq!(encrypted.len() * 8, cipher.block_size());
            let decrypted = cipher.decrypt_block(&encrypted, mode, Some(iv)).unwrap();
            assert_eq!(block, &decrypted[..], "{mode} round trip failed");
        }
    }

    #[test]
    fn test_all_modes_integration() {
        let tea = Tea::new(b"sixteen byte key").unwrap();
        round_trip_all(&tea, b"8bytes!!", b"initvect");

        let xor = XorCipher { key: [0xA5; 4] };
        round_trip_all(&xor, b"four", b"ivec");
    }

    #[test]
    fn test_second_cipher_shares_validation() {
        let xor = XorCipher { key: [1, 2, 3, 4] };
        assert_eq!(
            xor.encrypt_block(b"12345678", Mode::Ecb, None),
            Err(CipherError::InvalidBlock { expected: 4, actual: 8 })
        );
        assert_eq!(
            xor.encrypt_block(b"1234", Mode::Cfb, None),
            Err(CipherError::InvalidIv { expected: 4, actual: None })
        );
    }

    #[test]
    fn test_trait_objects() {
        let ciphers: Vec<Box<dyn KeyedCipher>> = vec![
            Box::new(Tea::new(&[0u8; 16]).unwrap()),
            Box::new(XorCipher { key: [0; 4] }),
        ];
        let names: Vec<_> = ciphers.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["TEA", "XOR"]);
    }

    #[test]
    fn test_cbc_caller_driven_chaining() {
        let tea = Tea::new(&[0x42; 16]).unwrap();
        let message = b"repeat!!repeat!!";
        let iv = [0u8; 8];

        let mut previous = iv.to_vec();
        let mut ciphertext = Vec::new();
        for chunk in message.chunks(8) {
            let encrypted = tea.encrypt_block(chunk, Mode::Cbc, Some(&previous[..])).unwrap();
            previous = encrypted.clone();
            ciphertext.extend(encrypted);
        }
        // same plaintext block under a different IV must not repeat
        assert_ne!(&ciphertext[..8], &ciphertext[8..]);

        let mut previous = iv.to_vec();
        let mut plaintext = Vec::new();
        for chunk in ciphertext.chunks(8) {
            plaintext.extend(tea.decrypt_block(chunk, Mode::Cbc, Some(&previous[..])).unwrap());
            previous = chunk.to_vec();
        }
        assert_eq!(message, &plaintext[..]);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
