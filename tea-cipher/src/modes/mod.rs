//! Cipher modes implementation
//!
//! Each mode transforms exactly one block relative to a caller-supplied
//! IV. The IV is never advanced here; multi-block chaining is up to the
//! caller.

pub mod cbc;
pub mod cfb;
pub mod ecb;
pub mod ofb;

use std::fmt;
use std::str::FromStr;

use crate::cipher::BlockTransform;
use crate::error::{CipherError, Result};
use crate::utils;

/// Mode of operation applied around the raw block transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic Code Book, no IV
    Ecb,
    /// Cipher Block Chaining
    Cbc,
    /// Cipher Feedback
    Cfb,
    /// Output Feedback
    Ofb,
}

impl Mode {
    /// All supported modes, in declaration order
    pub const ALL: [Mode; 4] = [Mode::Ecb, Mode::Cbc, Mode::Cfb, Mode::Ofb];

    /// Whether the mode needs an IV on every call
    pub fn requires_iv(self) -> bool {
        match self {
            Mode::Ecb => false,
            Mode::Cbc | Mode::Cfb | Mode::Ofb => true,
        }
    }

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CipherError::InvalidMode(s.to_string()))
    }
}

impl TryFrom<u8> for Mode {
    type Error = CipherError;

    fn try_from(value: u8) -> Result<Self> {
        Mode::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CipherError::InvalidMode(value.to_string()))
    }
}

/// Main struct for cipher modes
///
/// The public entry points validate lengths once; the per-mode helpers
/// in the submodules run on already-checked input.
pub struct CipherModes;

impl CipherModes {
    /// Encrypts one block under `mode`, validating the block and, when
    /// the mode needs one, the IV before anything is transformed.
    pub fn encrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        mode: Mode,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let size = cipher.block_bytes();
        utils::check_block(block, size)?;
        log::trace!("{mode} encrypt of {size}-byte block");

        match mode {
            Mode::Ecb => Self::ecb_encrypt(cipher, block),
            Mode::Cbc => Self::cbc_encrypt(cipher, block, utils::check_iv(iv, size)?),
            Mode::Cfb => Self::cfb_encrypt(cipher, block, utils::check_iv(iv, size)?),
            Mode::Ofb => Self::ofb_encrypt(cipher, block, utils::check_iv(iv, size)?),
        }
    }

    /// Decrypts one block under `mode`
    pub fn decrypt<C: BlockTransform + ?Sized>(
        cipher: &C,
        block: &[u8],
        mode: Mode,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let size = cipher.block_bytes();
        utils::check_block(block, size)?;
        log::trace!("{mode} decrypt of {size}-byte block");

        match mode {
            Mode::Ecb => Self::ecb_decrypt(cipher, block),
            Mode::Cbc => Self::cbc_decrypt(cipher, block, utils::check_iv(iv, size)?),
            Mode::Cfb => Self::cfb_decrypt(cipher, block, utils::check_iv(iv, size)?),
            Mode::Ofb => Self::ofb_decrypt(cipher, block, utils::check_iv(iv, size)?),
        }
    }

    /// Runs the raw forward transform over an IV
    pub fn keystream<C: BlockTransform + ?Sized>(cipher: &C, iv: &[u8]) -> Result<Vec<u8>> {
        let size = cipher.block_bytes();
        let iv = utils::check_iv(Some(iv), size)?;
        log::trace!("keystream from {size}-byte IV");
        cipher.forward(iv)
    }

    /// List all supported cipher modes
    pub fn supported_modes() -> Vec<&'static str> {
        Mode::ALL.iter().map(|mode| mode.name()).collect()
    }
}
