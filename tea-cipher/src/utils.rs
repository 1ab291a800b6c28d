//! Utility functions shared by ciphers and modes

use crate::error::{CipherError, Result};

/// XOR two equally sized blocks
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    check_block(b, a.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// Check that `block` is exactly `expected` bytes
pub fn check_block(block: &[u8], expected: usize) -> Result<()> {
    if block.len() != expected {
        let err = CipherError::InvalidBlock {
            expected,
            actual: block.len(),
        };
        log::debug!("rejecting block: {err}");
        return Err(err);
    }
    Ok(())
}

/// Check that an IV is present and exactly `expected` bytes
pub fn check_iv(iv: Option<&[u8]>, expected: usize) -> Result<&[u8]> {
    match iv {
        Some(iv) if iv.len() == expected => Ok(iv),
        other => {
            let err = CipherError::InvalidIv {
                expected,
                actual: other.map(<[u8]>::len),
            };
            log::debug!("rejecting IV: {err}");
            Err(err)
        }
    }
}
