// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! The ECB block-cipher transform.
//!
//! Encrypts a byte buffer with AES-128 one 16-byte block at a time,
//! independently, with no IV, no chaining and no authentication. Each
//! ciphertext block depends only on its own plaintext block and the key —
//! which is exactly the property that leaks plaintext structure and the
//! reason this mode exists here.
//!
//! # Padding policy
//!
//! The input is padded with zero bytes up to the next block boundary
//! before encryption, and the same number of bytes is cut off the result
//! afterwards, so ciphertext and plaintext have identical lengths. When
//! the input is already block-aligned a *full* extra block is added (and
//! later discarded) rather than none. The returned buffer therefore
//! usually ends mid-block and is not decryptable as whole cipher blocks;
//! no decrypt path exists.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;

pub mod error;
pub mod keygen;

pub use error::CipherError;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Encrypt `plaintext` under `key` in ECB mode.
///
/// The returned ciphertext has exactly the same length as `plaintext`
/// (see the module docs for the pad-then-truncate policy). The padded
/// working buffer is a fresh allocation; the caller's plaintext is never
/// aliased or grown in place.
///
/// # Errors
/// [`CipherError::InvalidKeySize`] if `key` is not exactly
/// [`KEY_SIZE`] bytes. The function performs no I/O and has no other
/// failure modes.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    let cipher = Aes128::new_from_slice(key).map_err(|_| CipherError::InvalidKeySize {
        expected: KEY_SIZE,
        actual: key.len(),
    })?;

    // Always at least one padding byte; a block-aligned input gains a
    // full extra block that is cut off again below.
    let padding = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(plaintext.len() + padding);
    padded.extend_from_slice(plaintext);
    padded.resize(plaintext.len() + padding, 0);

    let mut ciphertext = vec![0u8; padded.len()];
    for (src, dst) in padded
        .chunks_exact(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact_mut(BLOCK_SIZE))
    {
        let mut block = GenericArray::clone_from_slice(src);
        cipher.encrypt_block(&mut block);
        dst.copy_from_slice(&block);
    }

    ciphertext.truncate(ciphertext.len() - padding);
    Ok(ciphertext)
}
