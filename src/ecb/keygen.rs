// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! Seed and key generation.
//!
//! Two separate generator instances with strictly separated purposes: the
//! process-wide non-deterministic source ([`random_seed`]) is only drawn
//! from when the user supplies no seed, and a freshly seeded ChaCha20
//! instance ([`derive_key`]) expands the resolved seed into key bytes.
//! The two never share state.
//!
//! # Reproducibility
//!
//! ChaCha20 output is identical on every platform, so a given seed maps
//! to the same key bytes on native and WASM alike, across runs. Matching
//! a reimplementation byte-for-byte requires the same generator
//! algorithm; a different PRNG seeded with the same integer produces a
//! different (equally valid) key.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::KEY_SIZE;

/// Draw a fresh seed from the thread-local non-deterministic source.
///
/// Used only when the caller supplied no seed. The resulting value is the
/// sole way to reproduce the derived key, so the caller must report it.
pub fn random_seed() -> i64 {
    rand::thread_rng().gen()
}

/// Deterministically expand a 64-bit seed into an AES-128 key.
///
/// Seeds a fresh ChaCha20 generator from the seed's raw bit pattern
/// (sign-agnostic, so negative seeds reproduce too) and draws exactly
/// [`KEY_SIZE`] bytes in order, each uniform in [0,256).
pub fn derive_key(seed: i64) -> [u8; KEY_SIZE] {
    let mut rng = ChaCha20Rng::seed_from_u64(seed as u64);
    let mut key = [0u8; KEY_SIZE];
    for byte in key.iter_mut() {
        *byte = rng.gen();
    }
    key
}
