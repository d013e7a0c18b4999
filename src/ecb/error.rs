// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! Error types for the cipher transform.

use core::fmt;

/// Errors that can occur during the ECB transform.
///
/// The key size is fixed by [`keygen::derive_key`](super::keygen::derive_key)
/// in normal operation, so this is a checked should-not-happen condition
/// rather than undefined behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key's length does not match the cipher's required key size.
    InvalidKeySize { expected: usize, actual: usize },
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeySize { expected, actual } => {
                write!(f, "invalid key size: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for CipherError {}
