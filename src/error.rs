// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! Top-level error type for the encryption pipeline and CLI.
//!
//! [`EcbLeakError`] covers every failure mode from argument parsing
//! through file I/O, format dispatch, pixel conversion and the cipher
//! transform. Each variant's message names the stage that failed; nothing
//! is swallowed or retried, and a failed run writes no output file.

use core::fmt;

use crate::ecb::CipherError;
use crate::format::FormatError;
use crate::raster::RasterError;

/// Errors that can occur while encrypting an image.
#[derive(Debug)]
pub enum EcbLeakError {
    /// Reading the input or writing the output file failed.
    Io(std::io::Error),
    /// Unsupported extension, undecodable data, or an encode failure.
    Format(FormatError),
    /// Pixel buffer reconstruction failed.
    Raster(RasterError),
    /// The cipher rejected the key.
    Cipher(CipherError),
    /// The seed argument is not a base-10 64-bit integer.
    InvalidSeed(String),
}

impl fmt::Display for EcbLeakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "error accessing image file: {e}"),
            Self::Format(e) => write!(f, "{e}"),
            Self::Raster(e) => write!(f, "error rebuilding image: {e}"),
            Self::Cipher(e) => write!(f, "error encrypting pixels: {e}"),
            Self::InvalidSeed(arg) => write!(f, "error parsing seed: {arg:?} is not a 64-bit integer"),
        }
    }
}

impl std::error::Error for EcbLeakError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::Raster(e) => Some(e),
            Self::Cipher(e) => Some(e),
            Self::InvalidSeed(_) => None,
        }
    }
}

impl From<std::io::Error> for EcbLeakError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FormatError> for EcbLeakError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<RasterError> for EcbLeakError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

impl From<CipherError> for EcbLeakError {
    fn from(e: CipherError) -> Self {
        Self::Cipher(e)
    }
}
