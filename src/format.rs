// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! File-format dispatch by extension.
//!
//! [`FileFormat`] maps a normalized file extension to a decode/encode
//! capability pair. Dispatch is by extension, not content sniffing: a
//! PNG renamed to `.jpg` is a decode error, matching the contract of the
//! CLI. Both directions work on in-memory byte buffers, so a failed
//! encode can never leave a partial file behind.

use core::fmt;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, RgbImage};

/// Supported image file formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.jpg` / `.jpeg`
    Jpeg,
    /// `.png`
    Png,
}

/// Errors from format dispatch, decoding or encoding.
#[derive(Debug)]
pub enum FormatError {
    /// The file extension maps to no supported format.
    UnsupportedExtension(String),
    /// The data could not be decoded as the extension's format.
    Decode(image::ImageError),
    /// The image could not be encoded.
    Encode(image::ImageError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedExtension(ext) if ext.is_empty() => {
                write!(f, "unsupported image format: no file extension")
            }
            Self::UnsupportedExtension(ext) => write!(f, "unsupported image format: .{ext}"),
            Self::Decode(e) => write!(f, "error decoding image: {e}"),
            Self::Encode(e) => write!(f, "error encoding image: {e}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::UnsupportedExtension(_) => None,
        }
    }
}

impl FileFormat {
    /// Resolve the format from a path's extension, case-insensitively.
    ///
    /// # Errors
    /// [`FormatError::UnsupportedExtension`] for anything other than
    /// `.jpg`, `.jpeg` or `.png` (including a missing extension).
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(FormatError::UnsupportedExtension(ext)),
        }
    }

    fn as_image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }

    /// Decode `bytes` as this format.
    pub fn decode(self, bytes: &[u8]) -> Result<DynamicImage, FormatError> {
        image::load_from_memory_with_format(bytes, self.as_image_format())
            .map_err(FormatError::Decode)
    }

    /// Encode `image` as this format into a fresh byte buffer.
    pub fn encode(self, image: &RgbImage) -> Result<Vec<u8>, FormatError> {
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, self.as_image_format())
            .map_err(FormatError::Encode)?;
        Ok(out.into_inner())
    }
}
