// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! Pixel-domain conversion between decoded images and flat RGB buffers.
//!
//! Decoders hand back whatever pixel layout the file used (indexed,
//! grayscale, RGB, RGBA, 16-bit). The cipher must see one canonical
//! layout, so everything is normalized to 3 bytes per pixel (R, G, B) in
//! row-major order with no padding between pixels or rows. Alpha is
//! dropped on the way in and absent on the way out — the reconstructed
//! image carries no alpha channel, which every encoder treats as fully
//! opaque.

use core::fmt;

use image::{DynamicImage, RgbImage};

/// Errors from pixel buffer reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The buffer length does not equal `width * height * 3`.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "pixel buffer length mismatch: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// Flatten a decoded image into a row-major R,G,B byte buffer.
///
/// Converts to RGBA8 first so indexed, grayscale and 16-bit sources all
/// land in one known layout, then drops the alpha byte of every pixel
/// (even when it is not opaque). The result is exactly
/// `width * height * 3` bytes, y-outer x-inner.
pub fn to_pixel_buffer(image: &DynamicImage) -> Vec<u8> {
    let rgba = image.to_rgba8();
    let mut buffer = Vec::with_capacity(rgba.len() / 4 * 3);
    for pixel in rgba.pixels() {
        buffer.extend_from_slice(&pixel.0[..3]);
    }
    buffer
}

/// Rebuild a `width` × `height` RGB image from a flat pixel buffer.
///
/// Reads 3 bytes per pixel in the same row-major order
/// [`to_pixel_buffer`] writes them. The buffer is consumed; its length
/// must be exactly `width * height * 3` or the call fails with
/// [`RasterError::LengthMismatch`] rather than truncating or reading out
/// of bounds.
pub fn from_pixel_buffer(buffer: Vec<u8>, width: u32, height: u32) -> Result<RgbImage, RasterError> {
    let expected = width as usize * height as usize * 3;
    if buffer.len() != expected {
        return Err(RasterError::LengthMismatch { expected, actual: buffer.len() });
    }
    let image = RgbImage::from_raw(width, height, buffer)
        .expect("buffer length checked against dimensions");
    Ok(image)
}
