// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! The decode → flatten → encrypt → rebuild → encode pipeline.

use log::debug;

use crate::ecb;
use crate::error::EcbLeakError;
use crate::format::FileFormat;
use crate::raster;

/// ECB-encrypt the pixel data of an encoded image.
///
/// Decodes `image_bytes` as `format`, flattens the pixels to a row-major
/// RGB buffer, encrypts that buffer under the key derived from `seed`,
/// rebuilds an image of the same dimensions and encodes it back as
/// `format`. Everything happens in memory; the same seed on the same
/// input always produces the same output bytes.
///
/// # Errors
/// - [`EcbLeakError::Format`] if the data does not decode as `format`,
///   or the result does not encode.
/// - [`EcbLeakError::Cipher`] / [`EcbLeakError::Raster`] on internal
///   invariant violations (these cannot occur through this entry point:
///   the key has the right size by construction and the buffer keeps its
///   length through the cipher).
pub fn encrypt_image(
    image_bytes: &[u8],
    format: FileFormat,
    seed: i64,
) -> Result<Vec<u8>, EcbLeakError> {
    // 1. Decode and flatten to the canonical RGB buffer.
    let image = format.decode(image_bytes)?;
    let (width, height) = (image.width(), image.height());
    debug!("decoded {width}x{height} image ({} bytes)", image_bytes.len());
    let pixels = raster::to_pixel_buffer(&image);

    // 2. Encrypt the buffer block-by-block.
    let key = ecb::keygen::derive_key(seed);
    let encrypted = ecb::encrypt(&pixels, &key)?;
    debug!("encrypted {} pixel bytes", encrypted.len());

    // 3. Rebuild at the original dimensions and encode.
    let output = raster::from_pixel_buffer(encrypted, width, height)?;
    format.encode(&output).map_err(EcbLeakError::from)
}
