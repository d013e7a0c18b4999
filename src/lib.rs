// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! # ecbleak
//!
//! Visual demonstration of why ECB is a broken block-cipher mode: the
//! pixel data of an image is encrypted block-by-block with AES-128 and
//! written back out as an image of the same dimensions. Because ECB maps
//! identical plaintext blocks to identical ciphertext blocks, flat-color
//! regions and edges of the original remain clearly visible in the
//! "encrypted" result.
//!
//! The pipeline is deliberately insecure — that is the point. There is no
//! decryption path: the padding policy truncates encrypted bytes on
//! return, so the output is not even decryptable as whole blocks.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ecbleak::{encrypt_image, FileFormat};
//!
//! let input = std::fs::read("photo.png").unwrap();
//! let output = ecbleak::encrypt_image(&input, FileFormat::Png, 42).unwrap();
//! std::fs::write("ecb_photo.png", &output).unwrap();
//! ```

pub mod ecb;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod raster;

pub use ecb::error::CipherError;
pub use ecb::keygen::{derive_key, random_seed};
pub use ecb::{BLOCK_SIZE, KEY_SIZE};
pub use error::EcbLeakError;
pub use format::{FileFormat, FormatError};
pub use pipeline::encrypt_image;
pub use raster::{from_pixel_buffer, to_pixel_buffer, RasterError};
