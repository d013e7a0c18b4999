// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! End-to-end pipeline tests over in-memory PNG files.
//!
//! PNG is lossless, so the pixels decoded from the pipeline's output are
//! exactly the encrypted buffer — which makes the block-repetition
//! leakage directly observable.

use ecbleak::{encrypt_image, to_pixel_buffer, FileFormat, BLOCK_SIZE};
use image::{Rgb, RgbImage};

fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    FileFormat::Png.encode(&img).expect("png encode")
}

#[test]
fn flat_color_leaks_identical_blocks() {
    // 32×8 px → 768 buffer bytes, an exact multiple of both the pixel
    // stride (3) and the block size (16): every plaintext block is
    // identical, so every ciphertext block must be too.
    let input = solid_png(32, 8, [10, 200, 30]);
    let output = encrypt_image(&input, FileFormat::Png, 4242).unwrap();

    let decoded = FileFormat::Png.decode(&output).unwrap();
    let buffer = to_pixel_buffer(&decoded);
    assert_eq!(buffer.len(), 32 * 8 * 3);

    let first = &buffer[..BLOCK_SIZE];
    for (i, block) in buffer.chunks_exact(BLOCK_SIZE).enumerate() {
        assert_eq!(block, first, "ciphertext block {i} differs on uniform input");
    }
    // And the "encryption" did change the pixels.
    assert_ne!(first, &[10, 200, 30, 10, 200, 30, 10, 200, 30, 10, 200, 30, 10, 200, 30, 10][..]);
}

#[test]
fn two_regions_same_color_encrypt_alike() {
    // A two-band image: rows of color A, then rows of color B, then rows
    // of color A again. With a 16px-wide image each row is 48 buffer
    // bytes (three whole blocks), so equal-colored rows produce equal
    // runs of ciphertext blocks.
    let img = RgbImage::from_fn(16, 9, |_, y| {
        if (3..6).contains(&y) { Rgb([255, 255, 0]) } else { Rgb([0, 64, 128]) }
    });
    let input = FileFormat::Png.encode(&img).unwrap();
    let output = encrypt_image(&input, FileFormat::Png, 7).unwrap();

    let buffer = to_pixel_buffer(&FileFormat::Png.decode(&output).unwrap());
    let row = 16 * 3;
    let row_bytes = |r: usize| &buffer[r * row..(r + 1) * row];

    assert_eq!(row_bytes(0), row_bytes(8), "equal plaintext rows must encrypt equally");
    assert_eq!(row_bytes(3), row_bytes(5));
    assert_ne!(row_bytes(0), row_bytes(3), "different plaintext rows must differ");
}

#[test]
fn solid_red_2x2_example() {
    // 2×2 solid red: 12 buffer bytes pad to one 16-byte block, encrypted
    // once and truncated back to 12. At this size pixel boundaries do not
    // align with cipher blocks, so only length, dimensions and
    // determinism are asserted.
    let input = solid_png(2, 2, [255, 0, 0]);
    let a = encrypt_image(&input, FileFormat::Png, 99).unwrap();
    let b = encrypt_image(&input, FileFormat::Png, 99).unwrap();
    assert_eq!(a, b, "same seed must reproduce the same output bytes");

    let decoded = FileFormat::Png.decode(&a).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (2, 2));
    assert_eq!(to_pixel_buffer(&decoded).len(), 12);
}

#[test]
fn jpeg_pipeline_produces_same_dimension_jpeg() {
    let img = RgbImage::from_fn(24, 16, |x, _| Rgb([x as u8 * 10, 0, 0]));
    let mut input = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut input), image::ImageFormat::Jpeg)
        .unwrap();

    let output = encrypt_image(&input, FileFormat::Jpeg, 1).unwrap();
    assert_eq!(&output[..2], &[0xFF, 0xD8], "output is not a JPEG");
    let decoded = FileFormat::Jpeg.decode(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (24, 16));
}

#[test]
fn rgba_source_alpha_is_ignored() {
    // A translucent PNG encrypts to the same bytes as its opaque twin:
    // alpha never reaches the cipher.
    let translucent = image::RgbaImage::from_pixel(8, 8, image::Rgba([50, 100, 150, 30]));
    let opaque = image::RgbaImage::from_pixel(8, 8, image::Rgba([50, 100, 150, 255]));

    let mut png_a = Vec::new();
    translucent
        .write_to(&mut std::io::Cursor::new(&mut png_a), image::ImageFormat::Png)
        .unwrap();
    let mut png_b = Vec::new();
    opaque
        .write_to(&mut std::io::Cursor::new(&mut png_b), image::ImageFormat::Png)
        .unwrap();

    let a = encrypt_image(&png_a, FileFormat::Png, 5).unwrap();
    let b = encrypt_image(&png_b, FileFormat::Png, 5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn failure_produces_no_output_bytes() {
    let err = encrypt_image(b"\x89PNG but truncated", FileFormat::Png, 0);
    assert!(err.is_err());
}
