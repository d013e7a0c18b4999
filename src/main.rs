// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/ecbleak

//! CLI: ECB-encrypt an image file's pixels and write `ecb_<name>` next
//! to the working directory.

use std::fs;
use std::path::Path;

use ecbleak::{EcbLeakError, FileFormat};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: ecbleak <image-file> [seed]");
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(input: &str, seed_arg: Option<&str>) -> Result<(), EcbLeakError> {
    // Resolve the seed first: when generated, it is the only record of
    // the key, so it must be announced before anything else can fail.
    let seed = match seed_arg {
        Some(arg) => arg
            .parse::<i64>()
            .map_err(|_| EcbLeakError::InvalidSeed(arg.to_string()))?,
        None => {
            let seed = ecbleak::random_seed();
            println!("Seed: {seed}");
            seed
        }
    };

    let input_path = Path::new(input);
    let format = FileFormat::from_path(input_path)?;
    let image_bytes = fs::read(input_path)?;

    let output_bytes = ecbleak::encrypt_image(&image_bytes, format, seed)?;

    // from_path already required an extension, so a file name exists.
    let basename = input_path
        .file_name()
        .expect("path with a recognized extension has a file name")
        .to_string_lossy();
    fs::write(format!("ecb_{basename}"), &output_bytes)?;
    Ok(())
}
