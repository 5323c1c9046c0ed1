// Emojipack, a tool for packing emoji glyphs into kernel C sources.

// Copyright © 2023 Matthew Rothlisberger
// SPDX-License-Identifier: GPL-3.0-only

// Emojipack is licensed under the terms of the GNU General Public
// License, version 3 only. See the top level LICENSES directory for
// the license text.

// Find full copyright information in the top level COPYRIGHT file.

// <>

// src/raster.rs

// <>

use std::path::Path;

/// Red, green, blue, alpha
pub type Rgba = [u8; 4];

/// Amber square used when no real decoder is in play
pub const PLACEHOLDER_COLOR: Rgba = [0xFF, 0xC8, 0x00, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSource {
    #[cfg(feature = "decode")]
    Decoder,
    Placeholder(Rgba),
}

impl PixelSource {
    /// Pick the decoder if this build has one, unless told otherwise.
    #[cfg(feature = "decode")]
    pub fn detect(force_placeholder: bool) -> Self {
        if force_placeholder {
            PixelSource::Placeholder(PLACEHOLDER_COLOR)
        } else {
            PixelSource::Decoder
        }
    }

    #[cfg(not(feature = "decode"))]
    pub fn detect(_force_placeholder: bool) -> Self {
        PixelSource::Placeholder(PLACEHOLDER_COLOR)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PixelSource::Placeholder(_))
    }

    /// Exactly `n * n` pixels, row-major, top row first.
    pub fn rasterize(&self, path: &Path, n: u32) -> Vec<Rgba> {
        match *self {
            #[cfg(feature = "decode")]
            PixelSource::Decoder => match decode(path, n) {
                Ok(pixels) => pixels,
                Err(e) => {
                    log::warn!("cannot decode {path:?} ({e}), using placeholder");
                    solid(PLACEHOLDER_COLOR, n)
                }
            },
            PixelSource::Placeholder(color) => solid(color, n),
        }
    }
}

fn solid(color: Rgba, n: u32) -> Vec<Rgba> {
    vec![color; n as usize * n as usize]
}

#[cfg(feature = "decode")]
fn decode(path: &Path, n: u32) -> Result<Vec<Rgba>, image::ImageError> {
    let orig = image::io::Reader::open(path)?
        .with_guessed_format()?
        .decode()?;

    let scaled = orig
        .resize_exact(n, n, image::imageops::FilterType::Lanczos3)
        .into_rgba8();

    Ok(scaled.pixels().map(|p| p.0).collect())
}
