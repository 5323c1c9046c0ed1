// Emojipack, a tool for packing emoji glyphs into kernel C sources.

// Copyright © 2023 Matthew Rothlisberger
// SPDX-License-Identifier: GPL-3.0-only

// Emojipack is licensed under the terms of the GNU General Public
// License, version 3 only. See the top level LICENSES directory for
// the license text.

// Find full copyright information in the top level COPYRIGHT file.

// <>

// src/emit.rs

// <>

//! C output: `emoji_data.c` holds one packed array per glyph, the
//! codepoint table and the three accessor functions; `emoji.h` exposes
//! only the size constant and the function prototypes.

use std::fmt::Write;

use crate::{glyphs::EMOJI_RANGES, raster::Rgba};

/// One rasterized glyph, in the order it was processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub codepoint: u32,
    pub name: &'static str,
    pub pixels: Vec<Rgba>,
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("U+{codepoint:04X} has {got} pixels, expected {want}")]
    PixelCount { codepoint: u32, got: usize, want: usize },
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// `0xAARRGGBB`
pub fn pack([r, g, b, a]: Rgba) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub fn array_name(codepoint: u32) -> String {
    format!("emoji_{codepoint:04X}_data")
}

pub struct Emitter {
    /// Glyph edge length in pixels
    pub size: u32,
    /// Include line providing `uint32_t` to header consumers
    pub header_include: String,
}

impl Emitter {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            header_include: "<stdint.h>".to_owned(),
        }
    }

    pub fn definitions(&self, glyphs: &[Glyph]) -> Result<String, EmitError> {
        let n = self.size;
        let want = n as usize * n as usize;

        for gl in glyphs {
            if gl.pixels.len() != want {
                return Err(EmitError::PixelCount {
                    codepoint: gl.codepoint,
                    got: gl.pixels.len(),
                    want,
                });
            }
        }

        let mut out = String::new();

        writeln!(out, "/* Auto-generated emoji sprite data - DO NOT EDIT */")?;
        writeln!(out, "/* License: CC BY-SA 4.0 (OpenMoji) */")?;
        writeln!(out)?;
        writeln!(out, "#include <stdint.h>")?;
        writeln!(out, "#include <stddef.h>")?;
        writeln!(out)?;
        writeln!(out, "#define EMOJI_SIZE {n}")?;
        writeln!(out, "#define EMOJI_COUNT {}", glyphs.len())?;
        writeln!(out)?;

        for gl in glyphs {
            writeln!(out, "/* U+{:04X} {} */", gl.codepoint, gl.name)?;
            writeln!(
                out,
                "static const uint32_t {}[{n}*{n}] = {{",
                array_name(gl.codepoint)
            )?;
            for row in gl.pixels.chunks(n as usize) {
                out.push_str("    ");
                for &px in row {
                    write!(out, "0x{:08X},", pack(px))?;
                }
                out.push('\n');
            }
            writeln!(out, "}};")?;
            writeln!(out)?;
        }

        writeln!(out, "typedef struct {{")?;
        writeln!(out, "    uint32_t codepoint;")?;
        writeln!(out, "    const uint32_t* data;")?;
        writeln!(out, "}} emoji_entry_t;")?;
        writeln!(out)?;

        writeln!(out, "static const emoji_entry_t emoji_table[] = {{")?;
        for gl in glyphs {
            writeln!(
                out,
                "    {{ 0x{:04X}, {} }}, /* {} */",
                gl.codepoint,
                array_name(gl.codepoint),
                gl.name
            )?;
        }
        if glyphs.is_empty() {
            // C forbids empty initializers; never scanned since EMOJI_COUNT is 0
            writeln!(out, "    {{ 0, NULL }},")?;
        }
        writeln!(out, "}};")?;
        writeln!(out)?;

        writeln!(out, "const uint32_t* emoji_lookup(uint32_t codepoint) {{")?;
        writeln!(out, "    for (size_t i = 0; i < EMOJI_COUNT; i++) {{")?;
        writeln!(out, "        if (emoji_table[i].codepoint == codepoint) {{")?;
        writeln!(out, "            return emoji_table[i].data;")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "    return NULL;")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "int emoji_is_emoji(uint32_t codepoint) {{")?;
        for (lo, hi, block) in EMOJI_RANGES {
            writeln!(out, "    /* {block} */")?;
            writeln!(
                out,
                "    if (codepoint >= 0x{lo:04X} && codepoint <= 0x{hi:04X}) return 1;"
            )?;
        }
        writeln!(out, "    return 0;")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "int emoji_get_size(void) {{")?;
        writeln!(out, "    return {n};")?;
        writeln!(out, "}}")?;

        Ok(out)
    }

    pub fn declarations(&self) -> Result<String, EmitError> {
        let mut out = String::new();

        writeln!(out, "/* Auto-generated emoji header - DO NOT EDIT */")?;
        writeln!(out, "#ifndef EMOJI_H")?;
        writeln!(out, "#define EMOJI_H")?;
        writeln!(out)?;
        writeln!(out, "#include {}", self.header_include)?;
        writeln!(out)?;
        writeln!(out, "#define EMOJI_SIZE {}", self.size)?;
        writeln!(out)?;
        writeln!(out, "/* Look up emoji pixel data by codepoint. Returns NULL if not found. */")?;
        writeln!(out, "const uint32_t* emoji_lookup(uint32_t codepoint);")?;
        writeln!(out)?;
        writeln!(out, "/* Check if codepoint is in emoji range. */")?;
        writeln!(out, "int emoji_is_emoji(uint32_t codepoint);")?;
        writeln!(out)?;
        writeln!(out, "/* Get emoji sprite size (width/height in pixels). */")?;
        writeln!(out, "int emoji_get_size(void);")?;
        writeln!(out)?;
        writeln!(out, "#endif /* EMOJI_H */")?;

        Ok(out)
    }
}
