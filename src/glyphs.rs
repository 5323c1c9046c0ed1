// Emojipack, a tool for packing emoji glyphs into kernel C sources.

// Copyright © 2023 Matthew Rothlisberger
// SPDX-License-Identifier: GPL-3.0-only

// Emojipack is licensed under the terms of the GNU General Public
// License, version 3 only. See the top level LICENSES directory for
// the license text.

// Find full copyright information in the top level COPYRIGHT file.

// <>

// src/glyphs.rs

// <>

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSpec {
    pub codepoint: u32,
    pub name: &'static str,
}

const fn g(codepoint: u32, name: &'static str) -> GlyphSpec {
    GlyphSpec { codepoint, name }
}

/// Emoji packed by default, in table order
pub const DEFAULT_GLYPHS: &[GlyphSpec] = &[
    // smileys
    g(0x1F600, "grinning"),
    g(0x1F601, "beaming"),
    g(0x1F602, "joy"),
    g(0x1F603, "smiley"),
    g(0x1F604, "smile"),
    g(0x1F605, "sweat_smile"),
    g(0x1F606, "laughing"),
    g(0x1F609, "wink"),
    g(0x1F60A, "blush"),
    g(0x1F60D, "heart_eyes"),
    g(0x1F60E, "sunglasses"),
    g(0x1F60F, "smirk"),
    g(0x1F610, "neutral"),
    g(0x1F612, "unamused"),
    g(0x1F614, "pensive"),
    g(0x1F616, "confounded"),
    g(0x1F618, "kissing_heart"),
    g(0x1F61B, "tongue"),
    g(0x1F61C, "wink_tongue"),
    g(0x1F61D, "squint_tongue"),
    g(0x1F61E, "disappointed"),
    g(0x1F620, "angry"),
    g(0x1F621, "pouting"),
    g(0x1F622, "cry"),
    g(0x1F623, "persevere"),
    g(0x1F624, "triumph"),
    g(0x1F625, "relieved_sweat"),
    g(0x1F628, "fearful"),
    g(0x1F629, "weary"),
    g(0x1F62A, "sleepy"),
    g(0x1F62B, "tired"),
    g(0x1F62D, "sob"),
    g(0x1F62E, "open_mouth"),
    g(0x1F62F, "hushed"),
    g(0x1F630, "cold_sweat"),
    g(0x1F631, "scream"),
    g(0x1F632, "astonished"),
    g(0x1F633, "flushed"),
    g(0x1F634, "sleeping"),
    g(0x1F635, "dizzy"),
    g(0x1F637, "mask"),
    g(0x1F642, "slight_smile"),
    g(0x1F643, "upside_down"),
    g(0x1F644, "rolling_eyes"),
    // gestures
    g(0x1F44D, "thumbsup"),
    g(0x1F44E, "thumbsdown"),
    g(0x1F44F, "clap"),
    g(0x1F44B, "wave"),
    g(0x1F44C, "ok_hand"),
    g(0x1F64F, "pray"),
    g(0x270C, "victory"),
    g(0x2764, "heart"),
    // objects
    g(0x1F525, "fire"),
    g(0x2B50, "star"),
    g(0x1F31F, "star2"),
    g(0x1F4AF, "100"),
    g(0x1F389, "tada"),
    g(0x1F38A, "confetti"),
    g(0x1F381, "gift"),
    g(0x1F3C6, "trophy"),
    // animals
    g(0x1F436, "dog"),
    g(0x1F431, "cat"),
    g(0x1F42D, "mouse"),
    g(0x1F430, "rabbit"),
    g(0x1F43B, "bear"),
    g(0x1F437, "pig"),
    g(0x1F438, "frog"),
    g(0x1F412, "monkey"),
    g(0x1F414, "chicken"),
    g(0x1F427, "penguin"),
    // food
    g(0x1F354, "hamburger"),
    g(0x1F355, "pizza"),
    g(0x1F382, "birthday"),
    g(0x2615, "coffee"),
    g(0x1F37A, "beer"),
    // weather and nature
    g(0x2600, "sunny"),
    g(0x2601, "cloud"),
    g(0x2614, "umbrella"),
    g(0x26A1, "zap"),
    g(0x1F308, "rainbow"),
    // symbols
    g(0x2705, "check"),
    g(0x274C, "x"),
    g(0x2753, "question"),
    g(0x2757, "exclamation"),
    g(0x1F4A1, "bulb"),
    g(0x1F4AC, "speech"),
    g(0x1F4AD, "thought"),
    g(0x1F6A8, "rotating_light"),
    g(0x26A0, "warning"),
];

/// Inclusive codepoint ranges the kernel treats as emoji, with their
/// Unicode block labels
pub const EMOJI_RANGES: [(u32, u32, &str); 3] = [
    (0x2600, 0x26FF, "Miscellaneous Symbols"),
    (0x2700, 0x27BF, "Dingbats"),
    (0x1F300, 0x1FFFF, "Emoticons and beyond"),
];

pub fn is_emoji(codepoint: u32) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|&(lo, hi, _)| (lo..=hi).contains(&codepoint))
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("U+{codepoint:04X} is listed twice (as {first} and {second})")]
    Duplicate {
        codepoint: u32,
        first: &'static str,
        second: &'static str,
    },
}

/// Reject lists naming a codepoint more than once; the generated C
/// would define the same array symbol twice.
pub fn check_unique(list: &[GlyphSpec]) -> Result<(), ListError> {
    let mut seen: HashMap<u32, &'static str> = HashMap::with_capacity(list.len());

    for spec in list {
        if let Some(first) = seen.insert(spec.codepoint, spec.name) {
            return Err(ListError::Duplicate {
                codepoint: spec.codepoint,
                first,
                second: spec.name,
            });
        }
    }

    Ok(())
}
