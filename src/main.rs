// Emojipack, a tool for packing emoji glyphs into kernel C sources.

// Copyright © 2023 Matthew Rothlisberger
// SPDX-License-Identifier: GPL-3.0-only

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, version 3 of the License
// only.

// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program (in the LICENSES directory). If not, see
// <https://www.gnu.org/licenses/>.

// Find full copyright information in the top level COPYRIGHT file.

// <>

// src/main.rs

// <>

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;

use emit::{Emitter, Glyph};
use fetch::{Fetched, Fetcher, HttpSource, Source};
use glyphs::GlyphSpec;
use raster::PixelSource;

mod emit;
mod fetch;
mod glyphs;
mod raster;

/// Download emoji PNGs and pack them into a C lookup module.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Project root the other paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Where fetched PNGs are kept between runs
    #[arg(long, default_value = "third_party/emoji/png")]
    cache_dir: PathBuf,
    /// Generated definitions file
    #[arg(long, default_value = "kernel/emoji_data.c")]
    source_out: PathBuf,
    /// Generated declarations file
    #[arg(long, default_value = "include/emoji.h")]
    header_out: PathBuf,
    /// Glyph edge length in pixels
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..=1024))]
    size: u32,
    /// Directory URL holding `<HEX>.png` images
    #[arg(long, default_value = fetch::OPENMOJI_BASE)]
    base_url: String,
    /// What the header includes for `uint32_t`
    #[arg(long, default_value = "<stdint.h>")]
    header_include: String,
    /// Fill every glyph with a solid placeholder instead of decoding
    #[arg(long)]
    placeholder: bool,
    /// Fail, writing nothing, if any listed glyph is unavailable
    #[arg(long)]
    strict: bool,
}

#[derive(Debug)]
struct Report {
    processed: usize,
    missing: Vec<u32>,
    source_out: PathBuf,
    header_out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let source = HttpSource::new()?;

    let report = run(&args, glyphs::DEFAULT_GLYPHS, source)?;

    if !report.missing.is_empty() {
        log::warn!(
            "{} of {} emoji skipped",
            report.missing.len(),
            report.processed + report.missing.len()
        );
    }

    println!(
        "\nDone! Add {} to your Makefile; {} declares its interface.",
        report.source_out.display(),
        report.header_out.display()
    );

    Ok(())
}

fn run<S: Source>(args: &Args, list: &[GlyphSpec], source: S) -> Result<Report> {
    glyphs::check_unique(list)?;

    for spec in list.iter().filter(|s| !glyphs::is_emoji(s.codepoint)) {
        log::warn!(
            "U+{:04X} ({}) is outside every emoji_is_emoji range",
            spec.codepoint,
            spec.name
        );
    }

    let cache_dir = args.root.join(&args.cache_dir);
    let source_out = args.root.join(&args.source_out);
    let header_out = args.root.join(&args.header_out);

    fs::create_dir_all(&cache_dir)
        .with_context(|| format!("cannot create cache directory {cache_dir:?}"))?;

    let pixels = PixelSource::detect(args.placeholder);
    if pixels.is_placeholder() {
        println!("No image decoder in use, filling glyphs with placeholder");
    }

    let fetcher = Fetcher::new(source, &args.base_url, &cache_dir);

    println!("Downloading {} emoji...", list.len());

    let (glyphs, missing) = collect(list, &fetcher, pixels, args.size);

    println!("\nSuccessfully processed {} emoji", glyphs.len());

    if args.strict && !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|cp| format!("U+{cp:04X}")).collect();
        bail!(
            "{} emoji unavailable, nothing written: {}",
            missing.len(),
            names.join(", ")
        );
    }

    let emitter = Emitter {
        header_include: args.header_include.clone(),
        ..Emitter::new(args.size)
    };

    // render both files fully before touching either
    let definitions = emitter.definitions(&glyphs)?;
    let declarations = emitter.declarations()?;

    write_out(&source_out, &definitions)?;
    write_out(&header_out, &declarations)?;

    Ok(Report {
        processed: glyphs.len(),
        missing,
        source_out,
        header_out,
    })
}

/// Fetch and rasterize each listed glyph in turn. Unavailable glyphs are
/// reported and left out; their codepoints come back in the second list.
fn collect<S: Source>(
    list: &[GlyphSpec],
    fetcher: &Fetcher<S>,
    pixels: PixelSource,
    size: u32,
) -> (Vec<Glyph>, Vec<u32>) {
    let mut glyphs = Vec::with_capacity(list.len());
    let mut missing = vec![];

    for spec in list {
        let cp = spec.codepoint;

        let fetched = match fetcher.fetch(cp) {
            Ok(f) => f,
            Err(e) => {
                println!("Downloading U+{cp:04X}... FAILED: {e}");
                log::debug!("skipping U+{cp:04X} ({}): {e:?}", spec.name);
                missing.push(cp);
                continue;
            }
        };

        if let Fetched::Downloaded(_) = fetched {
            println!("Downloading U+{cp:04X}... OK");
        }

        glyphs.push(Glyph {
            codepoint: cp,
            name: spec.name,
            pixels: pixels.rasterize(fetched.path(), size),
        });
    }

    (glyphs, missing)
}

fn write_out(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory {parent:?}"))?;
    }

    fs::write(path, text).with_context(|| format!("cannot write {path:?}"))?;

    println!("Generated {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        emit::tests::{array_values, table_entries},
        fetch::tests::FakeSource,
    };

    const BASE: &str = "https://example.invalid/openmoji";

    const LIST: &[GlyphSpec] = &[
        GlyphSpec { codepoint: 0x1F600, name: "grinning" },
        GlyphSpec { codepoint: 0x2764, name: "heart" },
    ];

    fn args(root: &Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "emojipack".to_owned(),
            "--root".to_owned(),
            root.display().to_string(),
            "--base-url".to_owned(),
            BASE.to_owned(),
            "--size".to_owned(),
            "4".to_owned(),
            "--placeholder".to_owned(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::parse_from(argv)
    }

    #[test]
    fn defaults() {
        let a = Args::parse_from(["emojipack"]);
        assert_eq!(a.size, 32);
        assert_eq!(a.base_url, fetch::OPENMOJI_BASE);
        assert_eq!(a.cache_dir, PathBuf::from("third_party/emoji/png"));
        assert_eq!(a.source_out, PathBuf::from("kernel/emoji_data.c"));
        assert_eq!(a.header_out, PathBuf::from("include/emoji.h"));
        assert!(!a.placeholder && !a.strict);
    }

    #[test]
    fn size_bounds() {
        assert!(Args::try_parse_from(["emojipack", "--size", "0"]).is_err());
        assert!(Args::try_parse_from(["emojipack", "--size", "1025"]).is_err());
        assert_eq!(Args::parse_from(["emojipack", "--size", "1"]).size, 1);
        assert_eq!(Args::parse_from(["emojipack", "--size", "1024"]).size, 1024);
    }

    #[test]
    fn placeholder_pipeline_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let net = FakeSource::serving(BASE, &[0x1F600, 0x2764], b"not decoded");

        let report = run(&args(dir.path(), &[]), LIST, &net).unwrap();
        assert_eq!(report.processed, 2);
        assert!(report.missing.is_empty());

        let src = fs::read_to_string(&report.source_out).unwrap();
        let entries: Vec<u32> = table_entries(&src).into_iter().map(|(cp, _)| cp).collect();
        assert_eq!(entries, vec![0x1F600, 0x2764]);

        for cp in [0x1F600, 0x2764] {
            assert_eq!(array_values(&src, cp), vec![0xFFFFC800; 16]);
        }

        let header = fs::read_to_string(&report.header_out).unwrap();
        assert!(header.contains("#define EMOJI_SIZE 4\n"));
        assert!(dir.path().join("third_party/emoji/png/1F600.png").exists());
    }

    #[test]
    fn unavailable_glyph_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let net = FakeSource::serving(BASE, &[0x2764], b"x");

        let report = run(&args(dir.path(), &[]), LIST, &net).unwrap();
        assert_eq!(report.processed, 1);
        assert_eq!(report.missing, vec![0x1F600]);

        let src = fs::read_to_string(&report.source_out).unwrap();
        assert_eq!(table_entries(&src).len(), 1);
        assert!(src.contains("#define EMOJI_COUNT 1\n"));
        assert!(src.contains("    return 4;\n"));
    }

    #[test]
    fn nothing_available_still_emits() {
        let dir = tempfile::tempdir().unwrap();
        let net = FakeSource::default();

        let report = run(&args(dir.path(), &[]), LIST, &net).unwrap();
        assert_eq!(report.processed, 0);
        assert_eq!(report.missing, vec![0x1F600, 0x2764]);

        let src = fs::read_to_string(&report.source_out).unwrap();
        assert!(src.contains("int emoji_get_size(void) {\n    return 4;\n}"));
        assert!(table_entries(&src).is_empty());
    }

    #[test]
    fn strict_mode_writes_nothing_on_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let net = FakeSource::serving(BASE, &[0x2764], b"x");

        let err = run(&args(dir.path(), &["--strict"]), LIST, &net).unwrap_err();
        assert!(err.to_string().contains("U+1F600"), "{err}");
        assert!(!dir.path().join("kernel/emoji_data.c").exists());
        assert!(!dir.path().join("include/emoji.h").exists());
    }

    #[test]
    fn warm_rerun_is_offline_and_identical() {
        let dir = tempfile::tempdir().unwrap();
        let a = args(dir.path(), &[]);

        let cold = FakeSource::serving(BASE, &[0x1F600, 0x2764], b"x");
        let first = run(&a, LIST, &cold).unwrap();
        let src1 = fs::read(&first.source_out).unwrap();
        let hdr1 = fs::read(&first.header_out).unwrap();

        let offline = FakeSource::default();
        let second = run(&a, LIST, &offline).unwrap();

        assert!(offline.requests.borrow().is_empty());
        assert_eq!(second.processed, 2);
        assert_eq!(fs::read(&second.source_out).unwrap(), src1);
        assert_eq!(fs::read(&second.header_out).unwrap(), hdr1);
    }

    #[test]
    fn duplicate_list_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let net = FakeSource::default();
        let list = [LIST[0], LIST[1], LIST[0]];

        assert!(run(&args(dir.path(), &[]), &list, &net).is_err());
        assert!(net.requests.borrow().is_empty());
    }

    #[test]
    fn custom_header_include() {
        let dir = tempfile::tempdir().unwrap();
        let net = FakeSource::serving(BASE, &[0x1F600, 0x2764], b"x");

        let report = run(
            &args(dir.path(), &["--header-include", "\"types.h\""]),
            LIST,
            &net,
        )
        .unwrap();

        let header = fs::read_to_string(&report.header_out).unwrap();
        assert!(header.contains("#include \"types.h\"\n"));
    }
}
