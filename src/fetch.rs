// Emojipack, a tool for packing emoji glyphs into kernel C sources.

// Copyright © 2023 Matthew Rothlisberger
// SPDX-License-Identifier: GPL-3.0-only

// Emojipack is licensed under the terms of the GNU General Public
// License, version 3 only. See the top level LICENSES directory for
// the license text.

// Find full copyright information in the top level COPYRIGHT file.

// <>

// src/fetch.rs

// <>

use std::{
    io,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// OpenMoji 72x72 color PNGs (CC BY-SA 4.0)
pub const OPENMOJI_BASE: &str =
    "https://raw.githubusercontent.com/hfg-gmuend/openmoji/master/color/72x72";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("transfer failed: {0}")]
    Transfer(#[source] io::Error),
    #[error("cannot write {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Anything that can stream the body at a URL into `out`
pub trait Source {
    fn get(&self, url: &str, out: &mut dyn io::Write) -> Result<u64, FetchError>;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("emojipack/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl Source for HttpSource {
    fn get(&self, url: &str, out: &mut dyn io::Write) -> Result<u64, FetchError> {
        log::debug!("GET {url}");

        let mut response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        io::copy(&mut response, out).map_err(FetchError::Transfer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Cached(PathBuf),
    Downloaded(PathBuf),
}

impl Fetched {
    pub fn path(&self) -> &Path {
        match self {
            Fetched::Cached(p) | Fetched::Downloaded(p) => p,
        }
    }
}

pub fn cache_file_name(codepoint: u32) -> String {
    format!("{codepoint:04X}.png")
}

pub struct Fetcher<S> {
    source: S,
    base_url: String,
    cache_dir: PathBuf,
}

impl<S: Source> Fetcher<S> {
    pub fn new(source: S, base_url: &str, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            base_url: base_url.strip_suffix('/').unwrap_or(base_url).to_owned(),
            cache_dir: cache_dir.into(),
        }
    }

    pub fn url_for(&self, codepoint: u32) -> String {
        format!("{}/{}", self.base_url, cache_file_name(codepoint))
    }

    /// Produce a local image for `codepoint`, downloading only when the
    /// cache has no file for it. Cached files are trusted as-is.
    pub fn fetch(&self, codepoint: u32) -> Result<Fetched, FetchError> {
        let path = self.cache_dir.join(cache_file_name(codepoint));

        if path.exists() {
            log::debug!("U+{codepoint:04X} cached at {path:?}");
            return Ok(Fetched::Cached(path));
        }

        let io_err = |source: io::Error| FetchError::Io {
            path: path.clone(),
            source,
        };

        // scratch file beside the entry, renamed in only when complete;
        // dropping it on an error path deletes it
        let mut part = NamedTempFile::new_in(&self.cache_dir).map_err(io_err)?;

        let len = self.source.get(&self.url_for(codepoint), part.as_file_mut())?;
        part.as_file().sync_all().map_err(io_err)?;
        part.persist(&path).map_err(|e| io_err(e.error))?;

        log::debug!("U+{codepoint:04X}: {len} bytes into {path:?}");

        Ok(Fetched::Downloaded(path))
    }
}
