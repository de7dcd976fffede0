//
// mojib - emoji test data
//
// Copyright 2026 moji contributors
//
// This file is part of moji.
//
// moji is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// moji is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with moji. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

//! Unicode's `emoji-test.txt`, the list of every emoji sequence with its
//! qualification status.
//!
//! The file is not shipped with the library; [`fetch`] downloads it once
//! into a cache path and [`EmojiTest`] parses it.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    components::{classify_str, ComponentRecord},
    error::{Error, ErrorKind, Result, ResultIntoError},
    table::ComponentTable,
};

pub mod parser;

pub const DEFAULT_URL: &str = "https://unicode.org/Public/emoji/15.1/emoji-test.txt";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Qualification {
    Component,
    FullyQualified,
    MinimallyQualified,
    Unqualified,
}

impl Qualification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified",
            Self::Unqualified => "unqualified",
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

impl FromStr for Qualification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "component" => Self::Component,
            "fully-qualified" => Self::FullyQualified,
            "minimally-qualified" => Self::MinimallyQualified,
            "unqualified" => Self::Unqualified,
            other => {
                return Err(Error::new(format!("Unknown qualification status `{}`", other))
                    .set_kind(ErrorKind::ValueError))
            }
        })
    }
}

/// One data line of `emoji-test.txt`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmojiTestEntry {
    pub codepoints: Vec<u32>,
    pub status: Qualification,
    pub glyph: String,
    /// Emoji version without the leading `E`.
    pub version: String,
    pub name: String,
    pub group: String,
    pub subgroup: String,
}

impl EmojiTestEntry {
    /// Classify the literal glyph of the line.
    pub fn record(&self) -> ComponentRecord {
        classify_str(&self.glyph)
    }

    pub fn is_zwj_sequence(&self) -> bool {
        self.codepoints.contains(&crate::codepoint::ZWJ)
    }

    /// Whether the canonical spelling of [`EmojiTestEntry::record`] is the
    /// glyph itself. Flag and keycap sequences are not, for example, since
    /// their components are not joined with ZWJ.
    pub fn is_representable(&self) -> bool {
        self.record().to_emoji_string() == self.glyph
    }
}

#[derive(Clone, Debug, Default)]
pub struct EmojiTest {
    pub entries: Vec<EmojiTestEntry>,
    /// Lines that looked like data but failed to parse.
    pub skipped: usize,
}

impl EmojiTest {
    pub fn parse(input: &str) -> Self {
        let mut ret = Self::default();
        let mut group = String::new();
        let mut subgroup = String::new();
        for (lineno, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                let comment = comment.trim_start();
                if let Some(g) = comment.strip_prefix("group:") {
                    group = g.trim().to_string();
                    subgroup.clear();
                } else if let Some(s) = comment.strip_prefix("subgroup:") {
                    subgroup = s.trim().to_string();
                }
                continue;
            }
            match parser::entry(line) {
                Ok((_, mut entry)) => {
                    entry.group.clone_from(&group);
                    entry.subgroup.clone_from(&subgroup);
                    ret.entries.push(entry);
                }
                Err(err) => {
                    log::debug!("Skipping line {}: {:?}: {}", lineno + 1, line, err);
                    ret.skipped += 1;
                }
            }
        }
        ret
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .chain_err_summary(|| format!("Could not read emoji data file {}", path.display()))?;
        let text = String::from_utf8(bytes)
            .chain_err_summary(|| format!("Emoji data file {} is not UTF-8", path.display()))?;
        let ret = Self::parse(&text);
        log::trace!(
            "Parsed {} entries from {}, skipped {} lines.",
            ret.entries.len(),
            path.display(),
            ret.skipped
        );
        Ok(ret)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmojiTestEntry> {
        self.entries.iter()
    }

    /// Fully-qualified entries. Those that are
    /// [representable](EmojiTestEntry::is_representable) round trip through
    /// an [`EmojiId`](crate::EmojiId) and [`EmojiTest::component_table`].
    pub fn fully_qualified(&self) -> impl Iterator<Item = &EmojiTestEntry> + '_ {
        self.entries
            .iter()
            .filter(|e| e.status == Qualification::FullyQualified)
    }

    /// Component table of all fully-qualified entries.
    pub fn component_table(&self) -> ComponentTable {
        let mut table = ComponentTable::new();
        for entry in self.fully_qualified() {
            table.insert(&entry.record());
        }
        table
    }
}

impl<'a> IntoIterator for &'a EmojiTest {
    type Item = &'a EmojiTestEntry;
    type IntoIter = std::slice::Iter<'a, EmojiTestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fetched {
    /// File already existed and was not downloaded again.
    Cached(PathBuf),
    Downloaded(PathBuf),
}

impl Fetched {
    pub fn path(&self) -> &Path {
        match self {
            Self::Cached(p) | Self::Downloaded(p) => p,
        }
    }
}

/// Make sure `path` holds the data file, downloading it from `url` if it
/// does not exist yet.
pub fn fetch(url: &str, path: &Path) -> Result<Fetched> {
    if path.exists() {
        log::trace!("Using cached emoji data file {}", path.display());
        return Ok(Fetched::Cached(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .chain_err_summary(|| format!("Could not create directory {}", parent.display()))?;
    }
    log::info!("Downloading {} to {}", url, path.display());
    if let Err(err) = download(url, path) {
        _ = std::fs::remove_file(path);
        return Err(err.set_summary(format!("Could not download {}", url)));
    }
    Ok(Fetched::Downloaded(path.to_path_buf()))
}

#[cfg(feature = "http")]
fn download(url: &str, path: &Path) -> Result<()> {
    use isahc::{
        config::{Configurable, RedirectPolicy},
        HttpClient, ReadResponseExt,
    };

    let client = HttpClient::builder()
        .timeout(std::time::Duration::from_secs(60))
        .redirect_policy(RedirectPolicy::Limit(10))
        .build()?;
    let mut response = client.get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::new(format!("Server responded with {}", status))
            .set_kind(ErrorKind::Network));
    }
    let written = response
        .copy_to_file(path)
        .chain_err_summary(|| format!("Could not write {}", path.display()))?;
    log::trace!("Wrote {} bytes to {}", written, path.display());
    Ok(())
}

#[cfg(not(feature = "http"))]
fn download(_url: &str, _path: &Path) -> Result<()> {
    Err(Error::new("mojib was built without HTTP support")
        .set_details("Enable the `http` feature or download the file manually.")
        .set_kind(ErrorKind::NotSupported))
}
