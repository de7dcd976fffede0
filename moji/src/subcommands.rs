//
// moji - subcommands
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

//! Subcommand implementations. Every function writes its report to the
//! given writers so that the binary passes stdout and stderr.

use std::{io::Write, path::Path};

use mojib::{
    classify_graphemes, classify_str,
    data::{self, EmojiTest, Fetched, Qualification},
    error::{Error, ErrorKind, Result, ResultIntoError},
    ComponentRecord, ComponentTable, EmojiId,
};

fn load_data(path: &Path) -> Result<EmojiTest> {
    EmojiTest::from_path(path).map_err(|err| {
        if err.kind.is_not_found() {
            err.set_details("Run `moji fetch` to download it.")
        } else {
            err
        }
    })
}

fn format_codepoint(cp: u32) -> String {
    format!("U+{:X}", cp)
}

fn format_codepoints(cps: &[u32]) -> String {
    cps.iter()
        .copied()
        .map(format_codepoint)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(record: &ComponentRecord) -> String {
    let tone = |t: Option<mojib::SkinTone>| t.map_or_else(|| "-".to_string(), |t| t.to_string());
    format!(
        "{}\t[{}]\t{}\t{}\t{}\t0x{:08X}",
        record
            .primary()
            .map_or_else(|| "-".to_string(), format_codepoint),
        format_codepoints(record.extra_components()),
        tone(record.skin_tone_1()),
        tone(record.skin_tone_2()),
        record.gender_flags(),
        record.checksum()
    )
}

#[derive(Serialize)]
struct ClassifyRow<'a> {
    grapheme: &'a str,
    id: String,
    components: &'a ComponentRecord,
}

/// One line per extended grapheme cluster of `text`.
pub fn classify(text: &str, json: bool, out: &mut impl Write) -> Result<()> {
    for (grapheme, record) in classify_graphemes(text) {
        if json {
            let row = ClassifyRow {
                grapheme,
                id: record.id().to_string(),
                components: &record,
            };
            writeln!(out, "{}", serde_json::to_string(&row)?)?;
        } else {
            writeln!(out, "{}\t{}\t{}", grapheme, record.id(), describe(&record))?;
        }
    }
    Ok(())
}

pub fn encode(emoji: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", classify_str(emoji).id())?;
    Ok(())
}

/// IDs without extra components are decoded without reading the data file.
pub fn decode(id: &str, data_path: &Path, out: &mut impl Write) -> Result<()> {
    let id: EmojiId = id.parse()?;
    let table = if id.checksum() == 0 {
        ComponentTable::new()
    } else {
        load_data(data_path)?.component_table()
    };
    let record = table.decode(id)?;
    writeln!(out, "{}", record.to_emoji_string())?;
    Ok(())
}

fn parse_codepoint(s: &str) -> Result<u32> {
    let hex = s
        .strip_prefix("U+")
        .or_else(|| s.strip_prefix("u+"))
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    u32::from_str_radix(hex, 16).chain_err_summary(|| format!("Invalid codepoint `{}`", s))
}

pub fn checksum(codepoints: &[String], out: &mut impl Write) -> Result<()> {
    let values = codepoints
        .iter()
        .flat_map(|s| s.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|s| !s.is_empty())
        .map(parse_codepoint)
        .collect::<Result<Vec<u32>>>()?;
    writeln!(out, "0x{:08X}", mojib::checksum(&values))?;
    Ok(())
}

/// Component checksums of the fully-qualified ZWJ sequences. Rows go to
/// `out`, the header and the final count to `err`.
pub fn hashes(data_path: &Path, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let data = load_data(data_path)?;
    writeln!(
        err,
        "{:<20}\t{:<12}\t{:<35}\t{}",
        "Emoji", "Primary", "Components", "Checksum"
    )?;
    writeln!(err, "{}", "-".repeat(90))?;
    let mut count = 0;
    for entry in data.fully_qualified().filter(|e| e.is_zwj_sequence()) {
        let record = entry.record();
        if record.checksum() == 0 {
            continue;
        }
        count += 1;
        writeln!(
            out,
            "{:<20}\t{:<12}\t{:<35}\t0x{:08X}",
            entry.glyph,
            format_codepoint(record.primary_codepoint()),
            format_codepoints(record.extra_components()),
            record.checksum()
        )?;
    }
    writeln!(err, "{}", "-".repeat(90))?;
    writeln!(err, "Found {} sequences with extra components.", count)?;
    Ok(())
}

/// Round trip every entry through its ID and the component table of the
/// data file. Entries whose canonical spelling differs from the glyph are
/// reported as not representable and do not count as failures. Fails if any
/// other entry is not rebuilt exactly.
pub fn test(data_path: &Path, all: bool, out: &mut impl Write) -> Result<()> {
    let data = load_data(data_path)?;
    let table = data.component_table();
    let (mut passed, mut failed, mut unrepresentable) = (0_usize, 0_usize, 0_usize);
    for entry in data
        .iter()
        .filter(|e| all || e.status == Qualification::FullyQualified)
    {
        if !entry.is_representable() {
            unrepresentable += 1;
            writeln!(
                out,
                "SKIP {} ({}): {:?} is not representable",
                entry.name, entry.status, entry.glyph
            )?;
            continue;
        }
        let id = entry.record().id();
        let rebuilt = match table.decode(id) {
            Ok(record) => record.to_emoji_string(),
            Err(err) => {
                log::debug!("{}: {}", entry.glyph, err.summary);
                String::new()
            }
        };
        if rebuilt == entry.glyph {
            passed += 1;
        } else {
            failed += 1;
            writeln!(
                out,
                "FAIL {} ({}): {:?} -> {:?} (ID: {})",
                entry.name, entry.status, entry.glyph, rebuilt, id
            )?;
        }
    }
    writeln!(
        out,
        "{} passed, {} failed, {} not representable",
        passed, failed, unrepresentable
    )?;
    if failed > 0 {
        return Err(Error::new(format!(
            "{} of {} sequences did not survive the round trip.",
            failed,
            passed + failed
        ))
        .set_kind(ErrorKind::ValueError));
    }
    Ok(())
}

pub fn fetch(url: &str, data_path: &Path, out: &mut impl Write) -> Result<()> {
    match data::fetch(url, data_path)? {
        Fetched::Cached(path) => {
            log::info!("{} is already present.", path.display());
            writeln!(out, "{}", path.display())?;
        }
        Fetched::Downloaded(path) => {
            log::info!("Downloaded {} to {}.", url, path.display());
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = vec![];
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_classify_report() {
        let out = run(|out| classify("a\u{1F44D}\u{1F3FD}", false, out));
        assert_eq!(
            out,
            "a\t0x0001840000000000\tU+61\t[]\t-\t-\t0\t0x00000000\n\
             \u{1F44D}\u{1F3FD}\t0x07D1340000000180\tU+1F44D\t[]\tmedium\t-\t0\t0x00000000\n"
        );

        let out = run(|out| classify("\u{1F600}", true, out));
        assert_eq!(
            out,
            "{\"grapheme\":\"\u{1F600}\",\"id\":\"0x07D8000000000000\",\"components\":{\"primary_codepoint\":128512,\"extra_components\":[],\"skin_tone_1\":0,\"skin_tone_2\":0,\"gender_flags\":0,\"emoji_presentation\":false,\"checksum\":0}}\n"
        );
        assert_eq!(run(|out| classify("", false, out)), "");
    }

    #[test]
    fn test_encode_decode() {
        assert_eq!(
            run(|out| encode("\u{26F9}\u{FE0F}\u{200D}\u{2640}\u{FE0F}", out)),
            "0x009BE40000000006\n"
        );
        let missing = Path::new("/nonexistent/emoji-test.txt");
        assert_eq!(
            run(|out| decode("0x009BE40000000006", missing, out)),
            "\u{26F9}\u{FE0F}\u{200D}\u{2640}\u{FE0F}\n"
        );
        let mut out = vec![];
        let err = decode("0x07D1A3A74FB00000", missing, &mut out).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        let err = decode("07D1A3A74FB00000", missing, &mut out).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueError);
    }

    #[test]
    fn test_checksum_report() {
        assert_eq!(
            run(|out| checksum(&["1F469".to_string(), "U+1F467".to_string()], out)),
            "0xE9D3EC00\n"
        );
        assert_eq!(
            run(|out| checksum(&["1F91D, 1F9D1".to_string()], out)),
            "0x5B5F53CD\n"
        );
        assert_eq!(run(|out| checksum(&[], out)), "0x00000000\n");
        assert_eq!(
            checksum(&["1F4G9".to_string()], &mut vec![])
                .unwrap_err()
                .kind,
            ErrorKind::ValueError
        );
    }
}
