//
// mojib - emoji-test.txt parser
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

//! Parsers for the data lines of `emoji-test.txt`:
//!
//! ```text
//! 1F468 200D 1F469 200D 1F467  ; fully-qualified  # 👨‍👩‍👧 E2.0 family: man, woman, girl
//! ```

use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{char, hex_digit1, space0, space1},
    combinator::{map_res, rest},
    multi::separated_list1,
    sequence::{delimited, preceded},
    IResult,
};

use super::{EmojiTestEntry, Qualification};

pub fn codepoint(input: &str) -> IResult<&str, u32> {
    map_res(hex_digit1, |s| u32::from_str_radix(s, 16))(input)
}

/// Space separated hexadecimal codepoints.
pub fn codepoints(input: &str) -> IResult<&str, Vec<u32>> {
    separated_list1(space1, codepoint)(input)
}

pub fn qualification(input: &str) -> IResult<&str, Qualification> {
    map_res(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '-'),
        str::parse::<Qualification>,
    )(input)
}

/// Emoji version, e.g. `E13.1`.
pub fn version(input: &str) -> IResult<&str, &str> {
    preceded(
        char('E'),
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
    )(input)
}

/// One data line; comment and header lines are not accepted.
pub fn entry(input: &str) -> IResult<&str, EmojiTestEntry> {
    let (input, codepoints) = preceded(space0, codepoints)(input)?;
    let (input, status) = delimited(
        delimited(space0, char(';'), space0),
        qualification,
        space0,
    )(input)?;
    let (input, _) = char('#')(input)?;
    let (input, glyph) = preceded(space0, take_till1(char::is_whitespace))(input)?;
    let (input, version) = preceded(space1, version)(input)?;
    let (input, name) = preceded(space1, rest)(input)?;
    Ok((
        input,
        EmojiTestEntry {
            codepoints,
            status,
            glyph: glyph.to_string(),
            version: version.to_string(),
            name: name.trim_end().to_string(),
            group: String::new(),
            subgroup: String::new(),
        },
    ))
}
