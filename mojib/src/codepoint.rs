//
// mojib - codepoint module
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

//! Codepoints with special meaning inside emoji sequences.

use std::fmt;

pub const ZWJ: u32 = 0x200D;
pub const VARIATION_SELECTOR_16: u32 = 0xFE0F;
pub const MALE_SIGN: u32 = 0x2642;
pub const FEMALE_SIGN: u32 = 0x2640;
/// `EMOJI MODIFIER FITZPATRICK TYPE-1-2`
pub const SKIN_TONE_FIRST: u32 = 0x1F3FB;
/// `EMOJI MODIFIER FITZPATRICK TYPE-6`
pub const SKIN_TONE_LAST: u32 = 0x1F3FF;

/// Returns `false` for skin tone modifiers, ZWJ, VS16 and the gender signs;
/// every other codepoint is a component of its own.
pub const fn is_base(cp: u32) -> bool {
    !matches!(
        cp,
        SKIN_TONE_FIRST..=SKIN_TONE_LAST
            | ZWJ
            | VARIATION_SELECTOR_16
            | MALE_SIGN
            | FEMALE_SIGN
    )
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum SkinTone {
    /// U+1F3FB
    Light = 1,
    /// U+1F3FC
    MediumLight = 2,
    /// U+1F3FD
    Medium = 3,
    /// U+1F3FE
    MediumDark = 4,
    /// U+1F3FF
    Dark = 5,
}

impl SkinTone {
    pub const fn from_codepoint(cp: u32) -> Option<Self> {
        if cp < SKIN_TONE_FIRST || cp > SKIN_TONE_LAST {
            return None;
        }
        Self::from_ordinal((cp - SKIN_TONE_FIRST + 1) as u8)
    }

    /// `1..=5`, anything else is `None`.
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        Some(match ordinal {
            1 => Self::Light,
            2 => Self::MediumLight,
            3 => Self::Medium,
            4 => Self::MediumDark,
            5 => Self::Dark,
            _ => return None,
        })
    }

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn codepoint(self) -> u32 {
        SKIN_TONE_FIRST + self as u32 - 1
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{}",
            match self {
                Self::Light => "light",
                Self::MediumLight => "medium-light",
                Self::Medium => "medium",
                Self::MediumDark => "medium-dark",
                Self::Dark => "dark",
            }
        )
    }
}

bitflags! {
    /// Gender signs present in a sequence.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Gender: u8 {
        const MALE   = 0b01;
        const FEMALE = 0b10;
    }
}

pub struct CodePointsIterator<'a> {
    rest: std::str::Chars<'a>,
}

impl Iterator for CodePointsIterator<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.rest.next().map(u32::from)
    }
}

pub trait CodePoints {
    fn code_points(&self) -> CodePointsIterator<'_>;
}

impl CodePoints for str {
    fn code_points(&self) -> CodePointsIterator<'_> {
        CodePointsIterator { rest: self.chars() }
    }
}

impl CodePoints for &str {
    fn code_points(&self) -> CodePointsIterator<'_> {
        CodePointsIterator { rest: self.chars() }
    }
}

impl CodePoints for String {
    fn code_points(&self) -> CodePointsIterator<'_> {
        CodePointsIterator { rest: self.chars() }
    }
}

/// Append `cp` to `s`; values that are not Unicode scalar values are
/// skipped.
pub fn push_codepoint(s: &mut String, cp: u32) {
    if let Some(c) = char::from_u32(cp) {
        s.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_base() {
        for cp in SKIN_TONE_FIRST..=SKIN_TONE_LAST {
            assert!(!is_base(cp), "U+{:X}", cp);
        }
        assert!(!is_base(ZWJ));
        assert!(!is_base(VARIATION_SELECTOR_16));
        assert!(!is_base(MALE_SIGN));
        assert!(!is_base(FEMALE_SIGN));

        assert!(is_base(SKIN_TONE_FIRST - 1));
        assert!(is_base(SKIN_TONE_LAST + 1));
        assert!(is_base(0x1F468));
        assert!(is_base(0x26F9));
        // text presentation selector is not special
        assert!(is_base(0xFE0E));
        assert!(is_base(0));
    }

    #[test]
    fn test_skin_tone() {
        assert_eq!(SkinTone::from_codepoint(0x1F3FA), None);
        assert_eq!(SkinTone::from_codepoint(0x1F3FB), Some(SkinTone::Light));
        assert_eq!(SkinTone::from_codepoint(0x1F3FF), Some(SkinTone::Dark));
        assert_eq!(SkinTone::from_codepoint(0x1F400), None);
        assert_eq!(SkinTone::from_ordinal(0), None);
        assert_eq!(SkinTone::from_ordinal(6), None);
        for ordinal in 1..=5 {
            let tone = SkinTone::from_ordinal(ordinal).unwrap();
            assert_eq!(tone.ordinal(), ordinal);
            assert_eq!(SkinTone::from_codepoint(tone.codepoint()), Some(tone));
        }
        assert_eq!(SkinTone::Medium.codepoint(), 0x1F3FD);
        assert_eq!(SkinTone::MediumDark.to_string(), "medium-dark");
    }

    #[test]
    fn test_code_points() {
        assert_eq!(
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}".code_points().collect::<Vec<_>>(),
            &[0x1F468, ZWJ, 0x1F469, ZWJ, 0x1F467]
        );
        assert_eq!(
            "\u{26F9}\u{FE0F}\u{200D}\u{2640}\u{FE0F}".code_points().collect::<Vec<_>>(),
            &[0x26F9, VARIATION_SELECTOR_16, ZWJ, FEMALE_SIGN, VARIATION_SELECTOR_16]
        );
        let owned = String::from("\u{1F43B}\u{200D}\u{2744}\u{FE0F}");
        let iter: CodePointsIterator<'_> = owned.code_points();
        assert_eq!(iter.last(), Some(VARIATION_SELECTOR_16));

        let mut s = String::new();
        push_codepoint(&mut s, 0x1F525);
        push_codepoint(&mut s, 0xD800);
        push_codepoint(&mut s, 0x110000);
        assert_eq!(s, "🔥");
    }
}
