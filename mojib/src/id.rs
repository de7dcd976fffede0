//
// mojib - id module
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

//! 64-bit identifiers of emoji sequences.
//!
//! ```text
//!  63            42 41                          10 9   7 6   4 3    0
//! +----------------+------------------------------+-----+-----+------+
//! | primary (22)   | checksum of extras (32)      | st1 | st2 | flags|
//! +----------------+------------------------------+-----+-----+------+
//! ```
//!
//! Flag bit 0 is the male sign, bit 1 the female sign and bit 2 marks VS16
//! after the primary codepoint. The extra components themselves are not
//! stored; unpacking needs a [`ComponentTable`](crate::ComponentTable) that
//! maps checksums back to components.

use std::{fmt, str::FromStr};

use crate::{
    codepoint::Gender,
    components::ComponentRecord,
    error::{Error, ErrorKind, Result},
    SkinTone,
};

pub const PRIMARY_SHIFT: u32 = 42;
pub const CHECKSUM_SHIFT: u32 = 10;
pub const SKIN_TONE_1_SHIFT: u32 = 7;
pub const SKIN_TONE_2_SHIFT: u32 = 4;
pub const FLAGS_SHIFT: u32 = 0;

pub const PRIMARY_MASK: u64 = 0x3F_FFFF;
pub const CHECKSUM_MASK: u64 = 0xFFFF_FFFF;
pub const SKIN_TONE_MASK: u64 = 0x7;
pub const FLAGS_MASK: u64 = 0xF;

pub const FLAG_EMOJI_PRESENTATION: u8 = 0b100;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EmojiId(pub u64);

impl EmojiId {
    pub const fn primary_codepoint(self) -> u32 {
        ((self.0 >> PRIMARY_SHIFT) & PRIMARY_MASK) as u32
    }

    pub const fn checksum(self) -> u32 {
        ((self.0 >> CHECKSUM_SHIFT) & CHECKSUM_MASK) as u32
    }

    /// Raw 3-bit field, `0` when there is no skin tone.
    pub const fn skin_tone_1_ordinal(self) -> u8 {
        ((self.0 >> SKIN_TONE_1_SHIFT) & SKIN_TONE_MASK) as u8
    }

    pub const fn skin_tone_2_ordinal(self) -> u8 {
        ((self.0 >> SKIN_TONE_2_SHIFT) & SKIN_TONE_MASK) as u8
    }

    pub const fn flags(self) -> u8 {
        ((self.0 >> FLAGS_SHIFT) & FLAGS_MASK) as u8
    }

    pub fn gender(self) -> Gender {
        Gender::from_bits_truncate(self.flags())
    }

    pub const fn emoji_presentation(self) -> bool {
        self.flags() & FLAG_EMOJI_PRESENTATION != 0
    }

    /// Skin tones of the identifier, failing on the unused ordinals `6` and
    /// `7`.
    pub fn skin_tones(self) -> Result<(Option<SkinTone>, Option<SkinTone>)> {
        let tone = |ordinal: u8| -> Result<Option<SkinTone>> {
            if ordinal == 0 {
                return Ok(None);
            }
            SkinTone::from_ordinal(ordinal).map(Some).ok_or_else(|| {
                Error::new(format!("Invalid skin tone ordinal {} in {}", ordinal, self))
                    .set_kind(ErrorKind::ValueError)
            })
        };
        Ok((
            tone(self.skin_tone_1_ordinal())?,
            tone(self.skin_tone_2_ordinal())?,
        ))
    }
}

impl From<&ComponentRecord> for EmojiId {
    fn from(record: &ComponentRecord) -> Self {
        let mut flags = record.gender_flags();
        if record.emoji_presentation() {
            flags |= FLAG_EMOJI_PRESENTATION;
        }
        let mut id = 0;
        id |= (u64::from(record.primary_codepoint()) & PRIMARY_MASK) << PRIMARY_SHIFT;
        id |= (u64::from(record.checksum()) & CHECKSUM_MASK) << CHECKSUM_SHIFT;
        id |= (u64::from(record.skin_tone_1().map_or(0, SkinTone::ordinal)) & SKIN_TONE_MASK)
            << SKIN_TONE_1_SHIFT;
        id |= (u64::from(record.skin_tone_2().map_or(0, SkinTone::ordinal)) & SKIN_TONE_MASK)
            << SKIN_TONE_2_SHIFT;
        id |= (u64::from(flags) & FLAGS_MASK) << FLAGS_SHIFT;
        Self(id)
    }
}

impl From<u64> for EmojiId {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl From<EmojiId> for u64 {
    fn from(val: EmojiId) -> Self {
        val.0
    }
}

impl fmt::Display for EmojiId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "0x{:016X}", self.0)
    }
}

impl FromStr for EmojiId {
    type Err = Error;

    /// Parses hexadecimal identifiers with a mandatory `0x` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
            return Err(Error::new(format!("Invalid emoji ID `{}`", s))
                .set_details("Identifiers are hexadecimal and start with `0x`.")
                .set_kind(ErrorKind::ValueError));
        };
        u64::from_str_radix(hex, 16).map(Self).map_err(|err| {
            Error::from(err).set_summary(format!("Invalid hexadecimal emoji ID `{}`", s))
        })
    }
}
