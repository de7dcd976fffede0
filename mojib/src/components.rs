//
// mojib - components module
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

//! Split an emoji codepoint sequence into its components.
//!
//! A sequence such as `👨‍👩‍👧` (`U+1F468 ZWJ U+1F469 ZWJ U+1F467`) is
//! reduced to a [`ComponentRecord`]:
//!
//! - the *primary* codepoint, the first base codepoint (`U+1F468`),
//! - the *extra* components, every later base codepoint in order (`U+1F469`,
//!   `U+1F467`),
//! - up to two skin tone modifiers,
//! - the gender signs that were present,
//! - the [`checksum`] of the extra components.
//!
//! Joiners carry no component value and are dropped. Variation selector 16
//! is remembered only as a presentation bit, either for the primary
//! codepoint or for the extra component it follows.

use std::num::NonZeroU32;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    checksum::checksum,
    codepoint::{
        is_base, push_codepoint, CodePoints, Gender, SkinTone, FEMALE_SIGN, MALE_SIGN,
        VARIATION_SELECTOR_16, ZWJ,
    },
    id::EmojiId,
};

/// Extra components beyond this count are dropped.
pub const MAX_EXTRA_COMPONENTS: usize = 16;

pub type ExtraComponents = SmallVec<[u32; MAX_EXTRA_COMPONENTS]>;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ComponentRecord {
    primary: Option<NonZeroU32>,
    extra_components: ExtraComponents,
    skin_tone_1: Option<SkinTone>,
    skin_tone_2: Option<SkinTone>,
    gender: Gender,
    emoji_presentation: bool,
    extra_presentation: u16,
    checksum: u32,
}

impl ComponentRecord {
    /// Assemble a record from its parts, e.g. after unpacking an [`EmojiId`].
    ///
    /// Extra components past [`MAX_EXTRA_COMPONENTS`] are dropped and the
    /// checksum is recomputed.
    pub fn from_parts(
        primary: u32,
        extra_components: &[u32],
        skin_tones: (Option<SkinTone>, Option<SkinTone>),
        gender: Gender,
        emoji_presentation: bool,
    ) -> Self {
        let extra_components: ExtraComponents = extra_components
            .iter()
            .copied()
            .take(MAX_EXTRA_COMPONENTS)
            .collect();
        let checksum = checksum(&extra_components);
        Self {
            primary: NonZeroU32::new(primary),
            extra_components,
            skin_tone_1: skin_tones.0,
            skin_tone_2: skin_tones.1,
            gender,
            emoji_presentation,
            extra_presentation: 0,
            checksum,
        }
    }

    /// Set which extra components are followed by VS16, bit `i` for extra
    /// component `i`. Bits past the last extra component are cleared.
    pub fn set_extra_presentation(mut self, mask: u16) -> Self {
        self.extra_presentation = mask & presentation_mask(self.extra_components.len());
        self
    }

    pub fn primary(&self) -> Option<u32> {
        self.primary.map(NonZeroU32::get)
    }

    /// The primary codepoint, or `0` if the sequence had no base codepoint.
    pub fn primary_codepoint(&self) -> u32 {
        self.primary().unwrap_or(0)
    }

    pub fn extra_components(&self) -> &[u32] {
        &self.extra_components
    }

    pub fn skin_tone_1(&self) -> Option<SkinTone> {
        self.skin_tone_1
    }

    pub fn skin_tone_2(&self) -> Option<SkinTone> {
        self.skin_tone_2
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Bit 0 is set for the male sign, bit 1 for the female sign.
    pub fn gender_flags(&self) -> u8 {
        self.gender.bits()
    }

    /// Whether VS16 directly followed the primary codepoint.
    pub fn emoji_presentation(&self) -> bool {
        self.emoji_presentation
    }

    /// Bit `i` is set if VS16 directly followed extra component `i`. Not
    /// part of the [`EmojiId`]; the component table keeps it next to the
    /// extra components.
    pub fn extra_presentation(&self) -> u16 {
        self.extra_presentation
    }

    /// Checksum of [`ComponentRecord::extra_components`], `0` if there are
    /// none.
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn id(&self) -> EmojiId {
        EmojiId::from(self)
    }

    /// Rebuild an emoji string out of the components.
    ///
    /// The result is a canonical spelling: primary codepoint, VS16 if it was
    /// present after the primary, the first skin tone, every extra component
    /// joined with ZWJ (each followed by VS16 if it was in the input) with
    /// the second skin tone after the last one, and finally the gender
    /// signs.
    pub fn to_emoji_string(&self) -> String {
        let mut ret = String::new();
        if let Some(primary) = self.primary() {
            push_codepoint(&mut ret, primary);
        }
        if self.emoji_presentation {
            push_codepoint(&mut ret, VARIATION_SELECTOR_16);
        }
        if let Some(tone) = self.skin_tone_1 {
            push_codepoint(&mut ret, tone.codepoint());
        }
        for (i, &cp) in self.extra_components.iter().enumerate() {
            push_codepoint(&mut ret, ZWJ);
            push_codepoint(&mut ret, cp);
            if self.extra_presentation & (1 << i) != 0 {
                push_codepoint(&mut ret, VARIATION_SELECTOR_16);
            }
        }
        if let Some(tone) = self.skin_tone_2 {
            push_codepoint(&mut ret, tone.codepoint());
        }
        for (flag, sign) in [(Gender::MALE, MALE_SIGN), (Gender::FEMALE, FEMALE_SIGN)] {
            if self.gender.contains(flag) {
                push_codepoint(&mut ret, ZWJ);
                push_codepoint(&mut ret, sign);
                push_codepoint(&mut ret, VARIATION_SELECTOR_16);
            }
        }
        ret
    }
}

impl Serialize for ComponentRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ComponentRecord", 8)?;
        state.serialize_field("primary_codepoint", &self.primary_codepoint())?;
        state.serialize_field("extra_components", self.extra_components())?;
        state.serialize_field(
            "skin_tone_1",
            &self.skin_tone_1.map_or(0, SkinTone::ordinal),
        )?;
        state.serialize_field(
            "skin_tone_2",
            &self.skin_tone_2.map_or(0, SkinTone::ordinal),
        )?;
        state.serialize_field("gender_flags", &self.gender_flags())?;
        state.serialize_field("emoji_presentation", &self.emoji_presentation)?;
        state.serialize_field("extra_presentation", &self.extra_presentation)?;
        state.serialize_field("checksum", &self.checksum)?;
        state.end()
    }
}

const fn presentation_mask(len: usize) -> u16 {
    if len >= MAX_EXTRA_COMPONENTS {
        u16::MAX
    } else {
        (1 << len) - 1
    }
}

/// What the previous codepoint was, for attributing VS16.
#[derive(Clone, Copy)]
enum Previous {
    Primary,
    Extra(usize),
    Other,
}

/// Classify a sequence of codepoints in a single forward pass.
///
/// ```rust
/// # use mojib::classify;
/// let record = classify([0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467]);
/// assert_eq!(record.primary_codepoint(), 0x1F468);
/// assert_eq!(record.extra_components(), &[0x1F469, 0x1F467]);
/// assert_eq!(record.checksum(), 0xE9D3_EC00);
/// ```
pub fn classify<I>(codepoints: I) -> ComponentRecord
where
    I: IntoIterator<Item = u32>,
{
    let mut ret = ComponentRecord::default();
    let mut prev = Previous::Other;
    for cp in codepoints {
        let mut current = Previous::Other;
        if let Some(tone) = SkinTone::from_codepoint(cp) {
            if ret.skin_tone_1.is_none() {
                ret.skin_tone_1 = Some(tone);
            } else if ret.skin_tone_2.is_none() {
                ret.skin_tone_2 = Some(tone);
            }
        } else if cp == MALE_SIGN {
            ret.gender |= Gender::MALE;
        } else if cp == FEMALE_SIGN {
            ret.gender |= Gender::FEMALE;
        } else if is_base(cp) {
            if ret.primary.is_none() {
                // U+0000 leaves the primary unset, so the next base codepoint
                // takes its place.
                ret.primary = NonZeroU32::new(cp);
                current = Previous::Primary;
            } else if ret.extra_components.len() < MAX_EXTRA_COMPONENTS {
                current = Previous::Extra(ret.extra_components.len());
                ret.extra_components.push(cp);
            }
        } else if cp == VARIATION_SELECTOR_16 {
            match prev {
                Previous::Primary => ret.emoji_presentation = true,
                Previous::Extra(i) => ret.extra_presentation |= 1 << i,
                Previous::Other => {}
            }
        }
        prev = current;
    }
    if !ret.extra_components.is_empty() {
        ret.checksum = checksum(&ret.extra_components);
    }
    ret
}

pub fn classify_str(s: &str) -> ComponentRecord {
    classify(s.code_points())
}

/// Split `text` into extended grapheme clusters and classify each one.
pub fn classify_graphemes(text: &str) -> impl Iterator<Item = (&str, ComponentRecord)> + '_ {
    text.graphemes(true).map(|g| (g, classify_str(g)))
}
